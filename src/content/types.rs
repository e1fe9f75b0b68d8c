// Site content type definitions

use serde::Deserialize;

use crate::select::SelectOption;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Hero {
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub call_to_action: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct About {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// A service offered by the studio
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub value: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

/// A pricing card
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub value: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

/// A portfolio entry
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Root content structure
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub studio: String,
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub pricing: Vec<Plan>,
    #[serde(default)]
    pub portfolio: Vec<Project>,
}

impl SiteContent {
    /// Services as choices for the contact form
    pub fn service_options(&self) -> Vec<SelectOption> {
        self.services
            .iter()
            .map(|s| SelectOption::new(&s.value, &s.name))
            .collect()
    }

    /// Pricing plans as choices for the contact form
    pub fn plan_options(&self) -> Vec<SelectOption> {
        self.pricing
            .iter()
            .map(|p| SelectOption::new(&p.value, &format!("{} ({})", p.name, p.price)))
            .collect()
    }

    /// The plan marked as highlighted, used as the form's default
    pub fn featured_plan(&self) -> Option<&Plan> {
        self.pricing.iter().find(|p| p.highlighted)
    }
}
