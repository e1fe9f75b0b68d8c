// Site content module for folio
// Static page copy is supplied as TOML; the built-in studio content is embedded at compile time.

mod types;

pub use types::{About, Hero, Plan, Project, Service, SiteContent};

use std::fs;
use std::path::Path;

use crate::error::FolioError;

const BUILTIN_CONTENT: &str = include_str!("../assets/site.toml");

/// In-page anchors, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Services,
    Pricing,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Pricing,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Pricing => "Pricing",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    /// Section bound to a digit key ('1'..='6')
    pub fn from_digit(c: char) -> Option<Section> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Section::ALL.get(index).copied()
    }
}

/// Load site content from `path`, or the built-in content when `None`
pub fn load_content(path: Option<&Path>) -> Result<SiteContent, FolioError> {
    let contents = match path {
        Some(path) => {
            #[cfg(debug_assertions)]
            log::debug!("Loading site content from {:?}", path);
            fs::read_to_string(path)?
        }
        None => BUILTIN_CONTENT.to_string(),
    };

    parse_content(&contents)
}

pub fn parse_content(contents: &str) -> Result<SiteContent, FolioError> {
    toml::from_str::<SiteContent>(contents).map_err(|e| FolioError::InvalidContent(e.to_string()))
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
