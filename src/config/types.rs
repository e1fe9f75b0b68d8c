// Configuration type definitions

use serde::Deserialize;

/// Contact form configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactConfig {
    /// URL the contact form POSTs to. The form is disabled without one.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,
}
