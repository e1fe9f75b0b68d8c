//! folio library - terminal storefront for a small web design studio
//!
//! This library exposes the core functionality of folio for testing purposes.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod network;
pub mod notification;
pub mod page;
pub mod scroll;
pub mod select;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use notification::{NotificationQueue, NotificationVariant};
pub use select::{SelectOption, SelectState};
