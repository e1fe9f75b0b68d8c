//! Dropdown select widget
//!
//! A trigger showing the chosen value plus a disclosure panel listing the
//! options. Each instance owns its own open/value pair.

pub mod select_render;
mod select_state;

pub use select_render::{render_panel, render_trigger};
pub use select_state::{SelectOption, SelectState};
