//! Shared test utilities for folio
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::contact::contact_events;
    use crate::content::load_content;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App with the built-in content and no contact endpoint
    pub fn test_app() -> App {
        App::new(load_content(None).unwrap(), None)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` into the focused form field, one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            contact_events::handle_form_key(app, key(KeyCode::Char(c)));
        }
    }
}
