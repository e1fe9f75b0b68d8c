use ratatui::layout::Rect;

use crate::contact::{ContactClient, ContactForm};
use crate::content::SiteContent;
use crate::notification::NotificationQueue;
use crate::page::PageState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Form,
}

/// Where the select triggers were drawn on the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormLayout {
    pub service: Rect,
    pub plan: Rect,
}

pub struct App {
    pub content: SiteContent,
    pub page: PageState,
    pub focus: Focus,
    pub contact: ContactForm,
    /// None when no contact endpoint is configured
    pub contact_client: Option<ContactClient>,
    pub notifications: NotificationQueue,
    pub form_layout: Option<FormLayout>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(content: SiteContent, contact_client: Option<ContactClient>) -> Self {
        let contact = ContactForm::new(&content);

        Self {
            content,
            page: PageState::new(),
            focus: Focus::Page,
            contact,
            contact_client,
            notifications: NotificationQueue::new(),
            form_layout: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::test_app;

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert_eq!(app.focus, Focus::Page);
        assert_eq!(app.page.scroll.offset, 0);
        assert!(!app.should_quit());
        assert!(app.notifications.is_empty());
        assert!(app.contact_client.is_none());
    }

    #[test]
    fn test_initial_state_needs_render() {
        let app = test_app();
        assert!(app.should_render());
    }

    #[test]
    fn test_dirty_flag_round_trip() {
        let mut app = test_app();

        app.clear_dirty();
        assert!(!app.should_render());

        app.mark_dirty();
        assert!(app.should_render());
    }
}
