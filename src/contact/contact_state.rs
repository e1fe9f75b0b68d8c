//! Contact form state

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tui_textarea::TextArea;

use crate::content::SiteContent;
use crate::select::SelectState;
use crate::theme;

/// Focusable form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Service,
    Plan,
    Message,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Service,
        FormField::Plan,
        FormField::Message,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Validation failures, shown to the visitor as a destructive toast
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please tell us your name")]
    MissingName,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Choose a service")]
    MissingService,
}

/// JSON payload posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub message: String,
}

pub struct ContactForm {
    pub name: TextArea<'static>,
    pub email: TextArea<'static>,
    pub service: SelectState,
    pub plan: SelectState,
    pub message: TextArea<'static>,
    pub focused: FormField,
    /// Submissions sent to the worker and not yet answered, by request id
    in_flight: HashMap<u64, ContactMessage>,
}

fn text_field(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_cursor_style(theme::form::CURSOR);
    textarea
}

fn field_text(textarea: &TextArea) -> String {
    textarea.lines().join("\n").trim().to_string()
}

impl ContactForm {
    pub fn new(content: &SiteContent) -> Self {
        let mut service = SelectState::new(content.service_options(), None);
        service.set_on_value_change(|value| log::debug!("Contact service changed to {}", value));

        let default_plan = content.featured_plan().map(|p| p.value.as_str());
        let mut plan = SelectState::new(content.plan_options(), default_plan);
        plan.set_on_value_change(|value| log::debug!("Contact plan changed to {}", value));

        Self {
            name: text_field("Your name"),
            email: text_field("you@example.com"),
            service,
            plan,
            message: text_field("Tell us about your project"),
            focused: FormField::Name,
            in_flight: HashMap::new(),
        }
    }

    /// The select that currently has its panel open, if any
    pub fn open_select(&mut self) -> Option<&mut SelectState> {
        if self.service.is_open() {
            Some(&mut self.service)
        } else if self.plan.is_open() {
            Some(&mut self.plan)
        } else {
            None
        }
    }

    /// The select under focus, if the focused field is one
    pub fn focused_select(&mut self) -> Option<&mut SelectState> {
        match self.focused {
            FormField::Service => Some(&mut self.service),
            FormField::Plan => Some(&mut self.plan),
            _ => None,
        }
    }

    /// The text area under focus, if the focused field is one
    pub fn focused_text(&mut self) -> Option<&mut TextArea<'static>> {
        match self.focused {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            _ => None,
        }
    }

    /// Move focus, closing any open panel on the way out
    pub fn focus(&mut self, field: FormField) {
        self.service.close();
        self.plan.close();
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus(self.focused.previous());
    }

    /// Validate the form and build the payload
    pub fn to_message(&self) -> Result<ContactMessage, FormError> {
        let name = field_text(&self.name);
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let email = field_text(&self.email);
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }

        let service = self
            .service
            .value()
            .ok_or(FormError::MissingService)?
            .to_string();

        Ok(ContactMessage {
            name,
            email,
            service,
            plan: self.plan.value().map(str::to_string),
            message: field_text(&self.message),
        })
    }

    /// Remember a submission handed to the worker
    pub fn track(&mut self, request_id: u64, message: ContactMessage) {
        self.in_flight.insert(request_id, message);
    }

    /// Forget an answered submission, returning what it carried
    pub fn finish(&mut self, request_id: u64) -> Option<ContactMessage> {
        self.in_flight.remove(&request_id)
    }

    /// Forget every outstanding submission, returns how many there were
    pub fn abandon_all(&mut self) -> usize {
        let count = self.in_flight.len();
        self.in_flight.clear();
        count
    }

    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether the text fields still hold exactly what `message` carried
    pub fn shows(&self, message: &ContactMessage) -> bool {
        field_text(&self.name) == message.name
            && field_text(&self.email) == message.email
            && field_text(&self.message) == message.message
    }

    /// Empty the text fields after a successful send. Selections are kept.
    pub fn clear_text(&mut self) {
        self.name = text_field("Your name");
        self.email = text_field("you@example.com");
        self.message = text_field("Tell us about your project");
    }
}

#[cfg(test)]
#[path = "contact_state_tests.rs"]
mod contact_state_tests;
