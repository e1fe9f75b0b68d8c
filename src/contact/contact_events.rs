//! Contact form key handling and submission results

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::contact_state::FormField;
use super::contact_worker::ContactResponse;
use crate::app::{App, Focus};
use crate::notification::NotificationVariant;

pub const SENT_TITLE: &str = "Saved";
pub const SENT_DESCRIPTION: &str = "Your message was sent";
pub const FAILED_TITLE: &str = "Error";
pub const FAILED_DESCRIPTION: &str = "Try again";
pub const INVALID_TITLE: &str = "Missing details";
pub const UNAVAILABLE_TITLE: &str = "Contact form unavailable";

pub fn handle_form_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.contact;

    // An open panel captures navigation until it closes
    if let Some(select) = form.open_select() {
        match key.code {
            KeyCode::Up => select.highlight_previous(),
            KeyCode::Down => select.highlight_next(),
            KeyCode::Enter => {
                select.select_highlighted();
            }
            KeyCode::Esc => select.close(),
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_previous(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.focus = Focus::Page,
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_previous(),
        KeyCode::Enter | KeyCode::Char(' ')
            if matches!(form.focused, FormField::Service | FormField::Plan) =>
        {
            if let Some(select) = form.focused_select() {
                select.toggle();
            }
        }
        KeyCode::Enter if form.focused == FormField::Submit => submit_form(app),
        KeyCode::Enter if form.focused != FormField::Message => form.focus_next(),
        _ => {
            if let Some(textarea) = form.focused_text() {
                textarea.input(key);
            }
        }
    }
}

/// Validate and hand the form to the worker, or explain why not
pub fn submit_form(app: &mut App) {
    let message = match app.contact.to_message() {
        Ok(message) => message,
        Err(e) => {
            app.notifications.notify(
                INVALID_TITLE,
                &e.to_string(),
                NotificationVariant::Destructive,
            );
            return;
        }
    };

    let Some(client) = app.contact_client.as_mut() else {
        app.notifications.notify(
            UNAVAILABLE_TITLE,
            "No contact endpoint is configured",
            NotificationVariant::Destructive,
        );
        return;
    };

    match client.submit(message.clone()) {
        Some(request_id) => {
            log::debug!("Contact request {} queued", request_id);
            app.contact.track(request_id, message);
        }
        None => {
            app.notifications.notify(
                FAILED_TITLE,
                FAILED_DESCRIPTION,
                NotificationVariant::Destructive,
            );
        }
    }
}

/// Turn worker responses into notifications
pub fn poll_contact_responses(app: &mut App) {
    let Some(client) = app.contact_client.as_mut() else {
        return;
    };

    let responses = client.poll();
    let worker_gone = client.worker_gone();

    for response in responses {
        match response {
            ContactResponse::Sent { request_id } => {
                // Keep anything typed since this submission went out
                if let Some(sent) = app.contact.finish(request_id) {
                    if app.contact.shows(&sent) {
                        app.contact.clear_text();
                    }
                }
                app.notifications.notify(
                    SENT_TITLE,
                    SENT_DESCRIPTION,
                    NotificationVariant::Default,
                );
            }
            ContactResponse::Failed { request_id } => {
                app.contact.finish(request_id);
                app.notifications.notify(
                    FAILED_TITLE,
                    FAILED_DESCRIPTION,
                    NotificationVariant::Destructive,
                );
            }
        }
        app.mark_dirty();
    }

    // Nothing left to answer what is still outstanding
    if worker_gone && app.contact.abandon_all() > 0 {
        app.notifications.notify(
            FAILED_TITLE,
            FAILED_DESCRIPTION,
            NotificationVariant::Destructive,
        );
        app.mark_dirty();
    }
}

#[cfg(test)]
#[path = "contact_events_tests.rs"]
mod contact_events_tests;
