//! Contact form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_textarea::TextArea;

use super::contact_state::{ContactForm, FormField};
use crate::app::FormLayout;
use crate::select::render_trigger;
use crate::theme;

fn style_text_field(textarea: &mut TextArea<'static>, title: &str, focused: bool) {
    let border = if focused {
        theme::form::BORDER_FOCUSED
    } else {
        theme::form::BORDER_UNFOCUSED
    };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(border)),
    );
    textarea.set_cursor_style(if focused {
        theme::form::CURSOR
    } else {
        Style::default()
    });
}

/// Render the form into `area`, returns where the select triggers landed
pub fn render_form(
    form: &mut ContactForm,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) -> FormLayout {
    let border = if focused {
        theme::form::BORDER_FOCUSED
    } else {
        theme::form::BORDER_UNFOCUSED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Request a quote ")
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, email_area, service_area, plan_area, message_area, submit_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

    let is_focused = |field: FormField| focused && form.focused == field;
    let name_focused = is_focused(FormField::Name);
    let email_focused = is_focused(FormField::Email);
    let service_focused = is_focused(FormField::Service);
    let plan_focused = is_focused(FormField::Plan);
    let message_focused = is_focused(FormField::Message);
    let submit_focused = is_focused(FormField::Submit);

    style_text_field(&mut form.name, "Name", name_focused);
    frame.render_widget(&form.name, name_area);

    style_text_field(&mut form.email, "Email", email_focused);
    frame.render_widget(&form.email, email_area);

    render_trigger(
        frame,
        service_area,
        &form.service,
        "Service",
        "Choose a service",
        service_focused,
    );
    render_trigger(
        frame,
        plan_area,
        &form.plan,
        "Budget",
        "Choose a plan",
        plan_focused,
    );

    style_text_field(&mut form.message, "Message", message_focused);
    frame.render_widget(&form.message, message_area);

    let button_style = if submit_focused {
        theme::form::BUTTON_FOCUSED
    } else {
        theme::form::BUTTON
    };
    let mut spans = vec![Span::styled(" Send message ", button_style)];
    if form.pending() > 0 {
        spans.push(Span::styled(
            format!("  Sending… ({})", form.pending()),
            Style::default().fg(theme::form::PENDING),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), submit_area);

    FormLayout {
        service: service_area,
        plan: plan_area,
    }
}

#[cfg(test)]
#[path = "contact_render_tests.rs"]
mod contact_render_tests;
