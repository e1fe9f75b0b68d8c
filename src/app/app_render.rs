use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::contact::contact_render::render_form;
use crate::notification::render_notifications;
use crate::page::page_render::render_page;
use crate::select::render_panel;
use crate::theme;

/// Frames at least this wide show page and form side by side
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;
const FORM_WIDTH: u16 = 44;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        self.form_layout = None;

        if body_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let [page_area, form_area] =
                Layout::horizontal([Constraint::Min(40), Constraint::Length(FORM_WIDTH)])
                    .areas(body_area);
            render_page(
                &mut self.page,
                &self.content,
                frame,
                page_area,
                self.focus == Focus::Page,
            );
            self.form_layout = Some(render_form(
                &mut self.contact,
                frame,
                form_area,
                self.focus == Focus::Form,
            ));
        } else if self.focus == Focus::Form {
            self.form_layout = Some(render_form(&mut self.contact, frame, body_area, true));
        } else {
            render_page(&mut self.page, &self.content, frame, body_area, true);
        }

        self.render_hint_line(frame, hint_area);

        if let Some(layout) = self.form_layout {
            render_panel(frame, layout.service, &self.contact.service);
            render_panel(frame, layout.plan, &self.contact.plan);
        }

        render_notifications(frame, &mut self.notifications);
    }

    fn context_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            Focus::Page => {
                hints!["j/k" => "Scroll", "1-6" => "Jump to section", "Tab" => "Contact form", "x" => "Dismiss toast", "q" => "Quit"]
            }
            Focus::Form if self.contact.service.is_open() || self.contact.plan.is_open() => {
                hints!["↑/↓" => "Highlight", "Enter" => "Choose", "Esc" => "Close"]
            }
            Focus::Form => {
                hints!["Tab/Shift+Tab" => "Next/Prev field", "Enter" => "Open/Send", "Esc" => "Back to page", "Ctrl+C" => "Quit"]
            }
        }
    }

    fn render_hint_line(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

        let hints = self.context_hints();
        let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
        spans.push(Span::raw(" "));

        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
