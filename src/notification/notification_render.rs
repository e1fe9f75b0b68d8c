//! Notification rendering
//!
//! Draws the toast stack in the top-right corner of the frame.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{Notification, NotificationQueue};
use crate::widgets::popup;

const MARGIN: u16 = 1;
const TOAST_HEIGHT: u16 = 4; // title + description + 2 borders
const MIN_WIDTH: u16 = 12;

/// Render every live toast, stacked top to bottom in insertion order.
///
/// Call this last so the toasts float above the rest of the UI. Expired
/// entries are swept first so a stale toast is never drawn.
pub fn render_notifications(frame: &mut Frame, queue: &mut NotificationQueue) {
    let now = Instant::now();
    queue.expire(now);

    let frame_area = frame.area();
    let mut y = MARGIN;

    for notif in queue.visible_at(now) {
        if y.saturating_add(TOAST_HEIGHT) > frame_area.height.saturating_sub(MARGIN) {
            break;
        }

        let area = toast_area(frame_area, notif, y);
        if area.width < MIN_WIDTH {
            return;
        }

        render_toast(frame, notif, area);
        y += TOAST_HEIGHT;
    }
}

fn toast_area(frame_area: Rect, notif: &Notification, y: u16) -> Rect {
    let content_width = notif
        .title
        .chars()
        .count()
        .max(notif.description.chars().count());
    // Clamp before narrowing, titles can be arbitrarily long
    let width = u16::try_from(content_width.saturating_add(4))
        .unwrap_or(u16::MAX)
        .max(MIN_WIDTH)
        .min(frame_area.width.saturating_sub(MARGIN * 2));

    Rect {
        x: frame_area.width.saturating_sub(width.saturating_add(MARGIN)),
        y,
        width,
        height: TOAST_HEIGHT,
    }
}

fn render_toast(frame: &mut Frame, notif: &Notification, area: Rect) {
    let style = notif.variant.style();

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", notif.title),
            Style::default()
                .fg(style.fg)
                .bg(style.bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {} ", notif.description),
            Style::default().fg(style.fg).bg(style.bg),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
