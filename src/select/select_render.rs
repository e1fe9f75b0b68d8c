//! Select rendering
//!
//! The trigger is drawn inline with the form; the panel is drawn afterwards
//! as a floating overlay anchored to the trigger.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::select_state::SelectState;
use crate::theme;
use crate::widgets::popup;

/// Draw the trigger field. `title` labels the border.
pub fn render_trigger(
    frame: &mut Frame,
    area: Rect,
    state: &SelectState,
    title: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_color = if focused {
        theme::select::BORDER_FOCUSED
    } else {
        theme::select::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, indicator_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let text = match state.selected_label() {
        Some(label) => Span::styled(label.to_string(), Style::default().fg(theme::select::VALUE)),
        None => Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme::select::PLACEHOLDER),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), text_area);

    let indicator = if state.is_open() { "▴" } else { "▾" };
    frame.render_widget(
        Paragraph::new(Span::styled(
            indicator,
            Style::default().fg(theme::select::INDICATOR),
        )),
        indicator_area,
    );
}

/// Draw the option panel for an open select, returns the panel area.
///
/// Placed below the trigger, or above it when the frame has no room below.
pub fn render_panel(frame: &mut Frame, trigger: Rect, state: &SelectState) -> Option<Rect> {
    if !state.is_open() {
        return None;
    }

    let height = u16::try_from(state.options().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let frame_area = frame.area();
    let room_below = frame_area
        .height
        .saturating_sub(trigger.y.saturating_add(trigger.height));

    let area = if room_below >= height || room_below >= trigger.y {
        popup::popup_below_anchor(frame_area, trigger, trigger.width, height)
    } else {
        popup::popup_above_anchor(trigger, trigger.width, height, 0)
    };

    if area.height < 3 || area.width < 4 {
        return None;
    }

    popup::clear_area(frame, area);

    let lines: Vec<Line> = state
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = state.value() == Some(option.value.as_str());
            let marker = if is_selected { "● " } else { "  " };
            let style = if i == state.highlighted() {
                theme::select::HIGHLIGHT
            } else if is_selected {
                Style::default().fg(theme::select::OPTION_SELECTED)
            } else {
                Style::default().fg(theme::select::OPTION)
            };
            Line::from(Span::styled(format!("{}{}", marker, option.label), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::select::PANEL_BORDER))
        .style(Style::default().bg(theme::select::PANEL_BG));

    frame.render_widget(Paragraph::new(lines).block(block), area);
    Some(area)
}

#[cfg(test)]
#[path = "select_render_tests.rs"]
mod select_render_tests;
