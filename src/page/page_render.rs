//! Page rendering
//!
//! Turns `SiteContent` into styled lines, word-wrapped to the viewport width.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::PageState;
use crate::content::{Section, SiteContent};
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

/// Greedy word wrap on character count
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct PageBuilder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    width: usize,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            width: width as usize,
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, section: Section, text: &str) {
        self.anchors.push((section, self.lines.len() as u16));
        self.lines
            .push(Line::from(Span::styled(text.to_string(), theme::page::SECTION_HEADING)));
        self.blank();
    }

    fn wrapped(&mut self, text: &str, indent: usize, style: Style) {
        let pad = " ".repeat(indent);
        for line in wrap_text(text, self.width.saturating_sub(indent)) {
            self.lines
                .push(Line::from(Span::styled(format!("{}{}", pad, line), style)));
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }
}

/// Lay out every section, returning the lines and each section's first line
pub fn build_page_lines(
    content: &SiteContent,
    width: u16,
) -> (Vec<Line<'static>>, Vec<(Section, u16)>) {
    let mut page = PageBuilder::new(width);
    let body = Style::default().fg(theme::page::BODY);

    // Hero
    page.anchors.push((Section::Hero, 0));
    page.blank();
    page.wrapped(&content.hero.headline, 0, theme::page::HEADLINE);
    page.wrapped(
        &content.hero.tagline,
        0,
        Style::default().fg(theme::page::TAGLINE),
    );
    if !content.hero.call_to_action.is_empty() {
        page.blank();
        page.push(Line::from(Span::styled(
            format!(" {} → ", content.hero.call_to_action),
            theme::page::CALL_TO_ACTION,
        )));
    }
    page.blank();

    // About
    page.heading(Section::About, &content.about.heading);
    for paragraph in &content.about.paragraphs {
        page.wrapped(paragraph, 0, body);
        page.blank();
    }

    // Services
    page.heading(Section::Services, "Services");
    for service in &content.services {
        page.push(Line::from(Span::styled(
            format!("◆ {}", service.name),
            theme::page::ITEM_NAME,
        )));
        page.wrapped(&service.summary, 2, body);
        page.blank();
    }

    // Pricing
    page.heading(Section::Pricing, "Pricing");
    for plan in &content.pricing {
        let mut spans = vec![
            Span::styled(plan.name.clone(), theme::page::ITEM_NAME),
            Span::raw("  "),
            Span::styled(plan.price.clone(), Style::default().fg(theme::page::PRICE)),
        ];
        if plan.highlighted {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("★ Most popular", theme::page::PLAN_HIGHLIGHT));
        }
        page.push(Line::from(spans));
        for feature in &plan.features {
            page.wrapped(&format!("• {}", feature), 2, body);
        }
        page.blank();
    }

    // Portfolio
    page.heading(Section::Portfolio, "Portfolio");
    for project in &content.portfolio {
        page.push(Line::from(Span::styled(
            project.title.clone(),
            theme::page::ITEM_NAME,
        )));
        page.wrapped(&project.description, 2, body);
        if let Some(url) = &project.url {
            page.push(Line::from(Span::styled(format!("  {}", url), theme::page::LINK)));
        }
        page.blank();
    }

    // Contact
    page.heading(Section::Contact, "Contact");
    page.wrapped(
        "Ready to start? Press Tab to fill in the contact form and we'll reply within two working days.",
        0,
        body,
    );

    (page.lines, page.anchors)
}

/// Render the page into `area`, updating scroll bounds and anchors
pub fn render_page(
    page: &mut PageState,
    content: &SiteContent,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) {
    let border_color = if focused {
        theme::page::BORDER_FOCUSED
    } else {
        theme::page::BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", content.studio),
                Style::default().fg(theme::page::STUDIO),
            ),
            Span::raw(format!("· {} ", page.current_section().title())),
        ]));

    let inner = block.inner(area);
    let (lines, anchors) = build_page_lines(content, inner.width.saturating_sub(2));
    let line_count = lines.len();
    page.update_layout(anchors, line_count as u32, inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((page.scroll.offset, 0));

    frame.render_widget(paragraph, area);

    render_vertical_scrollbar(
        frame,
        area,
        line_count,
        inner.height as usize,
        page.scroll.offset as usize,
        border_color,
    );
}

#[cfg(test)]
#[path = "page_render_tests.rs"]
mod page_render_tests;
