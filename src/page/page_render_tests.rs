//! Tests for page_render

use super::*;
use crate::content::{load_content, parse_content};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_wrap_text_respects_width() {
    let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
    assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
}

#[test]
fn test_wrap_text_long_word_gets_own_line() {
    let lines = wrap_text("a extraordinarily b", 5);
    assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
}

#[test]
fn test_wrap_text_empty() {
    assert!(wrap_text("   ", 10).is_empty());
}

#[test]
fn test_anchors_in_page_order() {
    let content = load_content(None).unwrap();
    let (lines, anchors) = build_page_lines(&content, 80);

    let sections: Vec<Section> = anchors.iter().map(|(s, _)| *s).collect();
    assert_eq!(sections, Section::ALL.to_vec());

    let offsets: Vec<u16> = anchors.iter().map(|(_, line)| *line).collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert!((*offsets.last().unwrap() as usize) < lines.len());
}

#[test]
fn test_anchor_lines_hold_headings() {
    let content = load_content(None).unwrap();
    let (lines, anchors) = build_page_lines(&content, 80);

    for (section, line) in anchors.iter().skip(1) {
        let text = line_text(&lines[*line as usize]);
        match section {
            Section::About => assert_eq!(text, content.about.heading),
            other => assert_eq!(text, other.title()),
        }
    }
}

#[test]
fn test_featured_plan_is_marked() {
    let content = load_content(None).unwrap();
    let (lines, _) = build_page_lines(&content, 80);

    let marked: Vec<String> = lines
        .iter()
        .map(line_text)
        .filter(|t| t.contains("Most popular"))
        .collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].starts_with("Business"));
}

#[test]
fn test_no_line_exceeds_width() {
    let content = load_content(None).unwrap();
    let (lines, _) = build_page_lines(&content, 40);

    for line in &lines {
        let text = line_text(line);
        // Only single unbreakable words may overflow
        if text.chars().count() > 40 {
            assert!(!text.trim().contains(' '), "overflowing line: {}", text);
        }
    }
}

#[test]
fn test_minimal_content_still_has_every_anchor() {
    let content = parse_content("studio = \"S\"\n[hero]\nheadline = \"Hi\"\n[about]\nheading = \"About\"\n").unwrap();
    let (_, anchors) = build_page_lines(&content, 60);
    assert_eq!(anchors.len(), Section::ALL.len());
}

#[test]
fn test_render_page_shows_studio_and_headline() {
    let content = load_content(None).unwrap();
    let mut page = PageState::new();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            render_page(&mut page, &content, f, area, true)
        })
        .unwrap();
    let output = terminal.backend().to_string();

    assert!(output.contains(&content.studio));
    assert!(output.contains("· Home"));
    assert!(output.contains("Websites that feel"));
    assert!(page.scroll.max_offset > 0);
}

#[test]
fn test_render_after_jump_shows_section() {
    let content = load_content(None).unwrap();
    let mut page = PageState::new();
    page.jump_to(Section::Pricing);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    // First draw lays out and applies the pending jump, second shows it
    terminal
        .draw(|f| {
            let area = f.area();
            render_page(&mut page, &content, f, area, true)
        })
        .unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_page(&mut page, &content, f, area, true)
        })
        .unwrap();
    let output = terminal.backend().to_string();

    assert!(output.contains("· Pricing"));
    assert!(output.contains("Starter"));
}
