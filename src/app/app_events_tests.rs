//! Tests for app_events

use crate::app::Focus;
use crate::content::Section;
use crate::notification::NotificationVariant;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

fn laid_out_app() -> crate::app::App {
    let mut app = test_app();
    let mut terminal =
        ratatui::Terminal::new(ratatui::backend::TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    app
}

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let mut app = test_app();
    app.focus = Focus::Form;

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
}

#[test]
fn test_q_quits_only_from_page() {
    let mut app = test_app();
    app.focus = Focus::Form;
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.contact.name.lines()[0], "q");

    app.focus = Focus::Page;
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_tab_moves_focus_to_form() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Form);
}

#[test]
fn test_scroll_keys() {
    let mut app = laid_out_app();

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.page.scroll.offset, 2);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.page.scroll.offset, 1);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.page.scroll.offset, app.page.scroll.max_offset);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.page.scroll.offset, 0);
}

#[test]
fn test_digit_jumps_to_section() {
    let mut app = laid_out_app();

    app.handle_key_event(key(KeyCode::Char('3')));

    let services = app.page.anchor(Section::Services).unwrap();
    assert_eq!(app.page.scroll.offset, services.min(app.page.scroll.max_offset));
    assert_eq!(app.focus, Focus::Page);
}

#[test]
fn test_contact_digit_focuses_form() {
    let mut app = laid_out_app();

    app.handle_key_event(key(KeyCode::Char('6')));

    assert_eq!(app.focus, Focus::Form);
    assert_eq!(app.page.scroll.offset, app.page.scroll.max_offset);
}

#[test]
fn test_x_dismisses_oldest_notification() {
    let mut app = test_app();
    app.notifications
        .notify("First", "", NotificationVariant::Default);
    app.notifications
        .notify("Second", "", NotificationVariant::Default);

    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(app.notifications.titles(), vec!["Second"]);
}

#[test]
fn test_key_marks_dirty() {
    let mut app = test_app();
    app.clear_dirty();

    app.handle_key_event(key(KeyCode::Char('j')));

    assert!(app.should_render());
}

#[test]
fn test_expire_notifications_marks_dirty_only_when_removed() {
    let mut app = test_app();
    let start = Instant::now();
    app.notifications
        .notify_at(start, "Saved", "", NotificationVariant::Default);
    app.clear_dirty();

    app.expire_notifications(start + Duration::from_millis(4000));
    assert!(!app.should_render());

    app.expire_notifications(start + Duration::from_millis(5000));
    assert!(app.should_render());
    assert!(app.notifications.is_empty());
}

#[test]
fn test_poll_timeout_is_zero_when_redraw_due() {
    let mut app = test_app();
    app.mark_dirty();

    assert_eq!(app.poll_timeout(Instant::now()), Duration::ZERO);
}

#[test]
fn test_poll_timeout_defaults_without_toasts() {
    let mut app = test_app();
    app.clear_dirty();

    assert_eq!(app.poll_timeout(Instant::now()), Duration::from_millis(100));
}

#[test]
fn test_poll_timeout_wakes_at_next_deadline() {
    let mut app = test_app();
    let start = Instant::now();
    app.notifications
        .notify_at(start, "Saved", "", NotificationVariant::Default);
    app.clear_dirty();

    assert_eq!(
        app.poll_timeout(start + Duration::from_millis(4970)),
        Duration::from_millis(30)
    );
    assert_eq!(app.poll_timeout(start), Duration::from_millis(100));
}

#[test]
fn test_sweep_makes_next_poll_immediate() {
    let mut app = test_app();
    let start = Instant::now();
    app.notifications
        .notify_at(start, "Saved", "", NotificationVariant::Default);
    app.clear_dirty();

    let now = start + Duration::from_millis(5000);
    app.expire_notifications(now);

    assert_eq!(app.poll_timeout(now), Duration::ZERO);
}
