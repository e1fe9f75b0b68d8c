//! Tests for app_render

use crate::app::Focus;
use crate::notification::NotificationVariant;
use crate::test_utils::test_helpers::test_app;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_app(app: &mut crate::app::App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_narrow_frame_shows_page_only() {
    let mut app = test_app();
    let output = render_app(&mut app, 80, 24);

    assert!(output.contains(&app.content.studio));
    assert!(!output.contains("Request a quote"));
    assert!(app.form_layout.is_none());
    assert!(output.contains("Jump to section"));
}

#[test]
fn test_narrow_frame_with_form_focus_shows_form() {
    let mut app = test_app();
    app.focus = Focus::Form;
    let output = render_app(&mut app, 80, 30);

    assert!(output.contains("Request a quote"));
    assert!(output.contains("Next/Prev field"));
    assert!(app.form_layout.is_some());
}

#[test]
fn test_wide_frame_shows_page_and_form() {
    let mut app = test_app();
    let output = render_app(&mut app, 140, 32);

    assert!(output.contains(&app.content.studio));
    assert!(output.contains("Request a quote"));
}

#[test]
fn test_open_select_panel_is_drawn() {
    let mut app = test_app();
    app.focus = Focus::Form;
    app.contact.service.open();
    let output = render_app(&mut app, 140, 40);

    for service in &app.content.services {
        assert!(output.contains(&service.name), "missing {}", service.name);
    }
    assert!(output.contains("Choose"));
}

#[test]
fn test_notifications_drawn_on_top() {
    let mut app = test_app();
    app.notifications.notify(
        "Error",
        "Try again",
        NotificationVariant::Destructive,
    );
    let output = render_app(&mut app, 140, 32);

    assert!(output.contains("Try again"));
}
