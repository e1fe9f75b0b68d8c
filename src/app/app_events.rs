use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::{App, Focus};
use crate::contact::contact_events;
use crate::content::Section;

/// Upper bound on event polling - lets notification expiry show up promptly
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        contact_events::poll_contact_responses(self);
        self.expire_notifications(Instant::now());

        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Sweep expired toasts, marking the frame dirty if any went away
    pub fn expire_notifications(&mut self, now: Instant) {
        if self.notifications.expire(now) > 0 {
            self.mark_dirty();
        }
    }

    /// How long to wait for input before the next loop iteration.
    ///
    /// Zero when a redraw is already due, otherwise no longer than the next
    /// toast deadline.
    pub(super) fn poll_timeout(&self, now: Instant) -> Duration {
        if self.should_render() {
            return Duration::ZERO;
        }

        self.notifications
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .map_or(EVENT_POLL_TIMEOUT, |d| d.min(EVENT_POLL_TIMEOUT))
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => contact_events::handle_form_key(self, key),
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus = Focus::Form,
            KeyCode::Char('j') | KeyCode::Down => self.page.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.page.scroll.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page.scroll.page_down(),
            KeyCode::PageUp => self.page.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.page.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.page.scroll.jump_to_bottom(),
            KeyCode::Char('x') => {
                self.notifications.dismiss_oldest();
            }
            KeyCode::Char(c) => {
                if let Some(section) = Section::from_digit(c) {
                    self.page.jump_to(section);
                    if section == Section::Contact {
                        self.focus = Focus::Form;
                    }
                }
            }
            _ => {}
        }
    }
}
