//! Notification queue state
//!
//! Holds the ordered sequence of toasts and sweeps them once their deadline
//! passes. All deadlines come from the monotonic clock.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::theme;

/// How long every notification stays visible
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(5000);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle returned by [`NotificationQueue::notify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Presentation variant - has no effect on lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Red toast for failures
    Destructive,
}

impl NotificationVariant {
    pub fn style(self) -> theme::notification::ToastStyle {
        match self {
            NotificationVariant::Default => theme::notification::DEFAULT,
            NotificationVariant::Destructive => theme::notification::DESTRUCTIVE,
        }
    }
}

/// A single toast with its scheduled removal time
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: Instant,
    pub deadline: Instant,
}

impl Notification {
    fn new(
        title: &str,
        description: &str,
        variant: NotificationVariant,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            title: title.to_string(),
            description: description.to_string(),
            variant,
            created_at,
            deadline: created_at + NOTIFICATION_LIFETIME,
        }
    }

    /// An entry is gone once its deadline is reached
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Ordered, self-expiring collection of toasts.
///
/// Insertion order is display order. Entries are owned by the queue and
/// nothing outside it holds them after removal.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast that expires `NOTIFICATION_LIFETIME` from now
    pub fn notify(
        &mut self,
        title: &str,
        description: &str,
        variant: NotificationVariant,
    ) -> NotificationId {
        self.notify_at(Instant::now(), title, description, variant)
    }

    /// Append a toast created at `now`
    pub fn notify_at(
        &mut self,
        now: Instant,
        title: &str,
        description: &str,
        variant: NotificationVariant,
    ) -> NotificationId {
        let notification = Notification::new(title, description, variant, now);
        let id = notification.id;

        #[cfg(debug_assertions)]
        log::debug!("Notification {:?} queued: {} ({:?})", id, title, variant);

        self.entries.push_back(notification);
        id
    }

    /// Remove a toast by id. Unknown or already-expired ids are a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.entries.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Dismiss the oldest visible toast, if any
    pub fn dismiss_oldest(&mut self) -> Option<NotificationId> {
        self.entries.pop_front().map(|n| n.id)
    }

    /// Drop every entry whose deadline has been reached, returns how many
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| !n.is_expired_at(now));
        before - self.entries.len()
    }

    /// Entries still alive at `now`, in insertion order
    pub fn visible_at(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| !n.is_expired_at(now))
    }

    /// Entries still alive right now, whether or not `expire` has run
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible_at(Instant::now())
    }

    /// Earliest pending deadline, used to wake the event loop in time
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|n| n.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Titles of stored entries (test-only)
    #[cfg(test)]
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|n| n.title.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
