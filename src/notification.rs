//! Notification module for folio
//!
//! Provides a queue of transient toasts. Each toast expires on its own
//! deadline; the owning component passes the queue explicitly to whoever
//! needs to post into it.

mod notification_render;
mod notification_state;

pub use notification_render::render_notifications;
pub use notification_state::{
    NOTIFICATION_LIFETIME, Notification, NotificationId, NotificationQueue, NotificationVariant,
};
