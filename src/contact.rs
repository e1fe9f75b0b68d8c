//! Contact form for folio
//!
//! Form state, the background submission worker, key handling and rendering.

pub mod contact_events;
pub mod contact_render;
mod contact_state;
pub mod contact_worker;

pub use contact_state::{ContactForm, ContactMessage, FormError, FormField};
pub use contact_worker::{ContactClient, ContactRequest, ContactResponse};
