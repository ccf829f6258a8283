//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: main-thread async work (file dialogs must run on
//!   the event-loop thread)
//! - `rayon::spawn`: heavy work off the event loop (file reads, image
//!   decoding, zip assembly)
//! - `slint::invoke_from_event_loop`: returning results from rayon workers
//!   to the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
