//! Host Event Wiring
//!
//! - **messages**: `UiEvent` / `EventOutcome`
//! - **handler**: the `EventHandler` trait and its component impls

pub mod handler;
pub mod messages;

pub use handler::EventHandler;
pub use messages::{EventOutcome, UiEvent};
