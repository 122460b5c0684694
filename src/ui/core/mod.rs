//! Core UI building blocks.
//!
//! # Module Components
//!
//! - [`actions`] - Actions components hand back to the application loop
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//!
//! Components receive terminal events together with the shared
//! [`Document`](crate::dom::Document), mutate it, and report what happened
//! as an [`Action`]. The application loop routes those actions and
//! renders every component once per frame.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
