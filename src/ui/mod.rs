//! UI module for overlay-kit
//!
//! This module hosts the terminal front end: the component abstractions the
//! dialog engine renders through, the demo page and the main event loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
