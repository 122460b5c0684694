//! Reusable UI components

pub mod demo_page;
pub mod dialog_frame;

// Component exports
pub use demo_page::DemoPage;
