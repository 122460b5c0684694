//! overlay-kit - accessible modal dialogs for terminal UIs
//!
//! This library implements the interaction side of a modal dialog: keeping
//! keyboard focus inside the dialog, giving focus back when it closes,
//! deciding which gestures may close it, and sequencing all of that through
//! an explicit open/close lifecycle. Dialogs render with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`dom`] - Element tree with a single focus position
//! * [`focus`] - Tab order, focus trap and focus restore
//! * [`dialog`] - Lifecycle, dismissal policy, overlay host and dialog stack
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Dialog lifecycle, dismissal and the overlay host
pub mod dialog;

/// Document model the dialog engine runs against
pub mod dom;

/// Focus trapping and restoration
pub mod focus;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use dialog::{DialogOptions, DialogStack, DialogState, DismissalConfig, DismissalTrigger, OverlayHost};
pub use dom::{Document, Element, NodeId};
