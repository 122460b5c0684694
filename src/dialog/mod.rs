//! Modal dialog engine.
//!
//! - [`state`] - the open/close lifecycle and the ordered effects of each transition
//! - [`dismissal`] - which user gestures may close a dialog
//! - [`options`] - construction options for a dialog
//! - [`host`] - [`OverlayHost`], the component that owns one dialog and runs its effects
//! - [`stack`] - [`DialogStack`] for dialogs opened on top of each other
//!
//! While a dialog is `Open` its focus trap is active, its content carries
//! `aria-modal="true"` and background scrolling is locked. Those three hold
//! in no other state.

pub mod dismissal;
pub mod host;
pub mod options;
pub mod stack;
pub mod state;

pub use dismissal::{DismissalConfig, DismissalPolicy, DismissalTrigger};
pub use host::{DialogId, OverlayHost};
pub use options::DialogOptions;
pub use stack::DialogStack;
pub use state::{DialogLifecycle, DialogState, LifecycleEffect, PendingTick};
