//! Focus management for modal overlays.
//!
//! - [`tabbable`] computes the tab sequence of a subtree
//! - [`FocusTrapController`] keeps Tab/Shift+Tab inside a container
//! - [`FocusRestoreManager`] returns focus to where it was before a dialog opened
//!
//! Both controllers write to the document's single focus position and are the
//! only parts of the crate that do so.

pub mod restore;
pub mod tabbable;
pub mod trap;

pub use restore::{FocusRestoreManager, RestoreTarget};
pub use tabbable::{is_tabbable, tabbable_elements};
pub use trap::FocusTrapController;
