//! Constants used throughout the crate
//!
//! This module centralizes attribute names, ARIA values, UI text, and other
//! constant values to improve maintainability and consistency.

// Element attributes
pub const ATTR_ID: &str = "id";
pub const ATTR_ROLE: &str = "role";
pub const ATTR_TABINDEX: &str = "tabindex";
pub const ATTR_DISABLED: &str = "disabled";
pub const ATTR_HIDDEN: &str = "hidden";
pub const ATTR_INERT: &str = "inert";
pub const ATTR_HREF: &str = "href";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_VALUE: &str = "value";
pub const ATTR_CONTENTEDITABLE: &str = "contenteditable";
pub const ATTR_AUTOFOCUS: &str = "autofocus";

// ARIA attributes
pub const ATTR_ARIA_MODAL: &str = "aria-modal";
pub const ATTR_ARIA_HIDDEN: &str = "aria-hidden";
pub const ATTR_ARIA_LABEL: &str = "aria-label";
pub const ATTR_ARIA_LABELLEDBY: &str = "aria-labelledby";
pub const ATTR_ARIA_DESCRIBEDBY: &str = "aria-describedby";

// Data attributes owned by the overlay host
/// Marks an element as a close affordance for its dialog
pub const ATTR_DISMISS: &str = "data-dismiss";
/// Present on the body while a modal dialog locks background scroll
pub const ATTR_SCROLL_LOCKED: &str = "data-scroll-locked";
/// Marks the overlay wrapper, backdrop and content region
pub const ATTR_OVERLAY_PART: &str = "data-overlay-part";

pub const ROLE_DIALOG: &str = "dialog";
pub const PART_PORTAL: &str = "portal";
pub const PART_BACKDROP: &str = "backdrop";
pub const PART_CONTENT: &str = "content";
pub const PART_BODY: &str = "body";

// UI Text
pub const DEFAULT_DIALOG_TITLE: &str = "Dialog";
pub const CLOSE_BUTTON_LABEL: &str = "✕";
pub const CLOSE_BUTTON_ARIA_LABEL: &str = "Close";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "overlay-kit.toml";
pub const APP_DIR_NAME: &str = "overlay-kit";
pub const LOG_FILE_NAME: &str = "overlay-kit.log";
pub const LOG_DIALOG_TITLE: &str = "Logs";
pub const LOG_DIALOG_EMPTY: &str = "No log entries yet. Set [logging] enabled = true to record them.";

/// Entries kept in memory for the log dialog; older ones are dropped
pub const MAX_LOG_ENTRIES: usize = 500;

// Log Messages
pub const LOG_MOUNT_POINT_DETACHED: &str = "⚠️ Dialog mount point is not attached to the document; dialog stays in Opening";
pub const LOG_DISMISS_DENIED: &str = "Dismissal denied by policy";

// UI Layout Constants
/// Minimum dialog size as a percentage of the screen
pub const DIALOG_MIN_PERCENT: u16 = 20;
/// Maximum dialog size as a percentage of the screen
pub const DIALOG_MAX_PERCENT: u16 = 100;
/// Default dialog width as a percentage of the screen
pub const DIALOG_DEFAULT_WIDTH_PERCENT: u16 = 50;
/// Default dialog height as a percentage of the screen
pub const DIALOG_DEFAULT_HEIGHT_PERCENT: u16 = 40;
