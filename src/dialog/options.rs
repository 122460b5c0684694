use super::dismissal::DismissalConfig;
use crate::constants::{
    DEFAULT_DIALOG_TITLE, DIALOG_DEFAULT_HEIGHT_PERCENT, DIALOG_DEFAULT_WIDTH_PERCENT, DIALOG_MAX_PERCENT, DIALOG_MIN_PERCENT,
};
use crate::dom::NodeId;

/// Construction options for an [`OverlayHost`](super::OverlayHost).
#[derive(Debug, Clone, PartialEq)]
pub struct DialogOptions {
    pub dismissal: DismissalConfig,
    /// Element to focus when the dialog opens; ignored unless it ends up
    /// inside the dialog content and can take focus.
    pub initial_focus: Option<NodeId>,
    pub title: String,
    pub description: Option<String>,
    /// Render the built-in close control. Only shown while closable.
    pub close_button: bool,
    /// Where the overlay attaches; the document body when unset.
    pub mount_point: Option<NodeId>,
    /// Dialog box size as a percentage of the terminal area.
    pub width_percent: u16,
    pub height_percent: u16,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            dismissal: DismissalConfig::default(),
            initial_focus: None,
            title: DEFAULT_DIALOG_TITLE.to_string(),
            description: None,
            close_button: true,
            mount_point: None,
            width_percent: DIALOG_DEFAULT_WIDTH_PERCENT,
            height_percent: DIALOG_DEFAULT_HEIGHT_PERCENT,
        }
    }
}

impl DialogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismissal(mut self, dismissal: DismissalConfig) -> Self {
        self.dismissal = dismissal;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.dismissal.closable = closable;
        self
    }

    pub fn close_on_esc(mut self, enabled: bool) -> Self {
        self.dismissal.close_on_esc = enabled;
        self
    }

    pub fn close_on_backdrop_click(mut self, enabled: bool) -> Self {
        self.dismissal.close_on_backdrop_click = enabled;
        self
    }

    pub fn initial_focus(mut self, node: NodeId) -> Self {
        self.initial_focus = Some(node);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn close_button(mut self, show: bool) -> Self {
        self.close_button = show;
        self
    }

    pub fn mount_point(mut self, node: NodeId) -> Self {
        self.mount_point = Some(node);
        self
    }

    /// Set the box size, clamped to the supported percentage range.
    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent.clamp(DIALOG_MIN_PERCENT, DIALOG_MAX_PERCENT);
        self.height_percent = height_percent.clamp(DIALOG_MIN_PERCENT, DIALOG_MAX_PERCENT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = DialogOptions::new()
            .title("Delete file")
            .description("This cannot be undone")
            .close_on_esc(false)
            .close_button(false);

        assert_eq!(options.title, "Delete file");
        assert_eq!(options.description.as_deref(), Some("This cannot be undone"));
        assert!(options.dismissal.closable);
        assert!(!options.dismissal.close_on_esc);
        assert!(options.dismissal.close_on_backdrop_click);
        assert!(!options.close_button);
        assert_eq!(options.mount_point, None);
    }

    #[test]
    fn size_is_clamped() {
        let options = DialogOptions::new().size(5, 140);
        assert_eq!(options.width_percent, DIALOG_MIN_PERCENT);
        assert_eq!(options.height_percent, DIALOG_MAX_PERCENT);
    }
}
