use serde::{Deserialize, Serialize};

/// Which dismissal affordances a dialog offers to the end user.
///
/// `closable = false` turns off every user-facing affordance; the other two
/// flags are only consulted when the dialog is closable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissalConfig {
    pub closable: bool,
    pub close_on_esc: bool,
    pub close_on_backdrop_click: bool,
}

impl Default for DismissalConfig {
    fn default() -> Self {
        Self {
            closable: true,
            close_on_esc: true,
            close_on_backdrop_click: true,
        }
    }
}

/// Action asking for the dialog to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalTrigger {
    /// Escape pressed while the dialog is open.
    Escape,
    /// A pointer press/release pair where at least one end touched the backdrop.
    BackdropClick {
        pressed_on_backdrop: bool,
        released_on_backdrop: bool,
    },
    /// Activation of an element marked as a close affordance.
    CloseAffordance,
    /// `close()` called by the owning application.
    Programmatic,
}

/// Decides whether a dismissal trigger may close the dialog.
pub struct DismissalPolicy;

impl DismissalPolicy {
    /// Pure decision: no side effects, no logging.
    pub fn permits(trigger: DismissalTrigger, config: &DismissalConfig) -> bool {
        match trigger {
            DismissalTrigger::Escape => config.closable && config.close_on_esc,
            DismissalTrigger::BackdropClick {
                pressed_on_backdrop,
                released_on_backdrop,
            } => config.closable && config.close_on_backdrop_click && pressed_on_backdrop && released_on_backdrop,
            DismissalTrigger::CloseAffordance => config.closable,
            DismissalTrigger::Programmatic => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CLICK: DismissalTrigger = DismissalTrigger::BackdropClick {
        pressed_on_backdrop: true,
        released_on_backdrop: true,
    };

    fn config(closable: bool, close_on_esc: bool, close_on_backdrop_click: bool) -> DismissalConfig {
        DismissalConfig {
            closable,
            close_on_esc,
            close_on_backdrop_click,
        }
    }

    #[test]
    fn defaults_allow_everything() {
        let cfg = DismissalConfig::default();
        assert!(DismissalPolicy::permits(DismissalTrigger::Escape, &cfg));
        assert!(DismissalPolicy::permits(FULL_CLICK, &cfg));
        assert!(DismissalPolicy::permits(DismissalTrigger::CloseAffordance, &cfg));
    }

    #[test]
    fn not_closable_blocks_user_triggers_only() {
        let cfg = config(false, true, true);
        assert!(!DismissalPolicy::permits(DismissalTrigger::Escape, &cfg));
        assert!(!DismissalPolicy::permits(FULL_CLICK, &cfg));
        assert!(!DismissalPolicy::permits(DismissalTrigger::CloseAffordance, &cfg));
        assert!(DismissalPolicy::permits(DismissalTrigger::Programmatic, &cfg));
    }

    #[test]
    fn escape_flag_is_independent_of_backdrop_flag() {
        let cfg = config(true, false, true);
        assert!(!DismissalPolicy::permits(DismissalTrigger::Escape, &cfg));
        assert!(DismissalPolicy::permits(FULL_CLICK, &cfg));

        let cfg = config(true, true, false);
        assert!(DismissalPolicy::permits(DismissalTrigger::Escape, &cfg));
        assert!(!DismissalPolicy::permits(FULL_CLICK, &cfg));
    }

    #[test]
    fn backdrop_click_needs_both_ends_on_backdrop() {
        let cfg = DismissalConfig::default();
        for (pressed, released) in [(true, false), (false, true), (false, false)] {
            let trigger = DismissalTrigger::BackdropClick {
                pressed_on_backdrop: pressed,
                released_on_backdrop: released,
            };
            assert!(!DismissalPolicy::permits(trigger, &cfg), "{pressed}/{released}");
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: DismissalConfig = toml::from_str("close_on_esc = false").unwrap();
        assert_eq!(cfg, config(true, false, true));
    }
}
