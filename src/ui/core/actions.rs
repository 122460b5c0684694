use crate::dialog::DismissalTrigger;
use crate::dom::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Dialog requests
    OpenDialog,
    CloseDialog,
    ShowLogs,

    // Dialog lifecycle notifications
    Opened,
    Closed,
    Dismissed(DismissalTrigger),
    DismissDenied(DismissalTrigger),

    // Focus and activation
    FocusMoved(NodeId),
    Activate(NodeId),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
