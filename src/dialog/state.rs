//! Dialog open/close lifecycle.
//!
//! The machine only decides *what* has to happen; each transition hands back
//! the ordered side effects and the overlay host carries them out against the
//! document. Every event is accepted in every state: events that make no
//! sense in the current state are no-ops returning no effects.
//!
//! | From    | Event            | To      | Effects                                              |
//! |---------|------------------|---------|------------------------------------------------------|
//! | Closed  | open             | Opening | Mount                                                |
//! | Opening | mount complete   | Open    | CaptureFocus, ActivateTrap, SetAriaModal, LockScroll |
//! | Open    | close            | Closing | DeactivateTrap, ClearAriaModal, UnlockScroll         |
//! | Closing | unmount complete | Closed  | RestoreFocus, Unmount                                |
//! | Closing | open             | Opening | (pending restore is dropped, overlay stays mounted)  |
//! | Opening | close            | Closing | (trap never activated)                               |

/// Lifecycle state of a single dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DialogState {
    /// Whether the backdrop and content are in the document.
    pub fn is_rendered(self) -> bool {
        !matches!(self, DialogState::Closed)
    }
}

/// Side effect requested by a transition, run in slice order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEffect {
    /// Attach and render backdrop and content.
    Mount,
    CaptureFocus,
    ActivateTrap,
    SetAriaModal,
    LockScroll,
    DeactivateTrap,
    ClearAriaModal,
    UnlockScroll,
    RestoreFocus,
    /// Detach backdrop and content.
    Unmount,
}

/// Deferred completion the host owes the machine on its next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTick {
    Mount,
    Unmount,
}

const OPEN_FROM_CLOSED: &[LifecycleEffect] = &[LifecycleEffect::Mount];
const MOUNT_COMPLETE: &[LifecycleEffect] = &[
    LifecycleEffect::CaptureFocus,
    LifecycleEffect::ActivateTrap,
    LifecycleEffect::SetAriaModal,
    LifecycleEffect::LockScroll,
];
const CLOSE_FROM_OPEN: &[LifecycleEffect] = &[
    LifecycleEffect::DeactivateTrap,
    LifecycleEffect::ClearAriaModal,
    LifecycleEffect::UnlockScroll,
];
const UNMOUNT_COMPLETE: &[LifecycleEffect] = &[LifecycleEffect::RestoreFocus, LifecycleEffect::Unmount];

#[derive(Debug, Default)]
pub struct DialogLifecycle {
    state: DialogState,
}

impl DialogLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn pending(&self) -> Option<PendingTick> {
        match self.state {
            DialogState::Opening => Some(PendingTick::Mount),
            DialogState::Closing => Some(PendingTick::Unmount),
            DialogState::Closed | DialogState::Open => None,
        }
    }

    pub fn open(&mut self) -> &'static [LifecycleEffect] {
        match self.state {
            DialogState::Closed => self.transition(DialogState::Opening, OPEN_FROM_CLOSED),
            DialogState::Closing => self.transition(DialogState::Opening, &[]),
            DialogState::Opening | DialogState::Open => &[],
        }
    }

    pub fn close(&mut self) -> &'static [LifecycleEffect] {
        match self.state {
            DialogState::Open => self.transition(DialogState::Closing, CLOSE_FROM_OPEN),
            DialogState::Opening => self.transition(DialogState::Closing, &[]),
            DialogState::Closing | DialogState::Closed => &[],
        }
    }

    pub fn mount_complete(&mut self) -> &'static [LifecycleEffect] {
        match self.state {
            DialogState::Opening => self.transition(DialogState::Open, MOUNT_COMPLETE),
            _ => &[],
        }
    }

    pub fn unmount_complete(&mut self) -> &'static [LifecycleEffect] {
        match self.state {
            DialogState::Closing => self.transition(DialogState::Closed, UNMOUNT_COMPLETE),
            _ => &[],
        }
    }

    fn transition(&mut self, to: DialogState, effects: &'static [LifecycleEffect]) -> &'static [LifecycleEffect] {
        log::debug!("Dialog {:?} -> {:?} {:?}", self.state, to, effects);
        self.state = to;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LifecycleEffect::*;

    #[test]
    fn full_cycle_emits_effects_in_order() {
        let mut lifecycle = DialogLifecycle::new();
        assert_eq!(lifecycle.state(), DialogState::Closed);

        assert_eq!(lifecycle.open(), &[Mount]);
        assert_eq!(lifecycle.state(), DialogState::Opening);
        assert_eq!(lifecycle.pending(), Some(PendingTick::Mount));

        assert_eq!(lifecycle.mount_complete(), &[CaptureFocus, ActivateTrap, SetAriaModal, LockScroll]);
        assert_eq!(lifecycle.state(), DialogState::Open);
        assert_eq!(lifecycle.pending(), None);

        assert_eq!(lifecycle.close(), &[DeactivateTrap, ClearAriaModal, UnlockScroll]);
        assert_eq!(lifecycle.state(), DialogState::Closing);
        assert_eq!(lifecycle.pending(), Some(PendingTick::Unmount));

        assert_eq!(lifecycle.unmount_complete(), &[RestoreFocus, Unmount]);
        assert_eq!(lifecycle.state(), DialogState::Closed);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut lifecycle = DialogLifecycle::new();
        lifecycle.open();
        assert!(lifecycle.open().is_empty());
        lifecycle.mount_complete();
        assert!(lifecycle.open().is_empty());
        assert_eq!(lifecycle.state(), DialogState::Open);

        lifecycle.close();
        assert!(lifecycle.close().is_empty());
        lifecycle.unmount_complete();
        assert!(lifecycle.close().is_empty());
        assert_eq!(lifecycle.state(), DialogState::Closed);
    }

    #[test]
    fn reopen_during_closing_skips_restore() {
        let mut lifecycle = DialogLifecycle::new();
        lifecycle.open();
        lifecycle.mount_complete();
        lifecycle.close();

        assert!(lifecycle.open().is_empty());
        assert_eq!(lifecycle.state(), DialogState::Opening);
        // the unmount tick that was pending no longer applies
        assert!(lifecycle.unmount_complete().is_empty());
        assert_eq!(lifecycle.mount_complete(), MOUNT_COMPLETE);
    }

    #[test]
    fn close_during_opening_never_activates_trap() {
        let mut lifecycle = DialogLifecycle::new();
        lifecycle.open();

        assert!(lifecycle.close().is_empty());
        assert_eq!(lifecycle.state(), DialogState::Closing);
        assert!(lifecycle.mount_complete().is_empty());
        assert_eq!(lifecycle.unmount_complete(), UNMOUNT_COMPLETE);
    }

    #[test]
    fn completion_ticks_are_noops_outside_their_state() {
        let mut lifecycle = DialogLifecycle::new();
        assert!(lifecycle.mount_complete().is_empty());
        assert!(lifecycle.unmount_complete().is_empty());
        assert_eq!(lifecycle.state(), DialogState::Closed);
    }

    #[test]
    fn rendered_states() {
        assert!(!DialogState::Closed.is_rendered());
        assert!(DialogState::Opening.is_rendered());
        assert!(DialogState::Open.is_rendered());
        assert!(DialogState::Closing.is_rendered());
    }
}
