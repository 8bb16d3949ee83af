//! Bridge readiness state machine.

/// Per-peer readiness. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BridgeState {
    #[default]
    Uninitialized,
    /// The inbound-message handler is attached.
    Listening,
    /// The editor exists and the mounted signal has been posted (inner)
    /// or observed (outer).
    Ready,
}

impl BridgeState {
    pub fn on_listener_attached(&mut self) {
        if *self < BridgeState::Listening {
            *self = BridgeState::Listening;
        }
    }

    pub fn on_mounted(&mut self) {
        *self = BridgeState::Ready;
    }

    pub fn is_ready(self) -> bool {
        self == BridgeState::Ready
    }
}
