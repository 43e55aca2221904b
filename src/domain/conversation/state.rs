//! Per-user session state machine.
//!
//! A session has one transient entry state and one persistent state. The
//! persistent state loops back onto itself after every round, so there is no
//! terminal state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a user's conversation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Entry state, only seen while `/start` is being handled.
    #[default]
    Start,

    /// Waiting for a city name or a shared location.
    AwaitingLocation,
}

impl SessionState {
    /// Returns true if location input is processed in this state.
    pub fn accepts_location(&self) -> bool {
        matches!(self, Self::AwaitingLocation)
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        matches!(
            (self, target),
            (Start, AwaitingLocation) | (AwaitingLocation, AwaitingLocation)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Start => vec![AwaitingLocation],
            AwaitingLocation => vec![AwaitingLocation],
        }
    }
}
