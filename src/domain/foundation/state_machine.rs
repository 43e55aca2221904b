//! State machine trait for status enums.
//!
//! Gives every lifecycle enum the same validated transition API, so handlers
//! never assign a state directly.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their valid transitions; validated transitions and the
/// terminal check come for free. Self-transitions are ordinary transitions and
/// must be listed explicitly when allowed.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SessionState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Start, AwaitingLocation) | (AwaitingLocation, AwaitingLocation)
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         vec![AwaitingLocation]
///     }
/// }
///
/// let next = SessionState::Start.transition_to(SessionState::AwaitingLocation)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
