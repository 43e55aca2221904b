//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait, and the validation
//! error type that the rest of the domain builds on.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{ChatId, UserId};
pub use state_machine::StateMachine;
