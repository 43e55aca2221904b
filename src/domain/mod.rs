//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, validation errors, state machine trait)
//! - `location` - Location queries and resolved locations
//! - `prayer` - Canonical prayers and the daily schedule
//! - `conversation` - Session state, inbound events, replies, and templates

pub mod conversation;
pub mod foundation;
pub mod location;
pub mod prayer;
