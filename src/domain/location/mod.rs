//! Location domain module.
//!
//! Value objects for what the user asked for (`LocationQuery`) and what the
//! resolver produced (`ResolvedLocation`).

mod coordinates;
mod query;
mod resolved;

pub use coordinates::Coordinates;
pub use query::LocationQuery;
pub use resolved::{ResolvedLocation, UNKNOWN_CITY};
