//! Session storage adapters.
//!
//! - `InMemorySessionStore` - Process-local map, the only backend

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
