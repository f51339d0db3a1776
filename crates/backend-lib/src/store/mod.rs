// crates/backend-lib/src/store/mod.rs

//! In-memory stores for users and capabilities.
//!
//! State lives only for the process lifetime; the stores are injected into
//! `AppState` so tests can build isolated instances.

pub mod capabilities;
pub mod users;

pub use capabilities::CapabilityRegistry;
pub use users::{UserRecord, UserStore};
