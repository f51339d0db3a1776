// ============================
// crates/backend-lib/src/seed.rs
// ============================
//! Startup seed data.
//!
//! Users and capabilities are seeded from a JSON file named in configuration,
//! never from source. Seed passwords are hashed on load by the user store.
use crate::error::AppError;
use capabilities_common::{CapabilityRecord, Role};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A user account to create at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub email: String,
    /// Plaintext only inside the seed file; hashed before it reaches the store
    pub password: String,
    pub role: Role,
}

/// Full startup dataset
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub capabilities: BTreeMap<String, CapabilityRecord>,
}

/// Load seed data from a JSON file
pub fn load_seed(path: &Path) -> Result<SeedData, AppError> {
    let content = fs::read_to_string(path)?;
    let seed: SeedData = serde_json::from_str(&content)?;
    Ok(seed)
}
