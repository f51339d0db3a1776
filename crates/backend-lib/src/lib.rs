// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the capabilities management server.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod seed;
pub mod store;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AuthRateLimiter, TokenService};
use crate::config::Settings;
use crate::error::AppError;
use crate::seed::SeedData;
use crate::store::{CapabilityRegistry, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<UserStore>,
    /// Capability registry
    pub capabilities: Arc<CapabilityRegistry>,
    /// Token issuance and validation
    pub tokens: Arc<TokenService>,
    /// Failed-login lockout tracking
    pub limiter: Arc<AuthRateLimiter>,
    /// Settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state from configuration and seed data.
    ///
    /// Seed user passwords are hashed here; hashing cost follows the
    /// configured scrypt work factor.
    pub fn new(settings: Settings, seed: SeedData) -> Result<Self, AppError> {
        let tokens = TokenService::new(
            &settings.auth.token_secret,
            chrono::Duration::seconds(settings.auth.token_ttl_secs),
        );

        let users = UserStore::new(settings.auth.scrypt_log_n);
        users.seed(&seed.users)?;

        let capabilities = CapabilityRegistry::from_records(seed.capabilities);

        let limiter = AuthRateLimiter::new(
            settings.rate_limit.max_attempts,
            Duration::from_secs(settings.rate_limit.lockout_secs),
        );

        Ok(Self {
            users: Arc::new(users),
            capabilities: Arc::new(capabilities),
            tokens: Arc::new(tokens),
            limiter: Arc::new(limiter),
            settings: Arc::new(settings),
        })
    }
}
