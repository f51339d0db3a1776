// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::{bail, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Server bind settings
    pub server: ServerSettings,
    /// Authentication settings
    pub auth: AuthSettings,
    /// Failed-login rate limiting
    pub rate_limit: RateLimitSettings,
    /// Seed data location
    pub seed: SeedSettings,
}

/// Server bind settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Authentication settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Shared secret used to sign session tokens.
    /// Must be provided by deployment configuration; there is no default.
    pub token_secret: String,
    /// Token time-to-live in seconds
    pub token_ttl_secs: i64,
    /// scrypt work factor (log2 of the CPU/memory cost)
    pub scrypt_log_n: u8,
}

/// Failed-login rate limiting
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Failed attempts before an IP is locked out
    pub max_attempts: u32,
    /// Lockout duration in seconds
    pub lockout_secs: u64,
}

/// Seed data location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    /// Path to the JSON seed file loaded at startup
    pub path: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_secs: 60 * 60 * 8, // 8 hours
            scrypt_log_n: 15,
        }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_secs: 5 * 60,
        }
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/seed.json"),
        }
    }
}

impl Settings {
    /// Load settings from the default config file location
    pub fn load() -> Result<Self> {
        Self::load_from("config/default.toml")
    }

    /// Load settings from a config file, with `CAPSRV_`-prefixed environment
    /// variables taking precedence (e.g. `CAPSRV_AUTH__TOKEN_SECRET`).
    pub fn load_from(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CAPSRV").separator("__"))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;

        if settings.auth.token_secret.is_empty() {
            bail!("auth.token_secret must be configured (it is never embedded in source)");
        }

        Ok(settings)
    }
}
