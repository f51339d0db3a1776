// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Stateless signed session tokens.
//!
//! Tokens are HS256-signed envelopes carrying the subject email, role, and an
//! absolute expiry. Nothing is stored server-side; expiry is the only
//! invalidation mechanism.
use crate::error::AppError;
use capabilities_common::Role;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject email
    pub sub: String,
    /// Role at issuance time
    pub role: Role,
    /// Absolute expiry as a unix timestamp
    pub exp: i64,
}

/// Issues and validates signed session tokens
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the shared signing secret and token TTL
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; the jsonwebtoken default allows 60s of leeway
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            validation,
        }
    }

    /// Issue a signed token for `subject` with an expiry of now + TTL
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject.to_string(),
            role,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
    }

    /// Validate a token's signature and expiry, returning its claims.
    ///
    /// Signature mismatch, malformed structure, and passed expiry all fail
    /// the same way; callers cannot distinguish the subtypes.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Auth("Could not validate credentials".to_string()))
    }
}
