// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the capabilities server and its clients.
//! This module defines the HTTP request/response payloads and supporting types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Staff role, governing which operations a user may perform
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full control, including user registration
    Admin,
    /// May register and unregister any consultant
    Approver,
    /// May only register themselves
    Consultant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Approver => "Approver",
            Role::Consultant => "Consultant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login request body
/// # Fields
/// * `email` - Staff email address
/// * `password` - Account password (verified against the stored hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the bearer token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed session token to present on subsequent requests
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
    /// Role embedded in the token
    pub role: Role,
    /// Email the token was issued for
    pub email: String,
}

/// Request body for registering a new user (Admin only)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Identity of the authenticated caller, as returned by `/auth/me`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserInfo {
    pub email: String,
    pub role: Role,
}

/// Generic acknowledgment payload for mutations
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

/// A consulting capability and its practitioner roster
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CapabilityRecord {
    /// Human-readable summary of the capability
    pub description: String,
    /// Practice area the capability belongs to (e.g. "Technology")
    pub practice_area: String,
    /// Ordered progression of skill levels
    pub skill_levels: Vec<String>,
    /// Relevant certifications
    pub certifications: BTreeSet<String>,
    /// Industry verticals the capability serves
    pub industry_verticals: BTreeSet<String>,
    /// Hours per week available across the team
    pub capacity: u32,
    /// Emails of registered practitioners; membership, not ordering, matters
    pub consultants: BTreeSet<String>,
}
