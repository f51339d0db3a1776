// ============================
// crates/backend-lib/src/store/users.rs
// ============================
//! Credential store.
use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::seed::SeedUser;
use capabilities_common::Role;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A stored user account.
///
/// `password_hash` is the scrypt PHC string produced at creation time;
/// plaintext passwords are never stored.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// In-memory credential store keyed by email.
///
/// The store performs no authorization of its own; `create` is Admin-gated at
/// the request boundary. It only enforces email uniqueness.
pub struct UserStore {
    users: DashMap<String, UserRecord>,
    scrypt_log_n: u8,
}

impl UserStore {
    pub fn new(scrypt_log_n: u8) -> Self {
        Self {
            users: DashMap::new(),
            scrypt_log_n,
        }
    }

    /// Look up a user by email
    pub fn find(&self, email: &str) -> Option<UserRecord> {
        self.users.get(email).map(|u| u.value().clone())
    }

    /// Create a new user, hashing the password before storing it.
    ///
    /// Hashing is CPU-expensive and happens before the map entry is touched,
    /// so no shard lock is held during it. The final insert re-checks
    /// uniqueness atomically under the entry lock.
    pub fn create(&self, email: &str, password: &str, role: Role) -> Result<UserRecord, AppError> {
        if self.users.contains_key(email) {
            return Err(AppError::UserExists);
        }

        let password_hash = hash_password(password, self.scrypt_log_n)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let record = UserRecord {
            email: email.to_string(),
            password_hash,
            role,
        };

        match self.users.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AppError::UserExists),
            Entry::Vacant(vacant) => {
                vacant.insert(record.clone());
                Ok(record)
            },
        }
    }

    /// Seed the store from startup data. Fails on duplicate seed emails.
    pub fn seed(&self, users: &[SeedUser]) -> Result<(), AppError> {
        for user in users {
            self.create(&user.email, &user.password, user.role)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
