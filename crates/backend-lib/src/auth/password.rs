// ============================
// crates/backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use crate::error::AppError;
use scrypt::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Params, Scrypt,
};

/// Output length of the derived key in bytes
const HASH_OUTPUT_LEN: usize = 32;

/// Hash a password using scrypt with a random salt.
/// `log_n` is the log2 of the CPU/memory cost; the produced PHC string
/// records the parameters, so verification needs no extra configuration.
pub fn hash_password(plain: &str, log_n: u8) -> anyhow::Result<String> {
    let params = Params::new(log_n, 8, 1, HASH_OUTPUT_LEN)?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Scrypt
        .hash_password_customized(plain.as_bytes(), None, None, params, &salt)?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored hash.
///
/// A wrong password is `Ok(false)`. A hash string that cannot be parsed or
/// verified signals a corrupted credential store and is surfaced as an
/// internal error rather than a failed login.
pub fn verify_password(hash: &str, plain: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("malformed password hash: {e}")))?;

    match Scrypt.verify_password(plain.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(scrypt::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(format!(
            "password hash verification failed: {e}"
        ))),
    }
}
