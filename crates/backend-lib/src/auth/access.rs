// ============================
// crates/backend-lib/src/auth/access.rs
// ============================
//! Role-based access control at the request boundary.
use crate::error::AppError;
use crate::store::users::UserRecord;
use crate::AppState;
use axum::http::{header, HeaderMap};
use capabilities_common::Role;

/// Pull the bearer token out of the `Authorization` header
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let header = header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Auth("Invalid authorization header".to_string()));
    }

    Ok(token)
}

/// Authorize the caller behind `headers`.
///
/// Validates the bearer token, resolves its subject against the credential
/// store, and checks the resolved role against `allowed`. An empty `allowed`
/// slice means any authenticated user. A token whose subject no longer
/// resolves to a user is treated as invalid even if the signature checks out.
pub fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    allowed: &[Role],
) -> Result<UserRecord, AppError> {
    let token = extract_bearer(headers)?;
    let claims = state.tokens.validate(token)?;

    let user = state
        .users
        .find(&claims.sub)
        .ok_or_else(|| AppError::Auth("User not found".to_string()))?;

    if !allowed.is_empty() && !allowed.contains(&user.role) {
        let required = allowed
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::Forbidden(format!(
            "Access denied. Required role: {required}"
        )));
    }

    Ok(user)
}
