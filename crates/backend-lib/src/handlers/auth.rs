// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Login, user registration, and identity handlers.
use crate::error::AppError;
use crate::metrics as metric_keys;
use crate::{auth, validation, AppState};
use axum::{extract::State, http::HeaderMap, Json};
use capabilities_common::{
    LoginRequest, MessageResponse, RegisterUserRequest, Role, TokenResponse, UserInfo,
};
use metrics::counter;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use zeroize::Zeroize;

/// Best-effort client address for lockout tracking.
/// Deployments are expected to sit behind a proxy that sets `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> IpAddr {
    headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Authenticate a user and return a signed bearer token
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(mut req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let ip = client_ip(&headers);

    if state.limiter.is_locked(ip) {
        counter!(metric_keys::LOGIN_LOCKOUT).increment(1);
        return Err(AppError::AuthRateLimited);
    }

    let found = state.users.find(&req.email);
    let verify_result = match &found {
        Some(user) => auth::verify_password(&user.password_hash, &req.password),
        None => Ok(false),
    };
    req.password.zeroize();

    match (found, verify_result?) {
        (Some(user), true) => {
            state.limiter.record_success(ip);
            counter!(metric_keys::LOGIN_SUCCESS).increment(1);

            let access_token = state.tokens.issue(&user.email, user.role)?;
            Ok(Json(TokenResponse {
                access_token,
                token_type: "bearer".to_string(),
                role: user.role,
                email: user.email,
            }))
        },
        // Uniform failure for unknown email and wrong password
        _ => {
            state.limiter.record_failure(ip);
            counter!(metric_keys::LOGIN_FAILURE).increment(1);
            Err(AppError::Auth("Incorrect email or password".to_string()))
        },
    }
}

/// Register a new user (Admin only)
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(mut req): Json<RegisterUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    auth::authorize(&state, &headers, &[Role::Admin])?;

    validation::validate_email(&req.email)?;
    validation::validate_password(&req.password)?;

    let created = state.users.create(&req.email, &req.password, req.role);
    req.password.zeroize();
    created?;

    counter!(metric_keys::USER_REGISTERED).increment(1);
    tracing::info!(email = %req.email, role = %req.role, "user registered");

    Ok(Json(MessageResponse {
        message: format!("User {} registered successfully", req.email),
    }))
}

/// Return the authenticated caller's identity
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserInfo>, AppError> {
    let user = auth::authorize(&state, &headers, &[])?;

    Ok(Json(UserInfo {
        email: user.email,
        role: user.role,
    }))
}
