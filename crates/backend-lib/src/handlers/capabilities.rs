// ============================
// crates/backend-lib/src/handlers/capabilities.rs
// ============================
//! Capability listing and roster mutation handlers.
use crate::error::AppError;
use crate::metrics as metric_keys;
use crate::{auth, AppState};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use capabilities_common::{CapabilityRecord, MessageResponse, Role};
use metrics::counter;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Query string carrying the consultant email to act on
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// Full registry snapshot; public, no auth required
pub async fn list(State(state): State<Arc<AppState>>) -> Json<BTreeMap<String, CapabilityRecord>> {
    Json(state.capabilities.snapshot())
}

/// Register a consultant for a capability (any authenticated user; consultants
/// may only register themselves)
pub async fn register_consultant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    let requester = auth::authorize(&state, &headers, &[])?;

    state.capabilities.register(&name, &params.email, &requester)?;

    counter!(metric_keys::CONSULTANT_REGISTERED).increment(1);
    tracing::debug!(capability = %name, email = %params.email, "consultant registered");

    Ok(Json(MessageResponse {
        message: format!("Registered {} for {}", params.email, name),
    }))
}

/// Remove a consultant from a capability (Admin and Approver only)
pub async fn unregister_consultant(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    auth::authorize(&state, &headers, &[Role::Admin, Role::Approver])?;

    state.capabilities.unregister(&name, &params.email)?;

    counter!(metric_keys::CONSULTANT_UNREGISTERED).increment(1);
    tracing::debug!(capability = %name, email = %params.email, "consultant unregistered");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, name),
    }))
}
