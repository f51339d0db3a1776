// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router wiring.
use crate::handlers::{auth, capabilities};
use crate::AppState;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register_user))
        .route("/auth/me", get(auth::me))
        .route("/capabilities", get(capabilities::list))
        .route(
            "/capabilities/{name}/register",
            post(capabilities::register_consultant),
        )
        .route(
            "/capabilities/{name}/unregister",
            delete(capabilities::unregister_consultant),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
