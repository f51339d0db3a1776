// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Authentication rate limit exceeded")]
    AuthRateLimited,

    #[error("{0}")]
    Forbidden(String),

    #[error("Capability not found")]
    CapabilityNotFound,

    #[error("User already exists")]
    UserExists,

    #[error("Consultant is already registered for this capability")]
    AlreadyRegistered,

    #[error("Consultant is not registered for this capability")]
    NotRegistered,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::CapabilityNotFound => StatusCode::NOT_FOUND,
            AppError::UserExists
            | AppError::AlreadyRegistered
            | AppError::NotRegistered
            | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::AuthRateLimited => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_001",
            AppError::Forbidden(_) => "AUTH_002",
            AppError::AuthRateLimited => "AUTH_003",
            AppError::CapabilityNotFound => "CAP_001",
            AppError::AlreadyRegistered => "CAP_002",
            AppError::NotRegistered => "CAP_003",
            AppError::UserExists => "USER_001",
            AppError::InvalidInput(_) => "VAL_001",
            AppError::Internal(_) => "INT_001",
            AppError::Io(_) => "IO_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Auth(_) => "Authentication failed".to_string(),
            AppError::AuthRateLimited => {
                "Too many authentication attempts, please try again later".to_string()
            },
            // Role diagnostics are deliberately kept in the 403 body
            AppError::Forbidden(msg) => msg.clone(),
            AppError::CapabilityNotFound => "Capability not found".to_string(),
            AppError::UserExists => "User already exists".to_string(),
            AppError::AlreadyRegistered => {
                "Consultant is already registered for this capability".to_string()
            },
            AppError::NotRegistered => {
                "Consultant is not registered for this capability".to_string()
            },
            AppError::InvalidInput(_) => "Invalid input provided".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            AppError::Io(_) => "Internal server error".to_string(),
            AppError::Json(_) => "Invalid request format".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        // Create a JSON response with error details
        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
