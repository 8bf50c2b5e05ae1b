//! Unified error handling for Teamgate Core

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// A storage lookup that found nothing.
///
/// `origin` names the store operation that failed (for example
/// `team_store.get_by_invite_id`) so operators can tell infrastructure
/// misses apart from business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{origin}: {message}")]
pub struct LookupError {
    pub origin: &'static str,
    pub message: String,
}

impl LookupError {
    pub fn not_found(origin: &'static str, message: impl Into<String>) -> Self {
        Self {
            origin,
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("The signup link does not appear to be valid")]
    SignupLinkInvalid,

    #[error("The signup link has expired")]
    SignupLinkExpired,

    #[error("Email must be from a specific domain: {0}")]
    AcceptedDomain(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable identifier of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotImplemented(_) => "not_implemented",
            AppError::SignupLinkInvalid => "signup_link_invalid",
            AppError::SignupLinkExpired => "signup_link_expired",
            AppError::AcceptedDomain(_) => "accepted_domain",
            AppError::Lookup(_) => "not_found",
            AppError::Forbidden(_) => "forbidden",
            AppError::Validation(_) => "validation",
            AppError::Internal(_) => "internal_error",
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut origin = None;
        let (status, message) = match &self {
            AppError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, self.to_string()),
            AppError::SignupLinkInvalid
            | AppError::SignupLinkExpired
            | AppError::AcceptedDomain(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Lookup(e) => {
                origin = Some(e.origin.to_string());
                (StatusCode::NOT_FOUND, e.message.clone())
            }
            AppError::Forbidden(msg) => {
                tracing::debug!("Forbidden: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have the appropriate permissions".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
            origin,
        });

        (status, body).into_response()
    }
}

// Conversion from validation errors
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
