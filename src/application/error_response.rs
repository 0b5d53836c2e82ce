//! Unified error response handling for the calculator API
//!
//! Every handler failure is rendered through `ErrorResponse` so calculator
//! screens can rely on one error shape.

use crate::domain::validation::ValidationError;
use crate::infrastructure::log_messages::api;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Every rejected field, so a form can highlight them all at once
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Attach the individual field violations
    pub fn with_violations(mut self, violations: Vec<serde_json::Value>) -> Self {
        self.violations = violations;
        self
    }

    /// Convert to HTTP response with the given status
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for ValidationError {
    fn to_error_response(&self) -> ErrorResponse {
        let violations = self
            .violations()
            .iter()
            .map(|violation| {
                serde_json::json!({
                    "field": violation.field,
                    "reason": violation.reason,
                    "message": violation.to_string(),
                })
            })
            .collect();
        ErrorResponse::new("validation_failed", self.to_string()).with_violations(violations)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

impl ErrorResponseExt for JsonRejection {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new("invalid_json", self.body_text())
    }

    fn status_code(&self) -> StatusCode {
        self.status()
    }
}

/// Handler error wrapper rendering through `ErrorResponse`
#[derive(Debug)]
pub enum ApiError {
    /// Body parsed but the scenario failed validation
    Validation(ValidationError),
    /// Body missing, not JSON, or not shaped like a scenario
    InvalidBody(JsonRejection),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(error) => {
                info!(fields = ?error.fields(), "{}", api::SCENARIO_REJECTED);
                error
                    .to_error_response()
                    .into_response_with_status(error.status_code())
            }
            Self::InvalidBody(rejection) => {
                info!(reason = %rejection.body_text(), "{}", api::BODY_REJECTED);
                rejection
                    .to_error_response()
                    .into_response_with_status(rejection.status_code())
            }
        }
    }
}

/// `Json` extractor whose rejections render as `ErrorResponse`
#[derive(Debug, Clone)]
pub struct ScenarioJson<T>(pub T);

impl<S, T> FromRequest<S> for ScenarioJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
