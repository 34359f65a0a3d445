use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("missing field {0}")] MissingField(String),
    #[error("invalid field {field}: {message}")] Validation { field: String, message: String },
    #[error("invalid field {field}: value must not be zero")] DivisionByZero { field: String },
    #[error("invalid field {field}: calculation is not a finite number")] NonFinite { field: String },
}

impl PlanError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation { field: field.to_string(), message: message.into() }
    }

    pub fn non_finite(field: &str) -> Self {
        Self::NonFinite { field: field.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PlanError::MissingField(_) => StatusCode::BAD_REQUEST,
            PlanError::Validation { .. }
            | PlanError::DivisionByZero { .. }
            | PlanError::NonFinite { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
