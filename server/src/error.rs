//! HTTP-facing error type.
//!
//! # Design
//! Core lookups return `Option`; handlers turn `None` into `NotFound` here.
//! Validation failures carry every message so the client can show them all
//! at once. Integrity failures mean the stored session could not be
//! rehydrated and surface as a 500 without leaking details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::TodoError;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found.")]
    NotFound,

    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("session integrity error: {0}")]
    Integrity(#[source] TodoError),
}

impl From<TodoError> for AppError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::InvalidTitle { .. } => AppError::Validation(vec![e.to_string()]),
            TodoError::IndexOutOfRange { .. } => AppError::NotFound,
            TodoError::Integrity(_) => AppError::Integrity(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                warn!("not found");
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found." }))).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::Integrity(e) => {
                error!(error = %e, "failed to load session");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}
