//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::{PersistFailure, SettingsError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Setting key the problem refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            key: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the offending setting key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SettingsError) -> Problem {
    match error {
        SettingsError::Connectivity { reason } => {
            Problem::new(StatusCode::SERVICE_UNAVAILABLE, "Store Unavailable").with_detail(reason)
        }

        SettingsError::StructuralMismatch { expected, actual } => structural_mismatch(expected, actual),

        SettingsError::InvalidKey { key, reason } => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Invalid Stored Key",
        )
        .with_detail(reason)
        .with_key(key),

        SettingsError::InvalidState { state, operation } => Problem::new(
            StatusCode::CONFLICT,
            "Invalid Session State",
        )
        .with_detail(format!("cannot {} while session is {}", operation, state)),

        SettingsError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred"),
    }
}

pub fn validation_rejected(key: String, reason: String) -> Problem {
    Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error")
        .with_detail(reason)
        .with_key(key)
}

pub fn structural_mismatch(expected: usize, actual: usize) -> Problem {
    Problem::new(StatusCode::CONFLICT, "Structural Mismatch").with_detail(format!(
        "expected {} rows but received {}; settings were reloaded",
        expected, actual
    ))
}

pub fn persistence_failed(failure: PersistFailure) -> Problem {
    tracing::error!(key = ?failure.key, reason = %failure.reason, "persist failed");
    let problem = Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Persistence Failed")
        .with_detail(failure.reason);
    match failure.key {
        Some(key) => problem.with_key(key),
        None => problem,
    }
}
