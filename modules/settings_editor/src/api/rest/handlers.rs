//! HTTP request handlers - thin layer that delegates to the editing session

use super::{
    dto::*,
    error::{map_domain_error, persistence_failed, structural_mismatch, validation_rejected, Problem},
    mapper::list_response,
};
use crate::contract::{CandidateSetting, SettingsEditorApi, SubmitOutcome};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Current baseline, loading on first use
pub async fn list_settings(
    api: Arc<dyn SettingsEditorApi>,
) -> Result<Json<SettingsListResponse>, Problem> {
    let rows = api.baseline().await.map_err(map_domain_error)?;
    Ok(Json(list_response(rows)))
}

/// Discard local state and reload from the store
pub async fn reload_settings(
    api: Arc<dyn SettingsEditorApi>,
) -> Result<Json<SettingsListResponse>, Problem> {
    let rows = api.load().await.map_err(map_domain_error)?;
    Ok(Json(list_response(rows)))
}

/// Submit an edited set
pub async fn submit_settings(
    api: Arc<dyn SettingsEditorApi>,
    Json(req): Json<SubmitRequest>,
) -> Result<Response, Problem> {
    let candidate: Vec<CandidateSetting> = req.items.into_iter().map(Into::into).collect();
    let outcome = api.submit(candidate).await.map_err(map_domain_error)?;

    let response = match outcome {
        SubmitOutcome::Accepted(rows) => (StatusCode::OK, Json(list_response(rows))).into_response(),
        SubmitOutcome::RenameRejected(rows) => {
            let items = rows.into_iter().map(CandidateDto::from).collect();
            (StatusCode::CONFLICT, Json(RenameRejectedResponse { items })).into_response()
        }
        SubmitOutcome::ValidationRejected { key, reason } => {
            validation_rejected(key, reason).into_response()
        }
        SubmitOutcome::StructuralMismatch { expected, actual } => {
            structural_mismatch(expected, actual).into_response()
        }
        SubmitOutcome::PersistenceFailed(failure) => persistence_failed(failure).into_response(),
    };
    Ok(response)
}
