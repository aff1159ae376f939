//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::contract::SettingsEditorApi;
use axum::{
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, api: Arc<dyn SettingsEditorApi>) -> Router {
    router
        .route("/settings", get(list_settings_handler).put(submit_settings_handler))
        .route("/settings/reload", post(reload_settings_handler))
        .layer(Extension(api))
}

// ===== Handler wrappers that extract the client from Extension =====

async fn list_settings_handler(
    Extension(api): Extension<Arc<dyn SettingsEditorApi>>,
) -> Result<Json<SettingsListResponse>, Problem> {
    handlers::list_settings(api).await
}

async fn reload_settings_handler(
    Extension(api): Extension<Arc<dyn SettingsEditorApi>>,
) -> Result<Json<SettingsListResponse>, Problem> {
    handlers::reload_settings(api).await
}

async fn submit_settings_handler(
    Extension(api): Extension<Arc<dyn SettingsEditorApi>>,
    json: Json<SubmitRequest>,
) -> Result<Response, Problem> {
    handlers::submit_settings(api, json).await
}
