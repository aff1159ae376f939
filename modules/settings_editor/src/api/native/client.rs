//! Native client implementation - wraps the session controller for in-process calls

use crate::contract::{CandidateSetting, SettingsEditorApi, SettingsError, SubmitOutcome, WorkingSet};
use crate::domain::SessionController;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one editing session
pub type SharedController = Arc<Mutex<SessionController>>;

/// Native client implementation that directly drives the session controller
///
/// Calls are serialized through the controller lock, so a submission and a load
/// never run at the same time.
#[derive(Clone)]
pub struct NativeClient {
    controller: SharedController,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(controller: SharedController) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl SettingsEditorApi for NativeClient {
    async fn load(&self) -> Result<WorkingSet, SettingsError> {
        let mut controller = self.controller.lock().await;
        let baseline = controller.load().await?;
        Ok(baseline.rows().to_vec())
    }

    async fn baseline(&self) -> Result<WorkingSet, SettingsError> {
        let mut controller = self.controller.lock().await;
        if let Some(baseline) = controller.baseline() {
            return Ok(baseline.rows().to_vec());
        }
        let baseline = controller.load().await?;
        Ok(baseline.rows().to_vec())
    }

    async fn submit(
        &self,
        candidate: Vec<CandidateSetting>,
    ) -> Result<SubmitOutcome, SettingsError> {
        self.controller.lock().await.submit(candidate).await
    }
}
