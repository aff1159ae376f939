//! Native client trait for in-process callers
//!
//! This trait defines the API that presentation layers use to drive an editing session.
//! NO HTTP - direct function calls.

use super::{
    error::SettingsError,
    model::{CandidateSetting, SubmitOutcome, WorkingSet},
};
use async_trait::async_trait;

/// Settings editor API for in-process communication
#[async_trait]
pub trait SettingsEditorApi: Send + Sync {
    /// Load all settings from the store and capture a fresh baseline
    async fn load(&self) -> Result<WorkingSet, SettingsError>;

    /// Rows of the current baseline, loading first if the session never loaded
    async fn baseline(&self) -> Result<WorkingSet, SettingsError>;

    /// Reconcile, validate and persist an edited set
    async fn submit(&self, candidate: Vec<CandidateSetting>)
        -> Result<SubmitOutcome, SettingsError>;
}
