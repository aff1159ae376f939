//! Session controller - orchestrates load, reconcile, validate, persist and reload

use crate::contract::{
    CandidateSetting, NumberFormat, PairingMode, SessionState, SettingValue, SettingsError,
    SubmitOutcome,
};
use std::sync::Arc;

use super::baseline::Baseline;
use super::persist::persist;
use super::reconcile::reconcile;
use super::repository::{Session, SettingsStore};
use super::validation::validate_value;

/// One editing session against one store handle
///
/// Holds the baseline of the last load. Every method that touches the store takes
/// `&mut self`, so a submission never overlaps a load.
pub struct SessionController {
    session: Arc<dyn Session>,
    pairing: PairingMode,
    number_format: NumberFormat,
    state: SessionState,
    baseline: Option<Baseline>,
}

impl SessionController {
    pub fn new(session: Arc<dyn Session>, pairing: PairingMode, number_format: NumberFormat) -> Self {
        Self {
            session,
            pairing,
            number_format,
            state: SessionState::Disconnected,
            baseline: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Baseline of the last successful load
    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Load every row from the store and capture a fresh baseline
    ///
    /// On failure the previous baseline and state are kept.
    pub async fn load(&mut self) -> Result<&Baseline, SettingsError> {
        let store = self.store()?;
        let rows = store.query().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to load settings");
            SettingsError::Connectivity {
                reason: e.to_string(),
            }
        })?;

        let baseline = Baseline::capture(&rows)?;
        tracing::info!(rows = baseline.len(), "settings loaded");
        self.state = SessionState::Loaded;
        Ok(self.baseline.insert(baseline))
    }

    /// Hand out a copy of the baseline for editing
    pub fn begin_edit(&mut self) -> Result<Vec<CandidateSetting>, SettingsError> {
        let baseline = self.loaded_baseline("edit")?;
        let rows = baseline.rows().iter().map(CandidateSetting::from).collect();
        self.state = SessionState::Editing;
        Ok(rows)
    }

    /// Reconcile, validate and persist `candidate`
    ///
    /// Business rejections come back as `SubmitOutcome` variants. `Err` is reserved
    /// for connectivity loss and calls made in the wrong state.
    pub async fn submit(
        &mut self,
        candidate: Vec<CandidateSetting>,
    ) -> Result<SubmitOutcome, SettingsError> {
        self.loaded_baseline("submit")?;
        self.state = SessionState::Submitting;
        let result = self.run_submission(candidate).await;
        self.state = SessionState::Loaded;
        result
    }

    async fn run_submission(
        &mut self,
        candidate: Vec<CandidateSetting>,
    ) -> Result<SubmitOutcome, SettingsError> {
        let baseline = self.baseline.as_ref().ok_or(SettingsError::Internal)?;

        let reconciled = match reconcile(baseline, candidate, self.pairing) {
            Ok(reconciled) => reconciled,
            Err(SettingsError::StructuralMismatch { expected, actual }) => {
                tracing::warn!(expected, actual, "row count drifted, reloading");
                self.load().await?;
                return Ok(SubmitOutcome::StructuralMismatch { expected, actual });
            }
            Err(other) => return Err(other),
        };

        if reconciled.keys_were_reverted() {
            tracing::warn!(reverted = reconciled.reverted.len(), "key changes rejected");
            return Ok(SubmitOutcome::RenameRejected(reconciled.rows));
        }

        let mut validated = Vec::with_capacity(reconciled.rows.len());
        for row in reconciled.rows {
            match validate_value(&row.value, self.number_format) {
                Ok(value) => validated.push(CandidateSetting {
                    key: row.key,
                    value: SettingValue::Fixed(value),
                }),
                Err(err) => {
                    tracing::warn!(key = %row.key, error = %err, "value rejected");
                    return Ok(SubmitOutcome::ValidationRejected {
                        key: row.key,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let store = self.store()?;
        if let Err(err) = persist(store.as_ref(), &validated, self.number_format).await {
            return Ok(SubmitOutcome::PersistenceFailed((&err).into()));
        }

        let refreshed = self.load().await?;
        Ok(SubmitOutcome::Accepted(refreshed.rows().to_vec()))
    }

    fn store(&self) -> Result<Arc<dyn SettingsStore>, SettingsError> {
        self.session
            .active_store()
            .ok_or_else(|| SettingsError::Connectivity {
                reason: "no active store handle".to_string(),
            })
    }

    fn loaded_baseline(&self, operation: &'static str) -> Result<&Baseline, SettingsError> {
        match (&self.baseline, self.state) {
            (Some(baseline), SessionState::Loaded | SessionState::Editing) => Ok(baseline),
            _ => Err(SettingsError::InvalidState {
                state: self.state,
                operation,
            }),
        }
    }
}
