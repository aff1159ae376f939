//! Transactional persistence of a reconciled set

use crate::contract::{CandidateSetting, NumberFormat, PersistFailure, ValueError};
use thiserror::Error;

use super::repository::{SettingsStore, StoreTransaction};
use super::validation::validate_value;

/// Why a batch was rolled back
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to open transaction: {0}")]
    Begin(#[source] anyhow::Error),
    #[error("invalid value for '{key}': {source}")]
    InvalidValue { key: String, source: ValueError },
    #[error("update of '{key}' affected {affected} rows, expected exactly 1")]
    RowCount { key: String, affected: u64 },
    #[error("update of '{key}' failed: {source}")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("commit failed: {0}")]
    Commit(#[source] anyhow::Error),
}

impl PersistError {
    /// Key of the row that caused the failure, when known
    pub fn offending_key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key, .. } | Self::RowCount { key, .. } | Self::Write { key, .. } => {
                Some(key)
            }
            Self::Begin(_) | Self::Commit(_) => None,
        }
    }
}

impl From<&PersistError> for PersistFailure {
    fn from(err: &PersistError) -> Self {
        Self {
            key: err.offending_key().map(str::to_string),
            reason: err.to_string(),
        }
    }
}

/// Write every row of `rows` in one transaction, matching rows by key
///
/// Either all updates commit or none do. Returns the number of rows written.
pub async fn persist(
    store: &dyn SettingsStore,
    rows: &[CandidateSetting],
    format: NumberFormat,
) -> Result<usize, PersistError> {
    let mut tx = store.begin().await.map_err(PersistError::Begin)?;

    match apply_batch(tx.as_mut(), rows, format).await {
        Ok(written) => {
            tx.commit().await.map_err(PersistError::Commit)?;
            tracing::info!(rows = written, "settings batch committed");
            Ok(written)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rolling back settings batch");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}

async fn apply_batch(
    tx: &mut dyn StoreTransaction,
    rows: &[CandidateSetting],
    format: NumberFormat,
) -> Result<usize, PersistError> {
    for row in rows {
        let value = validate_value(&row.value, format).map_err(|source| PersistError::InvalidValue {
            key: row.key.clone(),
            source,
        })?;

        let affected = tx
            .update_value(&row.key, value)
            .await
            .map_err(|source| PersistError::Write {
                key: row.key.clone(),
                source,
            })?;
        if affected != 1 {
            return Err(PersistError::RowCount {
                key: row.key.clone(),
                affected,
            });
        }
        tracing::debug!(key = %row.key, %value, "setting updated");
    }
    Ok(rows.len())
}
