//! Baseline snapshot of the rows last loaded from the store
//!
//! The baseline is only ever used for comparison. It is replaced wholesale on every
//! load and never mutated in between.

use crate::contract::{ConfigurationSetting, SettingsError};
use std::collections::HashMap;

use super::validation::validate_key;

/// Rows as last known to match the backing store, in storage order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    rows: Vec<ConfigurationSetting>,
    index: HashMap<String, usize>,
}

impl Baseline {
    /// Copy `rows` into a new baseline, checking key shape and uniqueness
    pub fn capture(rows: &[ConfigurationSetting]) -> Result<Self, SettingsError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            validate_key(&row.key)?;
            if index.insert(row.key.clone(), position).is_some() {
                return Err(SettingsError::InvalidKey {
                    key: row.key.clone(),
                    reason: "duplicate key in loaded settings".to_string(),
                });
            }
        }

        Ok(Self {
            rows: rows.to_vec(),
            index,
        })
    }

    pub fn rows(&self) -> &[ConfigurationSetting] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `key` in storage order
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Original key at `index` when it differs from `candidate_key`
    ///
    /// Returns `None` when the keys match or `index` is out of bounds.
    pub fn compare(&self, candidate_key: &str, index: usize) -> Option<&str> {
        self.rows
            .get(index)
            .map(|row| row.key.as_str())
            .filter(|original| *original != candidate_key)
    }

    /// Reject a candidate set whose row count differs from the baseline
    pub fn check_cardinality(&self, candidate_len: usize) -> Result<(), SettingsError> {
        if candidate_len != self.rows.len() {
            return Err(SettingsError::StructuralMismatch {
                expected: self.rows.len(),
                actual: candidate_len,
            });
        }
        Ok(())
    }
}
