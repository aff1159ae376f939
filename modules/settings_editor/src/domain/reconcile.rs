//! Edit reconciliation - keys may never change from the editing surface
//!
//! Every candidate row is paired with a baseline row. A row whose key differs from
//! its pair has the key forced back to the baseline key and the revert is reported.
//! Values pass through untouched.

use crate::contract::{CandidateSetting, KeyRevert, PairingMode, SettingsError};

use super::baseline::Baseline;

/// Candidate set after key reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Candidate rows with every key restored to its baseline key
    pub rows: Vec<CandidateSetting>,
    /// Keys that were forced back, in candidate order
    pub reverted: Vec<KeyRevert>,
}

impl Reconciled {
    pub fn keys_were_reverted(&self) -> bool {
        !self.reverted.is_empty()
    }
}

/// Reconcile `candidate` against `baseline`
///
/// Fails with `StructuralMismatch` before looking at any row when the counts differ.
pub fn reconcile(
    baseline: &Baseline,
    candidate: Vec<CandidateSetting>,
    mode: PairingMode,
) -> Result<Reconciled, SettingsError> {
    baseline.check_cardinality(candidate.len())?;

    let pairs = match mode {
        PairingMode::Positional => (0..candidate.len()).collect(),
        PairingMode::ByKey => pair_by_key(baseline, &candidate),
    };

    let mut rows = candidate;
    let mut reverted = Vec::new();
    for (index, (row, baseline_index)) in rows.iter_mut().zip(pairs).enumerate() {
        let Some(original) = baseline.compare(&row.key, baseline_index) else {
            continue;
        };
        tracing::debug!(index, attempted = %row.key, restored = %original, "reverting key change");
        reverted.push(KeyRevert {
            index,
            attempted: std::mem::replace(&mut row.key, original.to_string()),
            restored: original.to_string(),
        });
    }

    Ok(Reconciled { rows, reverted })
}

/// Baseline position for each candidate row
///
/// Rows keep their own position when the key still matches there, then claim the
/// baseline row carrying the same key. Whatever is left (unknown or duplicated keys)
/// is paired in order with the unclaimed baseline rows.
fn pair_by_key(baseline: &Baseline, candidate: &[CandidateSetting]) -> Vec<usize> {
    let mut pairs: Vec<Option<usize>> = vec![None; candidate.len()];
    let mut claimed = vec![false; baseline.len()];

    for (i, row) in candidate.iter().enumerate() {
        if baseline.compare(&row.key, i).is_none() && i < baseline.len() {
            pairs[i] = Some(i);
            claimed[i] = true;
        }
    }

    for (i, row) in candidate.iter().enumerate() {
        if pairs[i].is_some() {
            continue;
        }
        if let Some(position) = baseline.position_of(&row.key) {
            if !claimed[position] {
                pairs[i] = Some(position);
                claimed[position] = true;
            }
        }
    }

    let mut unclaimed = claimed
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(position, _)| position);

    pairs
        .into_iter()
        .map(|pair| pair.or_else(|| unclaimed.next()).unwrap_or_default())
        .collect()
}
