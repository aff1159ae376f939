//! Contract layer - public API for in-process communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsEditorApi;
pub use error::{SettingsError, ValueError};
pub use model::{
    CandidateSetting, ConfigurationSetting, KeyRevert, NumberFormat, PairingMode,
    PersistFailure, SessionState, SettingValue, SubmitOutcome, WorkingSet, MAX_KEY_LEN,
    VALUE_SCALE,
};
