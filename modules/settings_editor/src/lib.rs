//! Settings Editor Module
//!
//! View and edit a small set of named fixed-point settings. Submissions are
//! reconciled against the last loaded baseline so keys can never be renamed,
//! validated against the (10,2) numeric domain, and written in one transaction.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsEditorApi, error::SettingsError, CandidateSetting, ConfigurationSetting,
    SettingValue, SubmitOutcome,
};

pub mod module;
pub use module::SettingsEditorModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
