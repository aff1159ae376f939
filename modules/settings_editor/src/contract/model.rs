//! Contract models for the settings editor
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain models.

use rust_decimal::Decimal;

/// Maximum length of a setting key, in characters
pub const MAX_KEY_LEN: usize = 50;

/// Number of fractional digits every stored value carries
pub const VALUE_SCALE: u32 = 2;

/// A named numeric setting as persisted in the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSetting {
    /// Stable identity of the setting (case-sensitive, unique)
    pub key: String,
    /// Fixed-point value, scale 2
    pub value: Decimal,
}

impl ConfigurationSetting {
    pub fn new(key: impl Into<String>, value: Decimal) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Ordered rows in storage order
pub type WorkingSet = Vec<ConfigurationSetting>;

/// Value of an edited row as handed back by the editing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Raw text as typed by the operator
    Text(String),
    /// Already typed fixed-point value
    Fixed(Decimal),
}

impl From<&str> for SettingValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Decimal> for SettingValue {
    fn from(value: Decimal) -> Self {
        Self::Fixed(value)
    }
}

/// A row of a submitted candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSetting {
    pub key: String,
    pub value: SettingValue,
}

impl CandidateSetting {
    pub fn new(key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<&ConfigurationSetting> for CandidateSetting {
    fn from(setting: &ConfigurationSetting) -> Self {
        Self {
            key: setting.key.clone(),
            value: SettingValue::Fixed(setting.value),
        }
    }
}

/// How candidate rows are paired with baseline rows during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Candidate row `i` is compared with baseline row `i`
    Positional,
    /// Rows are joined on key; only unknown or duplicated keys count as renames
    #[default]
    ByKey,
}

/// Textual convention for decimal numerals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl NumberFormat {
    /// Locale-invariant convention: `1,234.56`
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
    };

    /// Comma-decimal convention: `1.234,56`
    pub const COMMA_DECIMAL: Self = Self {
        decimal_separator: ',',
        group_separator: '.',
    };
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// A key that was forced back to its baseline value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRevert {
    /// Position of the row in the candidate set
    pub index: usize,
    /// Key the editing surface submitted
    pub attempted: String,
    /// Key restored from the baseline
    pub restored: String,
}

/// Why a persist was rolled back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistFailure {
    /// Offending key, when the failure can be attributed to one row
    pub key: Option<String>,
    pub reason: String,
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All changes committed; carries the rows reloaded from the store
    Accepted(WorkingSet),
    /// One or more keys were changed; carries the corrected candidate set
    RenameRejected(Vec<CandidateSetting>),
    /// A value failed parsing or range checks
    ValidationRejected {
        key: String,
        reason: String,
    },
    /// Candidate and baseline row counts differ; local state was reloaded
    StructuralMismatch {
        expected: usize,
        actual: usize,
    },
    /// The store write failed and the whole batch was rolled back
    PersistenceFailed(PersistFailure),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Lifecycle state of an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Loaded,
    Editing,
    Submitting,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Loaded => "loaded",
            Self::Editing => "editing",
            Self::Submitting => "submitting",
        };
        f.write_str(name)
    }
}
