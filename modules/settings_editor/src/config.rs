//! Configuration for the settings editor module

use crate::contract::{NumberFormat, PairingMode};
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; nested keys use `__` (e.g. `SETTINGS_EDITOR_NUMBER_FORMAT__DECIMAL_SEPARATOR`)
pub const ENV_PREFIX: &str = "SETTINGS_EDITOR_";

/// Settings editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Create the settings table on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// How edited rows are paired with the baseline
    #[serde(default)]
    pub pairing: Pairing,

    /// Locale convention tried before the invariant one when parsing values
    #[serde(default)]
    pub number_format: NumberFormatConfig,
}

/// Pairing strategy for reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    Positional,
    #[default]
    ByKey,
}

impl From<Pairing> for PairingMode {
    fn from(pairing: Pairing) -> Self {
        match pairing {
            Pairing::Positional => PairingMode::Positional,
            Pairing::ByKey => PairingMode::ByKey,
        }
    }
}

/// Decimal and grouping separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberFormatConfig {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
}

impl Default for NumberFormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
        }
    }
}

impl From<NumberFormatConfig> for NumberFormat {
    fn from(cfg: NumberFormatConfig) -> Self {
        Self {
            decimal_separator: cfg.decimal_separator,
            group_separator: cfg.group_separator,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            run_migrations: true,
            pairing: Pairing::default(),
            number_format: NumberFormatConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, then the optional YAML file, then `SETTINGS_EDITOR_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment
            .extract()
            .context("failed to read settings editor configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let NumberFormatConfig {
            decimal_separator,
            group_separator,
        } = self.number_format;

        if decimal_separator == group_separator {
            bail!("decimal and group separators must differ (both '{}')", decimal_separator);
        }
        for (name, sep) in [("decimal", decimal_separator), ("group", group_separator)] {
            if sep.is_ascii_digit() || sep.is_whitespace() || sep == '-' || sep == '+' {
                bail!("{} separator '{}' is not allowed", name, sep);
            }
        }
        if self.database_url.trim().is_empty() {
            bail!("database_url cannot be empty");
        }
        Ok(())
    }

    pub fn pairing_mode(&self) -> PairingMode {
        self.pairing.into()
    }

    pub fn number_format(&self) -> NumberFormat {
        self.number_format.into()
    }
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_true() -> bool {
    true
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_group_separator() -> char {
    ','
}
