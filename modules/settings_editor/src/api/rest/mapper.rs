//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{CandidateSetting, ConfigurationSetting, SettingValue};
use rust_decimal::Decimal;
use std::str::FromStr;

// ===== Setting conversions =====

impl From<ConfigurationSetting> for SettingDto {
    fn from(setting: ConfigurationSetting) -> Self {
        Self {
            key: setting.key,
            value: setting.value.to_string(),
        }
    }
}

// ===== Candidate conversions =====

impl From<CandidateDto> for CandidateSetting {
    fn from(dto: CandidateDto) -> Self {
        let value = match dto.value {
            // JSON numbers are read exactly; anything Decimal cannot hold goes to the validator as text
            CandidateValueDto::Number(number) => {
                let text = number.to_string();
                Decimal::from_str(&text)
                    .map(SettingValue::Fixed)
                    .unwrap_or(SettingValue::Text(text))
            }
            CandidateValueDto::Text(text) => SettingValue::Text(text),
        };
        Self { key: dto.key, value }
    }
}

impl From<CandidateSetting> for CandidateDto {
    fn from(setting: CandidateSetting) -> Self {
        let value = match setting.value {
            SettingValue::Text(text) => CandidateValueDto::Text(text),
            SettingValue::Fixed(value) => CandidateValueDto::Text(value.to_string()),
        };
        Self {
            key: setting.key,
            value,
        }
    }
}

pub fn list_response(rows: Vec<ConfigurationSetting>) -> SettingsListResponse {
    let items: Vec<SettingDto> = rows.into_iter().map(SettingDto::from).collect();
    let total = items.len();
    SettingsListResponse { items, total }
}
