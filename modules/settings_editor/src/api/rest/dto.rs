//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Setting DTOs =====

/// Setting response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingDto {
    /// Setting key
    #[schema(example = "Timeout")]
    pub key: String,

    /// Value rendered with two fractional digits
    #[schema(example = "45.50")]
    pub value: String,
}

/// Edited row as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CandidateDto {
    /// Setting key; must match the loaded key
    #[schema(example = "Timeout")]
    pub key: String,

    /// Raw text as typed, or a JSON number
    #[schema(value_type = String, example = "45,5")]
    pub value: CandidateValueDto,
}

/// Candidate value: text is parsed by the validator, numbers are taken as typed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateValueDto {
    Number(serde_json::Number),
    Text(String),
}

/// Submit request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// Every row of the edited set, in the order it was loaded
    pub items: Vec<CandidateDto>,
}

// ===== List Response DTOs =====

/// Settings as stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsListResponse {
    /// Rows in storage order
    pub items: Vec<SettingDto>,

    /// Total count
    pub total: usize,
}

/// Corrected set returned when a key change was rejected
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenameRejectedResponse {
    /// Submitted rows with every key restored
    pub items: Vec<CandidateDto>,
}

// Note: Conversion implementations live in mapper.rs
