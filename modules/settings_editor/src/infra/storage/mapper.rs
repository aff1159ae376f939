//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{ConfigurationSetting, VALUE_SCALE};
use rust_decimal::RoundingStrategy;

use super::entity;

impl From<entity::Model> for ConfigurationSetting {
    fn from(entity: entity::Model) -> Self {
        // SQLite hands decimals back through f64; restore the column scale
        let mut value = entity
            .setting_value
            .round_dp_with_strategy(VALUE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(VALUE_SCALE);

        Self {
            key: entity.setting_key,
            value,
        }
    }
}

impl From<&ConfigurationSetting> for entity::ActiveModel {
    fn from(model: &ConfigurationSetting) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            setting_key: Set(model.key.clone()),
            setting_value: Set(model.value),
        }
    }
}
