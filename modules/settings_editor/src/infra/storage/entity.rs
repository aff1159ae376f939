//! SeaORM entity for the settings table

use sea_orm::entity::prelude::*;

/// Configuration settings table entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "configuration_settings")]
pub struct Model {
    /// Implicit row sequence; defines storage order
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Setting key (unique, at most 50 characters)
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub setting_key: String,

    /// Fixed-point value, precision 10, scale 2
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub setting_value: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
