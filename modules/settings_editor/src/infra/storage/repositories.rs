//! SeaORM store implementation

use crate::contract::ConfigurationSetting;
use crate::domain::repository::{SettingsStore, StoreTransaction};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::entity;

// ===== Settings Store =====

pub struct SeaOrmSettingsStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsStore for SeaOrmSettingsStore {
    async fn query(&self) -> Result<Vec<ConfigurationSetting>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn begin(&self) -> Result<Box<dyn StoreTransaction>> {
        let txn = self.db.begin().await?;
        Ok(Box::new(SeaOrmTransaction { txn }))
    }
}

// ===== Transaction =====

/// Open database transaction; rolls back on drop unless committed
pub struct SeaOrmTransaction {
    txn: DatabaseTransaction,
}

#[async_trait]
impl StoreTransaction for SeaOrmTransaction {
    async fn update_value(&mut self, key: &str, value: Decimal) -> Result<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::SettingValue, Expr::value(value))
            .filter(entity::Column::SettingKey.eq(key))
            .exec(&self.txn)
            .await?;

        Ok(result.rows_affected)
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.txn.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.txn.rollback().await?;
        Ok(())
    }
}
