//! Store and session traits for data access
//!
//! These traits define the interface the editing engine consumes.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::ConfigurationSetting;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Backing store holding the settings table
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// All rows ordered by the implicit row sequence
    async fn query(&self) -> Result<Vec<ConfigurationSetting>>;

    /// Open a transaction for a batch of updates
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>>;
}

/// A batch of writes that commit or roll back together
#[async_trait]
pub trait StoreTransaction: Send {
    /// Set the value of the row whose key equals `key`; returns rows affected
    async fn update_value(&mut self, key: &str, value: Decimal) -> Result<u64>;

    async fn commit(self: Box<Self>) -> Result<()>;

    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Supplies an already-open store handle
pub trait Session: Send + Sync {
    /// The live store, or `None` when disconnected
    fn active_store(&self) -> Option<Arc<dyn SettingsStore>>;
}

/// Session over a fixed store handle that can be dropped
pub struct StoreSession {
    store: parking_lot::RwLock<Option<Arc<dyn SettingsStore>>>,
}

impl StoreSession {
    pub fn connected(store: Arc<dyn SettingsStore>) -> Self {
        Self {
            store: parking_lot::RwLock::new(Some(store)),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            store: parking_lot::RwLock::new(None),
        }
    }

    /// Replace the store handle
    pub fn connect(&self, store: Arc<dyn SettingsStore>) {
        *self.store.write() = Some(store);
    }

    /// Drop the store handle
    pub fn disconnect(&self) {
        *self.store.write() = None;
    }
}

impl Session for StoreSession {
    fn active_store(&self) -> Option<Arc<dyn SettingsStore>> {
        self.store.read().clone()
    }
}
