//! Common test utilities: in-memory store with fault injection and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use settings_editor::contract::{CandidateSetting, ConfigurationSetting, NumberFormat, PairingMode};
use settings_editor::domain::repository::{SettingsStore, StoreSession, StoreTransaction};
use settings_editor::domain::SessionController;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

pub fn dec(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

/// `[("MaxRetries", 3.00), ("Timeout", 30.00)]`
pub fn default_rows() -> Vec<ConfigurationSetting> {
    vec![
        ConfigurationSetting::new("MaxRetries", dec(300, 2)),
        ConfigurationSetting::new("Timeout", dec(3000, 2)),
    ]
}

pub fn candidate(rows: &[(&str, &str)]) -> Vec<CandidateSetting> {
    rows.iter()
        .map(|(key, value)| CandidateSetting::new(*key, *value))
        .collect()
}

#[derive(Default)]
struct Counters {
    begins: AtomicUsize,
    updates: AtomicUsize,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

/// In-memory store; transactions stage a private copy of the rows
#[derive(Clone)]
pub struct MockStore {
    rows: Arc<RwLock<Vec<ConfigurationSetting>>>,
    counters: Arc<Counters>,
    fail_query: Arc<AtomicBool>,
    fail_commit: Arc<AtomicBool>,
    fail_query_after_commit: Arc<AtomicBool>,
    fail_update_on: Arc<RwLock<Option<String>>>,
}

impl MockStore {
    /// Rows are stored as given, duplicates included
    pub fn with_rows(rows: Vec<ConfigurationSetting>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            counters: Arc::new(Counters::default()),
            fail_query: Arc::new(AtomicBool::new(false)),
            fail_commit: Arc::new(AtomicBool::new(false)),
            fail_query_after_commit: Arc::new(AtomicBool::new(false)),
            fail_update_on: Arc::new(RwLock::new(None)),
        }
    }

    pub fn rows(&self) -> Vec<ConfigurationSetting> {
        self.rows.read().clone()
    }

    /// Simulate an external writer
    pub fn set_rows(&self, rows: Vec<ConfigurationSetting>) {
        *self.rows.write() = rows;
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_query.store(fail, Ordering::SeqCst);
    }

    pub fn fail_commits(&self, fail: bool) {
        self.fail_commit.store(fail, Ordering::SeqCst);
    }

    /// Queries start failing once the next commit lands
    pub fn fail_queries_after_commit(&self) {
        self.fail_query_after_commit.store(true, Ordering::SeqCst);
    }

    pub fn fail_update_on(&self, key: &str) {
        *self.fail_update_on.write() = Some(key.to_string());
    }

    pub fn begins(&self) -> usize {
        self.counters.begins.load(Ordering::SeqCst)
    }

    /// Update statements issued, committed or not
    pub fn updates(&self) -> usize {
        self.counters.updates.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.counters.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.counters.rollbacks.load(Ordering::SeqCst)
    }

    pub fn print_state(&self, context: &str) {
        println!("\n========== MockStore State: {} ==========", context);
        for row in self.rows.read().iter() {
            println!("  {} = {}", row.key, row.value);
        }
        println!(
            "  begins={} updates={} commits={} rollbacks={}",
            self.begins(),
            self.updates(),
            self.commits(),
            self.rollbacks()
        );
    }
}

#[async_trait]
impl SettingsStore for MockStore {
    async fn query(&self) -> anyhow::Result<Vec<ConfigurationSetting>> {
        if self.fail_query.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(self.rows.read().clone())
    }

    async fn begin(&self) -> anyhow::Result<Box<dyn StoreTransaction>> {
        self.counters.begins.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockTransaction {
            staged: self.rows.read().clone(),
            store: self.clone(),
        }))
    }
}

pub struct MockTransaction {
    staged: Vec<ConfigurationSetting>,
    store: MockStore,
}

#[async_trait]
impl StoreTransaction for MockTransaction {
    async fn update_value(&mut self, key: &str, value: Decimal) -> anyhow::Result<u64> {
        self.store.counters.updates.fetch_add(1, Ordering::SeqCst);
        if self.store.fail_update_on.read().as_deref() == Some(key) {
            anyhow::bail!("disk I/O error");
        }

        let mut affected = 0;
        for row in self.staged.iter_mut().filter(|row| row.key == key) {
            row.value = value;
            affected += 1;
        }
        Ok(affected)
    }

    async fn commit(self: Box<Self>) -> anyhow::Result<()> {
        if self.store.fail_commit.load(Ordering::SeqCst) {
            anyhow::bail!("commit rejected");
        }
        let MockTransaction { staged, store } = *self;
        store.counters.commits.fetch_add(1, Ordering::SeqCst);
        *store.rows.write() = staged;
        if store.fail_query_after_commit.load(Ordering::SeqCst) {
            store.fail_query.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> anyhow::Result<()> {
        self.store.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Controller over `store`, already loaded
pub async fn loaded_controller(store: &MockStore, pairing: PairingMode) -> SessionController {
    let mut controller = controller(store, pairing, NumberFormat::INVARIANT);
    controller.load().await.unwrap();
    controller
}

pub fn controller(store: &MockStore, pairing: PairingMode, format: NumberFormat) -> SessionController {
    let session = Arc::new(StoreSession::connected(Arc::new(store.clone())));
    SessionController::new(session, pairing, format)
}
