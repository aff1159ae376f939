//! Module wiring: configuration, database, session and surfaces

use crate::api::native::{client::SharedController, NativeClient};
use crate::config::Config;
use crate::contract::SettingsEditorApi;
use crate::domain::{SessionController, StoreSession};
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmSettingsStore};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Settings editor module
pub struct SettingsEditorModule {
    session: Arc<StoreSession>,
    client: NativeClient,
}

impl SettingsEditorModule {
    /// Connect to the configured database and build the editing session
    pub async fn init(config: Config) -> Result<Self> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        if config.database_url.starts_with("sqlite") {
            // every pooled connection would otherwise see its own in-memory database
            options.max_connections(1).min_connections(1);
        }
        options.sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .with_context(|| format!("failed to connect to {}", config.database_url))?;

        Self::with_connection(config, db).await
    }

    /// Build the module over an already-open connection
    pub async fn with_connection(config: Config, db: DatabaseConnection) -> Result<Self> {
        if config.run_migrations {
            Migrator::up(&db, None).await?;
            tracing::info!("Settings editor migrations completed");
        }

        let store = Arc::new(SeaOrmSettingsStore::new(Arc::new(db)));
        let session = Arc::new(StoreSession::connected(store));

        let controller: SharedController = Arc::new(Mutex::new(SessionController::new(
            session.clone(),
            config.pairing_mode(),
            config.number_format(),
        )));
        let client = NativeClient::new(controller);

        tracing::info!(pairing = ?config.pairing, "Settings editor initialized");
        Ok(Self { session, client })
    }

    /// Session handle, for reconnecting or dropping the store
    pub fn session(&self) -> &Arc<StoreSession> {
        &self.session
    }

    pub fn client(&self) -> &NativeClient {
        &self.client
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering settings editor REST routes");
        let api: Arc<dyn SettingsEditorApi> = Arc::new(self.client.clone());
        crate::api::rest::routes::register_routes(router, api)
    }
}
