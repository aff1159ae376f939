//! Settings editor server
//!
//! Loads configuration, connects the store, captures the first baseline and
//! serves the settings REST API.

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use settings_editor::{Config, SettingsEditorApi, SettingsEditorModule};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "settings-editor-server", version, about = "Edit numeric configuration settings over HTTP")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8087")]
    bind: SocketAddr,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm_migration=warn"));

    fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load(cli.config.as_deref())?;
    if cli.print_config {
        println!("{:#?}", config);
        return Ok(());
    }

    let module = SettingsEditorModule::init(config).await?;
    let rows = module.client().load().await?;
    tracing::info!(rows = rows.len(), "initial baseline captured");

    let app = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    tracing::info!(addr = %cli.bind, "settings editor listening");

    axum::serve(listener, app).await?;
    Ok(())
}
