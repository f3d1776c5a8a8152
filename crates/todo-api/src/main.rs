//! # todo-api
//!
//! Todo API server binary — wires settings, database, and HTTP server
//! together and runs until interrupted.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todo_server::config::ServerConfig;
use todo_server::server::TodoServer;
use todo_settings::TodoSettings;
use todo_store::{ConnectionConfig, TaskService};

/// Todo API server.
#[derive(Parser, Debug)]
#[command(name = "todo-api", about = "TodoMVC REST API server")]
struct Cli {
    /// Host to bind (overrides settings if specified).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides settings if specified; 0 for auto-assign).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the `SQLite` database file.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Maximum connections in the `SQLite` pool.
    #[arg(long)]
    pool_size: Option<u32>,

    /// Use an ephemeral in-memory database instead of a file.
    #[arg(long)]
    in_memory: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Install the global subscriber: `info` by default, `RUST_LOG` overrides.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_json);

    // Settings file is optional; a corrupt file falls back to defaults
    // (env overrides still apply) rather than refusing to start.
    let settings = match todo_settings::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load settings file, using defaults");
            let mut fallback = TodoSettings::default();
            todo_settings::apply_env_overrides(&mut fallback);
            fallback
        }
    };

    let host = args.host.unwrap_or(settings.server.host);
    let port = args.port.unwrap_or(settings.server.port);
    let connection_config = ConnectionConfig {
        pool_size: args.pool_size.unwrap_or(settings.database.pool_size),
        busy_timeout_ms: settings.database.busy_timeout_ms,
        ..ConnectionConfig::default()
    };

    let pool = if args.in_memory {
        tracing::info!("using in-memory database");
        todo_store::new_in_memory(&connection_config)
            .context("Failed to open in-memory database")?
    } else {
        let db_path = args
            .db_path
            .unwrap_or_else(|| settings.database.resolved_path());
        ensure_parent_dir(&db_path)?;
        tracing::info!(path = %db_path.display(), "opening database");
        todo_store::new_file(&db_path.to_string_lossy(), &connection_config)
            .context("Failed to open database")?
    };

    {
        let conn = pool.get().context("Failed to get DB connection")?;
        let _ = todo_store::run_migrations(&conn).context("Failed to run migrations")?;
    }

    let server = TodoServer::new(ServerConfig { host, port }, TaskService::new(pool));

    let (addr, handle) = server.listen().await.context("Failed to bind server")?;
    tracing::info!("Todo API listening on http://{addr}");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    server.shutdown().shutdown();
    let _ = handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
