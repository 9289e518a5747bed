use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stock_sector_api::api;
use stock_sector_api::config::Config;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Stock sector and company finance query service"
)]
struct Cli {
    /// Listening port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the SQLite database file (overrides DATABASE_PATH)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Directory holding the built frontend bundle (overrides FRONTEND_DIST)
    #[arg(long)]
    frontend_dist: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stock_sector_api=info,tower_http=warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if let Some(frontend_dist) = cli.frontend_dist {
        config.frontend_dist = frontend_dist;
    }

    if config.frontend_dist.is_dir() {
        info!(
            "Serving frontend bundle from {}",
            config.frontend_dist.display()
        );
    } else {
        info!(
            "No frontend bundle at {}; static serving disabled",
            config.frontend_dist.display()
        );
    }
    info!("Using database {}", config.database_path.display());

    let addr = config.bind_addr();
    let app = api::router(Arc::new(config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
    }
}
