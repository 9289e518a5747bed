//! Shared setup for integration tests: scratch databases and a running server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tempfile::TempDir;
use tokio::net::TcpListener;

use stock_sector_api::api;
use stock_sector_api::config::Config;

/// A server bound to an ephemeral port, backed by a scratch workspace.
pub struct TestApp {
    pub base_url: String,
    _workspace: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Seeded database, no frontend bundle.
pub async fn spawn_seeded() -> TestApp {
    let workspace = TempDir::new().unwrap();
    let database_path = workspace.path().join("stock.db");
    seed_database(&database_path).await;
    spawn(workspace, database_path, None).await
}

/// Seeded database plus a frontend bundle with an index page and one asset.
pub async fn spawn_with_frontend() -> TestApp {
    let workspace = TempDir::new().unwrap();
    let database_path = workspace.path().join("stock.db");
    seed_database(&database_path).await;

    let dist = workspace.path().join("dist");
    std::fs::create_dir_all(dist.join("assets")).unwrap();
    std::fs::write(dist.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dist.join("assets").join("app.js"), APP_JS).unwrap();

    spawn(workspace, database_path, Some(dist)).await
}

/// No database file on disk; both endpoints should fail closed.
pub async fn spawn_without_database() -> TestApp {
    let workspace = TempDir::new().unwrap();
    let database_path = workspace.path().join("absent.db");
    spawn(workspace, database_path, None).await
}

pub const INDEX_HTML: &str = "<!doctype html><title>Stock Sectors</title>";
pub const APP_JS: &str = "console.log('stock sectors');";

/// Create `company` and `finance` tables with a small fixed data set.
///
/// Sectors: Tech (companies A and B, one finance row for A) and Energy
/// (company C with one finance row).
pub async fn seed_database(path: &Path) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&options).await.unwrap();

    sqlx::query(
        "CREATE TABLE company (code INTEGER PRIMARY KEY, name TEXT NOT NULL, sectorBig TEXT)",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE finance (code INTEGER NOT NULL, quarter TEXT NOT NULL, revenue REAL)",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO company (code, name, sectorBig) VALUES
            (1, 'A', 'Tech'),
            (2, 'B', 'Tech'),
            (3, 'C', 'Energy')",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO finance (code, quarter, revenue) VALUES
            (1, 'Q1', 100.0),
            (3, 'Q1', 40.5)",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    conn.close().await.unwrap();
}

async fn spawn(workspace: TempDir, database_path: PathBuf, dist: Option<PathBuf>) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = Config {
        port: addr.port(),
        database_path,
        frontend_dist: dist.unwrap_or_else(|| workspace.path().join("no-dist")),
    };

    let app = api::router(Arc::new(config));
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        _workspace: workspace,
    }
}
