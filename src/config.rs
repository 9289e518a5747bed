use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration, resolved once at startup and passed into the router.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port; the server binds all interfaces.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Directory holding the built frontend bundle, if any.
    pub frontend_dist: PathBuf,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "data/stock.db".to_string())
            .into();

        let frontend_dist = std::env::var("FRONTEND_DIST")
            .unwrap_or_else(|_| "frontend/dist".to_string())
            .into();

        Config {
            port,
            database_path,
            frontend_dist,
        }
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
