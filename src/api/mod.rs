//! HTTP surface: the two JSON endpoints plus optional static frontend serving.

pub mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared request context; read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router.
///
/// Static serving is wired only when the frontend bundle directory exists:
/// `/assets` maps into the bundle and every path not matching an API route
/// falls back to the bundle's `index.html`. Without a bundle, unmatched paths
/// get the framework's 404.
pub fn router(config: Arc<Config>) -> Router {
    let state = AppState {
        config: config.clone(),
    };

    let mut app = Router::new()
        .route("/sector-list", get(handlers::sector_list))
        .route("/sector-company-list", post(handlers::sector_company_list))
        .with_state(state);

    if config.frontend_dist.is_dir() {
        let assets = config.frontend_dist.join("assets");
        let index = config.frontend_dist.join("index.html");
        app = app
            .nest_service("/assets", ServeDir::new(assets))
            .fallback_service(ServeFile::new(index));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
