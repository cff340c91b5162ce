//! HTTP API - REST routes over the product service.
//!
//! Routes are nested under `/api/products` and exchange the JSON shape of
//! [`crate::models::Product`].

/// Error-to-response mapping
pub mod errors;
/// Product route handlers
pub mod products;

use axum::Router;
use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(database: Arc<DatabaseConnection>) -> Self {
        Self { database }
    }
}

/// Builds the application router with CORS applied.
///
/// An empty `cors_origins` list (or one containing `"*"`) allows any origin.
#[must_use]
pub fn router(database: Arc<DatabaseConnection>, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api/products", products::router())
        .layer(cors_layer(cors_origins))
        .with_state(AppState::new(database))
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    if cors_origins.is_empty() || cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(origins))
}
