//! HTTP transport for the boxoffice inventory service
//!
//! A thin layer over the inventory engine: routing, JSON encoding, status
//! mapping, and request logging live here, while every piece of inventory
//! logic stays in the core. Handlers acquire an admission permit before
//! invoking the engine, bounding how many operations run at once.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/events",
            post(handlers::create_event).get(handlers::list_events),
        )
        .route("/api/v1/events/:id/book", post(handlers::book_tickets))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
