//! HTTP API application wiring (Axum router + store handle).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses
//! - `extract.rs`: JSON-or-form body extractor

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use flavorstock_inventory::FlavorStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The store is owned by the caller so tests can run independent instances.
pub fn build_app(store: Arc<dyn FlavorStore>) -> Router {
    let api = routes::router().layer(Extension(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(ServiceBuilder::new().layer(middleware::http_trace_layer()))
}
