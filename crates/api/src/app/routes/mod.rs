use axum::Router;

pub mod flavors;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new().merge(flavors::router())
}
