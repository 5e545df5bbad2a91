use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use flavorstock_core::{DomainResult, Entity, FlavorId};
use flavorstock_inventory::{FlavorStore, StockDirection};

use crate::app::extract::{BodyRejection, RequestBody};
use crate::app::{dto, errors};

type Store = Arc<dyn FlavorStore>;

pub fn router() -> Router {
    Router::new()
        .route("/flavors", get(list_flavors).post(create_flavor))
        .route("/flavors/:id", get(get_flavor).delete(delete_flavor))
        .route("/flavors/:id/stock", get(get_stock))
        .route("/flavors/:id/buy", put(buy))
        .route("/flavors/:id/restock", put(restock))
}

fn parse_id(raw: &str) -> DomainResult<FlavorId> {
    raw.parse()
}

pub async fn create_flavor(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    body: Result<RequestBody<dto::CreateFlavorRequest>, BodyRejection>,
) -> axum::response::Response {
    let path = uri.path();

    let RequestBody(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection, path),
    };

    let name = match body.name() {
        Some(name) => name,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "the `name` field of the body is required",
                path,
            );
        }
    };

    match store.create(name) {
        Ok(flavor) => {
            tracing::info!(flavor_id = %flavor.id(), name = %name, "flavor created");
            (StatusCode::CREATED, Json(flavor)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e, path, None),
    }
}

pub async fn list_flavors(Extension(store): Extension<Store>) -> axum::response::Response {
    let flavors = store.list_active();
    (StatusCode::OK, Json(dto::FlavorListResponse::from(flavors))).into_response()
}

pub async fn get_flavor(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let path = uri.path();

    match parse_id(&id).and_then(|id| store.find_by_id(id)) {
        Ok(flavor) => (StatusCode::OK, Json(flavor)).into_response(),
        Err(e) => errors::domain_error_to_response(e, path, Some(&id)),
    }
}

pub async fn get_stock(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let path = uri.path();

    match parse_id(&id).and_then(|id| store.find_by_id(id)) {
        Ok(flavor) => (
            StatusCode::OK,
            Json(dto::StockResponse {
                stock: flavor.stock(),
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e, path, Some(&id)),
    }
}

pub async fn buy(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    body: Result<RequestBody<dto::StockAdjustmentRequest>, BodyRejection>,
) -> axum::response::Response {
    adjust(store, uri.path(), &id, body, StockDirection::Buy)
}

pub async fn restock(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    body: Result<RequestBody<dto::StockAdjustmentRequest>, BodyRejection>,
) -> axum::response::Response {
    adjust(store, uri.path(), &id, body, StockDirection::Restock)
}

/// Shared buy/restock flow: id shape, then body shape, then the store
/// (which checks the amount before the record).
fn adjust(
    store: Store,
    path: &str,
    raw_id: &str,
    body: Result<RequestBody<dto::StockAdjustmentRequest>, BodyRejection>,
    direction: StockDirection,
) -> axum::response::Response {
    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e, path, Some(raw_id)),
    };

    let RequestBody(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::body_rejection_to_response(rejection, path),
    };

    match store.adjust_stock(id, body.amount(), direction) {
        Ok(stock) => {
            tracing::info!(
                flavor_id = %id,
                direction = direction.as_str(),
                stock,
                "stock adjusted"
            );
            (StatusCode::OK, Json(dto::StockResponse { stock })).into_response()
        }
        Err(e) => errors::domain_error_to_response(e, path, Some(raw_id)),
    }
}

pub async fn delete_flavor(
    Extension(store): Extension<Store>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let path = uri.path();

    match parse_id(&id).and_then(|id| store.soft_delete(id)) {
        Ok(flavor) => {
            tracing::info!(flavor_id = %flavor.id(), "flavor deleted");
            (StatusCode::OK, Json(flavor)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e, path, Some(&id)),
    }
}
