use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use flavorstock_core::DomainError;

use crate::app::extract::BodyRejection;

/// Hint attached to 404 responses.
pub const NOT_FOUND_HELP: &str = "GET /api/flavors for all flavors";

/// Render a domain error. `raw_id` is the id as it appeared in the path, if any.
pub fn domain_error_to_response(
    err: DomainError,
    path: &str,
    raw_id: Option<&str>,
) -> axum::response::Response {
    tracing::debug!(error = %err, path, "request rejected");

    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg, path)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg, path),
        DomainError::InsufficientStock { .. } => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_stock",
            "not enough items in stock to fulfill purchase",
            path,
        ),
        DomainError::NotFound => not_found(raw_id, path),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg, path)
        }
    }
}

pub fn body_rejection_to_response(rejection: BodyRejection, path: &str) -> axum::response::Response {
    tracing::debug!(error = %rejection, path, "malformed request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.to_string(), path)
}

pub fn not_found(raw_id: Option<&str>, path: &str) -> axum::response::Response {
    let status = StatusCode::NOT_FOUND;
    let message = match raw_id {
        Some(id) => format!("flavor with ID {id} not found"),
        None => "flavor not found".to_string(),
    };
    (
        status,
        axum::Json(json!({
            "error": "not_found",
            "status": status.canonical_reason().unwrap_or_default(),
            "statusCode": status.as_u16(),
            "message": message,
            "help": NOT_FOUND_HELP,
            "path": path,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    path: &str,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "status": status.canonical_reason().unwrap_or_default(),
            "statusCode": status.as_u16(),
            "message": message.into(),
            "path": path,
        })),
    )
        .into_response()
}
