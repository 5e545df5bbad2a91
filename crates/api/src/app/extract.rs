//! Request body extraction shared by the write endpoints.

use axum::{
    async_trait,
    body::Body,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Bodies above this size are refused (same as axum's default limit).
const BODY_LIMIT: usize = 2 * 1024 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A JSON or form-encoded request body.
///
/// An empty body yields `T::default()`, so missing fields surface as
/// validation errors instead of content-type errors.
#[derive(Debug, Clone, Default)]
pub struct RequestBody<T>(pub T);

#[derive(Debug, Error)]
pub enum BodyRejection {
    #[error("failed to read request body: {0}")]
    Read(String),

    #[error("{}", .0.body_text())]
    Json(JsonRejection),

    #[error("{}", .0.body_text())]
    Form(FormRejection),
}

#[async_trait]
impl<S, T> FromRequest<S> for RequestBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| BodyRejection::Read(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let is_form = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE));

        let req = Request::from_parts(parts, Body::from(bytes));
        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Form)?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(BodyRejection::Json)?;
            Ok(Self(value))
        }
    }
}

// Required by `FromRequest::Rejection`; handlers take `Result<RequestBody<_>, BodyRejection>`
// and render with the request path themselves, so this is only a fallback.
impl axum::response::IntoResponse for BodyRejection {
    fn into_response(self) -> axum::response::Response {
        crate::app::errors::body_rejection_to_response(self, "")
    }
}
