//! Request extractors
//!
//! Wrappers around Axum's `Json` and `Path` extractors whose rejections are
//! `BackendError::BadRequest`, so a malformed body or path id produces the
//! same `{"message": "Bad request"}` response as a missing field.
//!
//! Rejections are logged by kind only. serde's error text echoes the
//! offending value, which may be a password.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, OptionalFromRequest, Request};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);

/// `Option<JsonBody<T>>` is `None` when the request has no `Content-Type`
impl<T, S> OptionalFromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let body = <axum::Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?;
        Ok(body.map(|axum::Json(value)| JsonBody(value)))
    }
}

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct PathParam<T>(pub T);

fn json_rejection_kind(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "body does not match the expected shape",
        JsonRejection::JsonSyntaxError(_) => "body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => "missing JSON content type",
        JsonRejection::BytesRejection(_) => "body could not be read",
        _ => "unreadable body",
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(
            status = %rejection.status(),
            "Rejected request body: {}",
            json_rejection_kind(&rejection)
        );
        BackendError::bad_request()
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(status = %rejection.status(), "Rejected path parameter");
        BackendError::bad_request()
    }
}

/// Treat absent and empty strings alike
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
