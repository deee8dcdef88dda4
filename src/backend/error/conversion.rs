/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Bad request" }
 * ```
 *
 * Unclassified failures are logged before being reported as 500 with their
 * raw message.
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if !self.is_classified() {
            tracing::error!(error = ?self, "Request failed: {}", message);
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}
