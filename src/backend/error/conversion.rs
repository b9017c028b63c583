/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Program full",
 *   "error": "ProgramFull",
 *   "status": 400
 * }
 * ```
 *
 * `message` is what the client shows in its notification banner.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::ErrorBody;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            message: self.message(),
            error: Some(self.kind().to_string()),
            status: Some(status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}
