/* src/server/adapter/axum/src/error.rs */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use ssr_router::RouteError;

/// Per-request failure rendered as the JSON error envelope, with the
/// `RouteError` status as the HTTP status.
pub(crate) struct AxumError(pub RouteError);

/// JSON error envelope; `transient` is always false for route failures.
fn envelope(err: &RouteError) -> Value {
  json!({
    "ok": false,
    "error": { "code": err.code(), "message": err.message(), "transient": false }
  })
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope(&self.0))).into_response()
  }
}

impl From<RouteError> for AxumError {
  fn from(err: RouteError) -> Self {
    Self(err)
  }
}
