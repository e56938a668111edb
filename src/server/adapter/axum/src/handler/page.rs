/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use ssr_router::{Outcome, PageResponse, RouteError};

use super::AppState;
use crate::error::AxumError;

/// Convert a handler's page response into an HTTP response.
fn page_into_response(page: PageResponse) -> Response {
  let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
  let mut response = (status, page.body).into_response();
  let headers = response.headers_mut();

  match HeaderValue::from_str(&page.content_type) {
    Ok(v) => {
      headers.insert(CONTENT_TYPE, v);
    }
    Err(_) => tracing::warn!(content_type = %page.content_type, "dropping invalid content type"),
  }
  for (name, value) in &page.headers {
    match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
      (Ok(n), Ok(v)) => {
        headers.append(n, v);
      }
      _ => tracing::warn!(header = %name, "dropping invalid response header"),
    }
  }
  response
}

fn redirect_response(location: &str, status: u16) -> Result<Response, RouteError> {
  let status = StatusCode::from_u16(status)
    .map_err(|_| RouteError::internal(format!("invalid redirect status {status}")))?;
  let location = HeaderValue::from_str(location)
    .map_err(|_| RouteError::internal(format!("invalid redirect location '{location}'")))?;
  Ok((status, [(LOCATION, location)]).into_response())
}

pub(super) async fn handle_request(
  State(state): State<Arc<AppState>>,
  method: Method,
  uri: Uri,
) -> Result<Response, AxumError> {
  let pathname = uri.path();
  let outcome = state.parts.handle(pathname, method.as_str()).await?;

  let response = match outcome {
    Outcome::Page(page) => page_into_response(page),
    Outcome::Redirect { location, status } => redirect_response(&location, status)?,
  };
  tracing::debug!(%method, pathname, status = response.status().as_u16(), "request handled");
  Ok(response)
}
