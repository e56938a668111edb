/* src/server/core/rust/src/errors.rs */

use std::fmt;

use crate::pattern::TemplateError;

/// Per-request failure surfaced to whoever invoked matching or dispatch.
#[derive(Debug, Clone)]
pub struct RouteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "BAD_REQUEST" => 400,
    "NOT_FOUND" => 404,
    "METHOD_NOT_ALLOWED" => 405,
    "RENDER_FAILED" | "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl RouteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  /// Every handler in a route's fallback chain failed.
  pub fn render_failed(msg: impl Into<String>) -> Self {
    Self::with_code("RENDER_FAILED", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for RouteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for RouteError {}

/// Fatal errors raised while turning a serialized manifest into a [`crate::Manifest`].
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  #[error("failed to read manifest: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed manifest: {0}")]
  Json(#[from] serde_json::Error),

  #[error("route `{route}` has an invalid pattern: {source}")]
  Pattern {
    route: String,
    #[source]
    source: regex::Error,
  },

  #[error("route `{route}` has a spread parameter that is not the last part of the last segment")]
  SpreadNotLast { route: String },

  #[error("route `{route}` has an invalid template: {source}")]
  Template {
    route: String,
    #[source]
    source: TemplateError,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("BAD_REQUEST"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("METHOD_NOT_ALLOWED"), 405);
    assert_eq!(default_status("RENDER_FAILED"), 500);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn new_explicit_status() {
    let err = RouteError::new("GONE", "moved away", 410);
    assert_eq!(err.code(), "GONE");
    assert_eq!(err.message(), "moved away");
    assert_eq!(err.status(), 410);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(RouteError::not_found("x").status(), 404);
    assert_eq!(RouteError::internal("x").status(), 500);
    assert_eq!(RouteError::render_failed("x").status(), 500);
  }

  #[test]
  fn display_format() {
    let err = RouteError::not_found("missing");
    assert_eq!(err.to_string(), "NOT_FOUND: missing");
  }

  #[test]
  fn manifest_error_names_route() {
    let err = ManifestError::SpreadNotLast { route: "/[...a]/b".to_string() };
    assert!(err.to_string().contains("/[...a]/b"));
  }
}
