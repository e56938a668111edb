/* src/server/core/rust/src/server.rs */

use std::collections::HashMap;
use std::sync::Arc;

use crate::dispatch::render_with_fallbacks;
use crate::errors::RouteError;
use crate::manifest::Manifest;
use crate::page::{PageHandler, PageResponse};

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Page(PageResponse),
  Redirect { location: String, status: u16 },
}

/// Framework-agnostic parts extracted from `SsrApp`.
/// Adapter crates consume this to build framework-specific routers.
#[derive(Clone)]
pub struct SsrParts {
  pub manifest: Arc<Manifest>,
  pub handlers: Arc<HashMap<String, PageHandler>>,
}

impl SsrParts {
  /// Match `pathname`, then either resolve a redirect or render through the
  /// fallback chain. Unmatched paths become a 404 `RouteError`.
  pub async fn handle(&self, pathname: &str, method: &str) -> Result<Outcome, RouteError> {
    let matched = self
      .manifest
      .match_request(pathname)
      .ok_or_else(|| RouteError::not_found(format!("no route matches '{pathname}'")))?;

    if let Some(redirect) = &matched.redirect {
      let status = redirect.status_for(method);
      tracing::debug!(pathname, location = %redirect.location, status, "redirecting");
      return Ok(Outcome::Redirect { location: redirect.location.clone(), status });
    }

    let response = render_with_fallbacks(&self.handlers, &matched, pathname, method).await?;
    Ok(Outcome::Page(response))
  }
}

pub struct SsrApp {
  manifest: Arc<Manifest>,
  handlers: HashMap<String, PageHandler>,
}

impl SsrApp {
  pub fn new(manifest: impl Into<Arc<Manifest>>) -> Self {
    Self { manifest: manifest.into(), handlers: HashMap::new() }
  }

  /// Register the handler that renders `component` (the manifest's component id).
  pub fn page(mut self, component: impl Into<String>, handler: PageHandler) -> Self {
    let component = component.into();
    if !self.manifest.route_data().any(|r| r.uses_component(&component)) {
      tracing::warn!(component = %component, "handler registered for a component no route uses");
    }
    self.handlers.insert(component, handler);
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> SsrParts {
    SsrParts { manifest: self.manifest, handlers: Arc::new(self.handlers) }
  }
}
