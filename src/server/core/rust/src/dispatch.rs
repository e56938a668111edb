/* src/server/core/rust/src/dispatch.rs */

use std::collections::HashMap;

use crate::errors::RouteError;
use crate::matcher::RouteMatch;
use crate::page::{PageHandler, PageResponse, RenderContext};
use crate::route::RouteData;

/// Render a matched route, walking its fallback chain when a handler fails.
///
/// The primary route is tried first, then each fallback in declaration
/// order with the same params. A component without a registered handler
/// counts as a failure. There are no retries beyond the chain.
pub async fn render_with_fallbacks(
  handlers: &HashMap<String, PageHandler>,
  matched: &RouteMatch<'_>,
  pathname: &str,
  method: &str,
) -> Result<PageResponse, RouteError> {
  let chain = std::iter::once(matched.route).chain(matched.route.fallback_routes.iter());
  let mut attempts = 0usize;
  let mut last_error = None;

  for route in chain {
    attempts += 1;
    match render_one(handlers, route, matched, pathname, method).await {
      Ok(response) => return Ok(response),
      Err(err) => {
        tracing::warn!(
          route = %route.route,
          component = %route.component,
          error = %err,
          "page handler failed"
        );
        last_error = Some(err);
      }
    }
  }

  let reason = last_error.map(|e| e.message().to_string()).unwrap_or_default();
  tracing::error!(route = %matched.route.route, attempts, "fallback chain exhausted");
  Err(RouteError::render_failed(format!(
    "route '{}' failed after {attempts} attempt(s): {reason}",
    matched.route.route
  )))
}

async fn render_one(
  handlers: &HashMap<String, PageHandler>,
  route: &RouteData,
  matched: &RouteMatch<'_>,
  pathname: &str,
  method: &str,
) -> Result<PageResponse, RouteError> {
  let handler = handlers.get(&route.component).ok_or_else(|| {
    RouteError::internal(format!("no handler registered for component '{}'", route.component))
  })?;
  let ctx = RenderContext {
    pathname: pathname.to_string(),
    method: method.to_string(),
    route: route.route.clone(),
    component: route.component.clone(),
    params: matched.params.clone(),
  };
  handler(ctx).await
}
