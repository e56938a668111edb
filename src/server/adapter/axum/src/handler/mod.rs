/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::sync::Arc;

use axum::Router;
use ssr_router::SsrParts;

pub(crate) struct AppState {
  pub parts: SsrParts,
}

/// Every request goes through the manifest matcher, so the whole app is a
/// single fallback handler. Static assets are left to the host.
pub(crate) fn build_router(parts: SsrParts) -> Router {
  let state = Arc::new(AppState { parts });
  Router::new().fallback(page::handle_request).with_state(state)
}
