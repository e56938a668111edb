/* src/server/core/rust/src/page.rs */

use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::errors::RouteError;
use crate::route::Params;

/// Request data handed to a page handler.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
  pub pathname: String,
  pub method: String,
  /// Route string of the route being rendered (the fallback's own, when retrying).
  pub route: String,
  pub component: String,
  pub params: Params,
}

/// Output of a page handler. Rendering itself happens outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
  pub status: u16,
  pub content_type: String,
  pub headers: Vec<(String, String)>,
  pub body: String,
}

impl PageResponse {
  pub fn html(body: impl Into<String>) -> Self {
    Self {
      status: 200,
      content_type: "text/html; charset=utf-8".to_string(),
      headers: Vec::new(),
      body: body.into(),
    }
  }

  pub fn json(value: &serde_json::Value) -> Self {
    Self {
      status: 200,
      content_type: "application/json".to_string(),
      headers: Vec::new(),
      body: value.to_string(),
    }
  }

  pub fn with_status(mut self, status: u16) -> Self {
    self.status = status;
    self
  }

  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.push((name.into(), value.into()));
    self
  }
}

pub type PageHandler =
  Arc<dyn Fn(RenderContext) -> BoxFuture<'static, Result<PageResponse, RouteError>> + Send + Sync>;

/// Wrap an async function as a [`PageHandler`].
pub fn page_handler<F, Fut>(f: F) -> PageHandler
where
  F: Fn(RenderContext) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<PageResponse, RouteError>> + Send + 'static,
{
  Arc::new(move |ctx| f(ctx).boxed())
}
