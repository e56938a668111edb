/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use ssr_router::{SsrApp, SsrParts};

/// Re-export ssr-router core for convenience
pub use ssr_router;

/// Extension trait that converts an `SsrApp` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SsrParts {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    // honours --verbose / --silent unless the embedder already installed a subscriber
    ssr_router::logging::init_from_env_args();
    let routes = self.manifest.routes.len();
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, routes, "ssr entry listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}

impl IntoAxumRouter for SsrApp {
  fn into_axum_router(self) -> axum::Router {
    self.into_parts().into_axum_router()
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    self.into_parts().serve(addr).await
  }
}
