/* src/server/core/rust/src/lib.rs */

pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod manifest;
pub mod matcher;
pub mod page;
pub mod pattern;
pub mod route;
pub mod server;

// Re-exports for ergonomic use
pub use dispatch::render_with_fallbacks;
pub use errors::{ManifestError, RouteError};
pub use manifest::{Manifest, ManifestRoute, deserialize_manifest, load_manifest};
pub use matcher::{Redirect, RouteMatch, decode_uri, match_route};
pub use page::{PageHandler, PageResponse, RenderContext, page_handler};
pub use pattern::{PathGenerator, TemplateError, compile_pattern, escape_literal, route_template};
pub use route::{Params, RedirectConfig, RouteData, RoutePart, RouteSegment, RouteType, TrailingSlash};
pub use server::{Outcome, SsrApp, SsrParts};
