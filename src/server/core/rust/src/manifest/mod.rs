/* src/server/core/rust/src/manifest/mod.rs */

// Runtime view of the build manifest: deserialized once at startup,
// read-only afterwards and shared across requests.

mod loader;
mod types;


use std::collections::{HashMap, HashSet};

pub use loader::{deserialize_manifest, load_manifest};
pub use types::{
  BuildFormat, ComponentMetadata, Propagation, RouteMeta, ScriptAsset, SerializedManifest,
  SerializedRouteData, SerializedRouteInfo, StyleAsset,
};

use crate::errors::ManifestError;
use crate::matcher::{RouteMatch, decode_uri, match_route};
use crate::route::{RouteData, TrailingSlash};

/// One route entry with the assets the page pulls in.
#[derive(Debug, Clone)]
pub struct ManifestRoute {
  pub file: String,
  pub links: Vec<String>,
  pub scripts: Vec<ScriptAsset>,
  pub styles: Vec<StyleAsset>,
  pub route_data: RouteData,
}

#[derive(Debug, Clone)]
pub struct Manifest {
  pub adapter_name: String,
  /// Declaration order is matching priority.
  pub routes: Vec<ManifestRoute>,
  pub base: String,
  pub trailing_slash: TrailingSlash,
  pub compress_html: bool,
  pub component_metadata: HashMap<String, ComponentMetadata>,
  pub renderers: Vec<serde_json::Value>,
  /// Directive name -> activation script source.
  pub client_directives: HashMap<String, String>,
  pub entry_modules: HashMap<String, String>,
  pub assets: HashSet<String>,
  pub build_format: BuildFormat,
}

impl Manifest {
  pub fn from_json(content: &str) -> Result<Self, ManifestError> {
    let raw: SerializedManifest = serde_json::from_str(content)?;
    deserialize_manifest(raw)
  }

  pub fn from_value(value: serde_json::Value) -> Result<Self, ManifestError> {
    let raw: SerializedManifest = serde_json::from_value(value)?;
    deserialize_manifest(raw)
  }

  pub fn route_data(&self) -> impl Iterator<Item = &RouteData> {
    self.routes.iter().map(|r| &r.route_data)
  }

  pub fn is_asset(&self, pathname: &str) -> bool {
    self.assets.contains(pathname)
  }

  /// Strip the configured base from a request pathname, keeping a leading `/`.
  pub fn remove_base<'a>(&self, pathname: &'a str) -> &'a str {
    let base = self.base.trim_end_matches('/');
    if base.is_empty() {
      return pathname;
    }
    match pathname.strip_prefix(base) {
      Some("") => "/",
      Some(rest) if rest.starts_with('/') => rest,
      _ => pathname,
    }
  }

  /// Match a raw request pathname against the manifest's routes.
  ///
  /// Static assets and prerendered pages resolve to `None`: the host serves
  /// those files directly.
  pub fn match_request(&self, pathname: &str) -> Option<RouteMatch<'_>> {
    if self.is_asset(pathname) {
      tracing::debug!(pathname, "request targets a static asset");
      return None;
    }

    let stripped = self.remove_base(pathname);
    let path =
      if stripped.starts_with('/') { stripped.to_string() } else { format!("/{stripped}") };
    let decoded = decode_uri(&path);

    let Some(matched) = match_route(&decoded, self.route_data()) else {
      tracing::debug!(pathname, "no route matched");
      return None;
    };
    if matched.route.prerender {
      tracing::debug!(pathname, route = %matched.route.route, "route is prerendered");
      return None;
    }
    Some(matched)
  }
}
