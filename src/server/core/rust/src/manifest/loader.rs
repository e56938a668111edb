/* src/server/core/rust/src/manifest/loader.rs */

use std::collections::{HashMap, HashSet};
use std::path::Path;

use regex::Regex;

use super::types::{SerializedManifest, SerializedRouteData};
use super::{Manifest, ManifestRoute};
use crate::errors::ManifestError;
use crate::pattern::{compile_pattern, route_generator, spread_is_last};
use crate::route::{RouteData, TrailingSlash};

/// Rebuild one route, recursing into its redirect target and fallbacks.
pub(super) fn deserialize_route_data(
  raw: SerializedRouteData,
  base: &str,
  default_trailing_slash: TrailingSlash,
) -> Result<RouteData, ManifestError> {
  if !spread_is_last(&raw.segments) {
    return Err(ManifestError::SpreadNotLast { route: raw.route });
  }

  let trailing_slash = raw.meta.trailing_slash.unwrap_or(default_trailing_slash);
  let source =
    raw.pattern.unwrap_or_else(|| compile_pattern(&raw.segments, base, trailing_slash));
  let pattern = match Regex::new(&source) {
    Ok(re) => re,
    Err(source) => return Err(ManifestError::Pattern { route: raw.route, source }),
  };
  let generator = match route_generator(&raw.segments, trailing_slash) {
    Ok(g) => g,
    Err(source) => return Err(ManifestError::Template { route: raw.route, source }),
  };

  let redirect_route = match raw.redirect_route {
    Some(inner) => Some(Box::new(deserialize_route_data(*inner, base, trailing_slash)?)),
    None => None,
  };
  let fallback_routes = raw
    .fallback_routes
    .into_iter()
    .map(|fallback| deserialize_route_data(fallback, base, trailing_slash))
    .collect::<Result<Vec<_>, _>>()?;

  Ok(RouteData {
    route: raw.route,
    route_type: raw.route_type,
    pattern,
    params: raw.params,
    component: raw.component,
    pathname: raw.pathname.filter(|p| !p.is_empty()),
    prerender: raw.prerender,
    is_index: raw.is_index,
    redirect: raw.redirect,
    redirect_route,
    fallback_routes,
    trailing_slash,
    segments: raw.segments,
    generator,
  })
}

/// Turn the build's serialized snapshot into the immutable runtime manifest.
pub fn deserialize_manifest(raw: SerializedManifest) -> Result<Manifest, ManifestError> {
  let mut routes = Vec::with_capacity(raw.routes.len());
  for info in raw.routes {
    let route_data = deserialize_route_data(info.route_data, &raw.base, raw.trailing_slash)?;
    routes.push(ManifestRoute {
      file: info.file,
      links: info.links,
      scripts: info.scripts,
      styles: info.styles,
      route_data,
    });
  }

  let assets: HashSet<String> = raw.assets.into_iter().collect();
  let component_metadata: HashMap<_, _> = raw.component_metadata.into_iter().collect();
  let client_directives: HashMap<_, _> = raw.client_directives.into_iter().collect();

  tracing::info!(
    adapter = %raw.adapter_name,
    routes = routes.len(),
    assets = assets.len(),
    "manifest loaded"
  );

  Ok(Manifest {
    adapter_name: raw.adapter_name,
    routes,
    base: raw.base,
    trailing_slash: raw.trailing_slash,
    compress_html: raw.compress_html,
    component_metadata,
    renderers: raw.renderers,
    client_directives,
    entry_modules: raw.entry_modules,
    assets,
    build_format: raw.build_format,
  })
}

/// Read and deserialize a manifest JSON file from disk.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
  let content = std::fs::read_to_string(path.as_ref())?;
  Manifest::from_json(&content)
}
