/* src/server/core/rust/src/manifest/types.rs */

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::route::{RedirectConfig, RouteSegment, RouteType, TrailingSlash};

/// Manifest as emitted by the site build. Field names follow the JSON output.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedManifest {
  #[serde(default)]
  pub adapter_name: String,
  pub routes: Vec<SerializedRouteInfo>,
  pub base: String,
  pub trailing_slash: TrailingSlash,
  #[serde(default, rename = "compressHTML")]
  pub compress_html: bool,
  #[serde(default)]
  pub component_metadata: Vec<(String, ComponentMetadata)>,
  #[serde(default)]
  pub renderers: Vec<serde_json::Value>,
  #[serde(default)]
  pub client_directives: Vec<(String, String)>,
  #[serde(default)]
  pub entry_modules: HashMap<String, String>,
  pub assets: Vec<String>,
  #[serde(default)]
  pub build_format: BuildFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedRouteInfo {
  #[serde(default)]
  pub file: String,
  #[serde(default)]
  pub links: Vec<String>,
  #[serde(default)]
  pub scripts: Vec<ScriptAsset>,
  #[serde(default)]
  pub styles: Vec<StyleAsset>,
  pub route_data: SerializedRouteData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedRouteData {
  pub route: String,
  #[serde(rename = "type")]
  pub route_type: RouteType,
  /// Regex source; compiled from `segments` when absent.
  #[serde(default)]
  pub pattern: Option<String>,
  pub params: Vec<String>,
  pub component: String,
  #[serde(default)]
  pub pathname: Option<String>,
  pub segments: Vec<RouteSegment>,
  #[serde(default)]
  pub prerender: bool,
  #[serde(default)]
  pub is_index: bool,
  #[serde(default)]
  pub redirect: Option<RedirectConfig>,
  #[serde(default)]
  pub redirect_route: Option<Box<SerializedRouteData>>,
  #[serde(default)]
  pub fallback_routes: Vec<SerializedRouteData>,
  #[serde(default, rename = "_meta")]
  pub meta: RouteMeta,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
  #[serde(default)]
  pub trailing_slash: Option<TrailingSlash>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFormat {
  #[default]
  Directory,
  File,
  Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Propagation {
  #[default]
  None,
  #[serde(rename = "self")]
  SelfOnly,
  InTree,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
  #[serde(default)]
  pub propagation: Propagation,
  #[serde(default)]
  pub contains_head: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleAsset {
  Inline { content: String },
  External { src: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptAsset {
  Inline { value: String },
  External { value: String },
}
