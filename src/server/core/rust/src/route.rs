/* src/server/core/rust/src/route.rs */

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pattern::{PathGenerator, TemplateError};

/// Named values captured from a request path. Absent catch-alls are not present.
pub type Params = BTreeMap<String, String>;

/// One piece of a path segment: literal text, `[name]` or `[...name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePart {
  pub content: String,
  pub dynamic: bool,
  #[serde(default)]
  pub spread: bool,
}

impl RoutePart {
  pub fn literal(content: impl Into<String>) -> Self {
    Self { content: content.into(), dynamic: false, spread: false }
  }

  pub fn dynamic(name: impl Into<String>) -> Self {
    Self { content: name.into(), dynamic: true, spread: false }
  }

  /// `name` without the leading `...`.
  pub fn spread(name: &str) -> Self {
    Self { content: format!("...{name}"), dynamic: true, spread: true }
  }

  /// Parameter name with any `...` prefix stripped.
  pub fn param_name(&self) -> &str {
    if self.spread { self.content.strip_prefix("...").unwrap_or(&self.content) } else { &self.content }
  }
}

pub type RouteSegment = Vec<RoutePart>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
  Page,
  Endpoint,
  Redirect,
  Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
  Always,
  Never,
  #[default]
  Ignore,
}

/// Redirect target as written in the site config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RedirectConfig {
  Destination(String),
  WithStatus { status: u16, destination: String },
}

impl RedirectConfig {
  pub fn destination(&self) -> &str {
    match self {
      Self::Destination(d) | Self::WithStatus { destination: d, .. } => d,
    }
  }

  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Destination(_) => None,
      Self::WithStatus { status, .. } => Some(*status),
    }
  }
}

/// A fully deserialized route: compiled pattern, path generator and nested
/// redirect/fallback routes. Nesting is a tree; children never point back.
#[derive(Debug, Clone)]
pub struct RouteData {
  pub route: String,
  pub route_type: RouteType,
  pub pattern: Regex,
  /// Capture names in group order; catch-alls keep their `...` prefix.
  pub params: Vec<String>,
  pub component: String,
  pub pathname: Option<String>,
  pub prerender: bool,
  pub is_index: bool,
  pub redirect: Option<RedirectConfig>,
  pub redirect_route: Option<Box<RouteData>>,
  pub fallback_routes: Vec<RouteData>,
  pub trailing_slash: TrailingSlash,
  pub segments: Vec<RouteSegment>,
  pub generator: PathGenerator,
}

impl RouteData {
  /// Build a concrete path from parameter values.
  pub fn generate(&self, params: &Params) -> Result<String, TemplateError> {
    self.generator.generate(params)
  }

  /// Whether this route or any nested redirect/fallback route renders `component`.
  pub fn uses_component(&self, component: &str) -> bool {
    self.component == component
      || self.fallback_routes.iter().any(|r| r.uses_component(component))
      || self.redirect_route.as_deref().is_some_and(|r| r.uses_component(component))
  }

  /// Test `path` against this route's pattern and collect named captures.
  pub fn captures(&self, path: &str) -> Option<Params> {
    let caps = self.pattern.captures(path)?;
    let mut out = Params::new();
    for (i, key) in self.params.iter().enumerate() {
      let value = caps.get(i + 1).map(|m| m.as_str());
      if let Some(name) = key.strip_prefix("...") {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
          out.insert(name.to_string(), v.to_string());
        }
      } else if let Some(v) = value {
        out.insert(key.clone(), v.to_string());
      }
    }
    Some(out)
  }
}
