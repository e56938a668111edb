/* src/server/core/rust/src/pattern/mod.rs */

// Turns segmented route descriptions into route templates, path generators
// and anchored matching patterns.

mod escape;
mod generator;

pub use escape::escape_literal;
pub use generator::{PathGenerator, TemplateError};

use crate::route::{RouteSegment, TrailingSlash};

/// Check that a catch-all only appears as the final part of the final segment.
pub fn spread_is_last(segments: &[RouteSegment]) -> bool {
  let last_segment = segments.len().saturating_sub(1);
  segments.iter().enumerate().all(|(si, segment)| {
    let last_part = segment.len().saturating_sub(1);
    segment.iter().enumerate().all(|(pi, part)| !part.spread || (si == last_segment && pi == last_part))
  })
}

/// Display template for a route, e.g. `/blog/:slug`.
pub fn route_template(segments: &[RouteSegment], trailing_slash: TrailingSlash) -> String {
  let mut template: String = segments
    .iter()
    .map(|segment| {
      let body: String = segment
        .iter()
        .map(|part| {
          if part.spread {
            format!(":{}(.*)?", part.param_name())
          } else if part.dynamic {
            format!(":{}", part.content)
          } else {
            escape_literal(&part.content)
          }
        })
        .collect();
      format!("/{body}")
    })
    .collect();

  if trailing_slash == TrailingSlash::Always && !segments.is_empty() {
    template.push('/');
  }
  template
}

/// Compile a generator for the given segments.
pub fn route_generator(
  segments: &[RouteSegment],
  trailing_slash: TrailingSlash,
) -> Result<PathGenerator, TemplateError> {
  PathGenerator::new(segments, trailing_slash)
}

/// Anchored regex source for segments that were serialized without one.
pub fn compile_pattern(segments: &[RouteSegment], base: &str, trailing_slash: TrailingSlash) -> String {
  let pathname: String = segments
    .iter()
    .map(|segment| {
      if let [part] = segment.as_slice()
        && part.spread
      {
        return r"(?:\/(.*?))?".to_string();
      }
      let body: String = segment
        .iter()
        .map(|part| {
          if part.spread {
            "(.*?)".to_string()
          } else if part.dynamic {
            "([^/]+?)".to_string()
          } else {
            escape_literal(&part.content)
          }
        })
        .collect();
      format!(r"\/{body}")
    })
    .collect();

  let trailing = if segments.is_empty() {
    "$"
  } else {
    match trailing_slash {
      TrailingSlash::Always => r"\/$",
      TrailingSlash::Never => "$",
      TrailingSlash::Ignore => r"\/?$",
    }
  };

  let initial = if trailing_slash == TrailingSlash::Never && base != "/" { "" } else { r"\/" };
  let pathname = if pathname.is_empty() { initial.to_string() } else { pathname };
  format!("^{pathname}{trailing}")
}
