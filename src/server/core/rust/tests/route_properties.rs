/* src/server/core/rust/tests/route_properties.rs */

// Property checks for pattern compilation, generation and matching over
// manifests built the same way the site build serializes them.

use proptest::prelude::*;
use serde_json::json;
use ssr_router::{Manifest, Params, RoutePart, RouteSegment};

fn manifest_for(routes: &[(&str, Vec<RouteSegment>)], trailing_slash: &str) -> Manifest {
  let routes: Vec<_> = routes
    .iter()
    .map(|(name, segments)| {
      let params: Vec<String> = segments
        .iter()
        .flatten()
        .filter(|p| p.dynamic)
        .map(|p| p.content.clone())
        .collect();
      json!({
        "routeData": {
          "route": name,
          "type": "page",
          "params": params,
          "component": format!("src/pages{name}.astro"),
          "segments": segments,
        }
      })
    })
    .collect();

  Manifest::from_value(json!({
    "routes": routes,
    "base": "/",
    "trailingSlash": trailing_slash,
    "assets": [],
  }))
  .expect("manifest")
}

fn literal_text() -> impl Strategy<Value = String> {
  "[a-z0-9.+*()$^|{}~_-]{1,8}"
}

/// Parameter names as a route file may spell them, hyphens and accents included.
fn param_name() -> impl Strategy<Value = String> {
  "[a-zé][a-z0-9é_-]{0,7}"
}

fn segment_value() -> impl Strategy<Value = String> {
  "[A-Za-z0-9_-]{1,12}"
}

proptest! {
  #[test]
  fn literal_routes_match_only_themselves(
    literals in prop::collection::vec(literal_text(), 1..4),
    extra in "[a-z]",
  ) {
    let segments: Vec<RouteSegment> =
      literals.iter().map(|l| vec![RoutePart::literal(l.as_str())]).collect();
    let manifest = manifest_for(&[("/literal", segments)], "never");
    let path = format!("/{}", literals.join("/"));

    prop_assert!(manifest.match_request(&path).is_some());
    let appended = format!("{path}{extra}");
    prop_assert!(manifest.match_request(&appended).is_none());
    let nested = format!("{path}/{extra}");
    prop_assert!(manifest.match_request(&nested).is_none());
  }

  #[test]
  fn dynamic_part_captures_one_segment(prefix in "[a-z]{1,6}", value in segment_value()) {
    let segments = vec![vec![RoutePart::literal(prefix.as_str())], vec![RoutePart::dynamic("id")]];
    let manifest = manifest_for(&[("/item", segments)], "ignore");

    let matched = manifest.match_request(&format!("/{prefix}/{value}"));
    prop_assert!(matched.is_some());
    let matched = matched.unwrap();
    prop_assert_eq!(matched.params.get("id"), Some(&value));
    let deeper = format!("/{prefix}/{value}/more");
    prop_assert!(manifest.match_request(&deeper).is_none());
  }

  #[test]
  fn trailing_spread_takes_zero_or_more_segments(
    rest in prop::collection::vec(segment_value(), 0..5),
  ) {
    let segments = vec![vec![RoutePart::literal("docs")], vec![RoutePart::spread("path")]];
    let manifest = manifest_for(&[("/docs", segments)], "ignore");

    let path =
      if rest.is_empty() { "/docs".to_string() } else { format!("/docs/{}", rest.join("/")) };
    let matched = manifest.match_request(&path);
    prop_assert!(matched.is_some());
    let matched = matched.unwrap();
    if rest.is_empty() {
      prop_assert!(!matched.params.contains_key("path"));
    } else {
      prop_assert_eq!(matched.params.get("path"), Some(&rest.join("/")));
    }
  }

  #[test]
  fn generated_paths_match_their_route(
    slug_name in param_name(),
    owner_name in param_name(),
    rest_name in param_name(),
    slug in segment_value(),
    rest in prop::collection::vec(segment_value(), 0..3),
    trailing in prop::sample::select(vec!["always", "never", "ignore"]),
  ) {
    prop_assume!(owner_name != rest_name);
    let manifest = manifest_for(
      &[
        (
          "/blog",
          vec![vec![RoutePart::literal("blog")], vec![RoutePart::dynamic(slug_name.as_str())]],
        ),
        (
          "/files",
          vec![
            vec![RoutePart::literal("files")],
            vec![RoutePart::dynamic(owner_name.as_str())],
            vec![RoutePart::spread(&rest_name)],
          ],
        ),
      ],
      trailing,
    );

    let mut params = Params::new();
    params.insert(slug_name, slug.clone());
    let blog = &manifest.routes[0].route_data;
    let path = blog.generate(&params).unwrap();
    let matched = manifest.match_request(&path);
    prop_assert!(matched.is_some());
    let matched = matched.unwrap();
    prop_assert_eq!(matched.route.route.as_str(), "/blog");
    prop_assert_eq!(matched.params, params);

    let mut params = Params::new();
    params.insert(owner_name, slug);
    if !rest.is_empty() {
      params.insert(rest_name, rest.join("/"));
    }
    let files = &manifest.routes[1].route_data;
    let path = files.generate(&params).unwrap();
    let matched = manifest.match_request(&path);
    prop_assert!(matched.is_some());
    let matched = matched.unwrap();
    prop_assert_eq!(matched.route.route.as_str(), "/files");
    prop_assert_eq!(matched.params, params);
  }

  #[test]
  fn earlier_declaration_wins(value in segment_value()) {
    let specific = vec![vec![RoutePart::literal("p")], vec![RoutePart::dynamic("a")]];
    let general = vec![vec![RoutePart::spread("all")]];

    let manifest = manifest_for(&[("/specific", specific.clone()), ("/general", general.clone())], "ignore");
    let hit = manifest.match_request(&format!("/p/{value}")).map(|m| m.route.route.clone());
    prop_assert_eq!(hit, Some("/specific".to_string()));

    let manifest = manifest_for(&[("/general", general), ("/specific", specific)], "ignore");
    let hit = manifest.match_request(&format!("/p/{value}")).map(|m| m.route.route.clone());
    prop_assert_eq!(hit, Some("/general".to_string()));
  }
}

#[test]
fn escaped_literal_is_not_a_pattern() {
  let manifest = manifest_for(&[("/lit", vec![vec![RoutePart::literal("a.b+c")]])], "ignore");
  assert!(manifest.match_request("/a.b+c").is_some());
  assert!(manifest.match_request("/aXb+c").is_none());
  assert!(manifest.match_request("/a.bbc").is_none());
  assert!(manifest.match_request("/a.bbbc").is_none());
}

#[test]
fn blog_slug_example() {
  let segments = vec![vec![RoutePart::literal("blog")], vec![RoutePart::dynamic("slug")]];
  let manifest = manifest_for(&[("/blog/[slug]", segments)], "ignore");
  let route = &manifest.routes[0].route_data;
  assert_eq!(route.pattern.as_str(), r"^\/blog\/([^/]+?)\/?$");

  let matched = manifest.match_request("/blog/hello").unwrap();
  assert_eq!(matched.params["slug"], "hello");
  assert!(manifest.match_request("/blog/").is_none());
}

#[test]
fn catch_all_example() {
  let manifest = manifest_for(&[("/[...ssr]", vec![vec![RoutePart::spread("ssr")]])], "ignore");
  for path in ["/", "/anything", "/a/b/c"] {
    assert!(manifest.match_request(path).is_some(), "{path} should match");
  }
}
