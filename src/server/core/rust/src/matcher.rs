/* src/server/core/rust/src/matcher.rs */

use std::borrow::Cow;

use crate::route::{Params, RedirectConfig, RouteData, RouteType};

/// Resolved target of a redirect route.
#[derive(Debug, Clone)]
pub struct Redirect<'a> {
  pub location: String,
  /// Explicit status from the redirect config, if any.
  pub status: Option<u16>,
  pub target: Option<&'a RouteData>,
}

impl Redirect<'_> {
  /// Configured status, else 301 for GET and 308 for everything else.
  pub fn status_for(&self, method: &str) -> u16 {
    self.status.unwrap_or(if method.eq_ignore_ascii_case("GET") { 301 } else { 308 })
  }
}

#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
  pub route: &'a RouteData,
  pub params: Params,
  pub redirect: Option<Redirect<'a>>,
}

/// Test each route in declaration order and return the first hit.
pub fn match_route<'a, I>(path: &str, routes: I) -> Option<RouteMatch<'a>>
where
  I: IntoIterator<Item = &'a RouteData>,
{
  routes.into_iter().find_map(|route| {
    let params = route.captures(path)?;
    let redirect = (route.route_type == RouteType::Redirect).then(|| resolve_redirect(route, &params));
    Some(RouteMatch { route, params, redirect })
  })
}

fn resolve_redirect<'a>(route: &'a RouteData, params: &Params) -> Redirect<'a> {
  let status = route.redirect.as_ref().and_then(RedirectConfig::status);
  if let Some(target) = route.redirect_route.as_deref() {
    let location = match target.generate(params) {
      Ok(path) => path,
      Err(err) => {
        tracing::warn!(
          route = %route.route,
          target = %target.route,
          error = %err,
          "redirect target did not generate"
        );
        target.pathname.clone().unwrap_or_else(|| "/".to_string())
      }
    };
    return Redirect { location, status, target: Some(target) };
  }

  let location = match &route.redirect {
    Some(config) => substitute_params(config.destination(), params),
    None => "/".to_string(),
  };
  Redirect { location, status, target: None }
}

/// Replace `[name]` and `[...name]` placeholders in a redirect destination.
fn substitute_params(destination: &str, params: &Params) -> String {
  let mut target = destination.to_string();
  for (name, value) in params {
    target = target.replacen(&format!("[{name}]"), value, 1);
    target = target.replacen(&format!("[...{name}]"), value, 1);
  }
  target
}

/// Characters `decodeURI` leaves percent-encoded.
const RESERVED: &[u8] = b";/?:@&=+$,#";

fn hex_val(b: u8) -> Option<u8> {
  match b {
    b'0'..=b'9' => Some(b - b'0'),
    b'a'..=b'f' => Some(b - b'a' + 10),
    b'A'..=b'F' => Some(b - b'A' + 10),
    _ => None,
  }
}

/// Percent-decode a request path the way a browser's `decodeURI` does.
///
/// Escapes for reserved characters stay encoded. Malformed input, including
/// sequences that do not form UTF-8, is returned untouched.
pub fn decode_uri(path: &str) -> Cow<'_, str> {
  if !path.contains('%') {
    return Cow::Borrowed(path);
  }

  let bytes = path.as_bytes();
  let mut out = Vec::with_capacity(bytes.len());
  let mut i = 0;
  while i < bytes.len() {
    if bytes[i] == b'%' {
      let (Some(hi), Some(lo)) =
        (bytes.get(i + 1).copied().and_then(hex_val), bytes.get(i + 2).copied().and_then(hex_val))
      else {
        return Cow::Borrowed(path);
      };
      let decoded = (hi << 4) | lo;
      if RESERVED.contains(&decoded) {
        out.extend_from_slice(&bytes[i..i + 3]);
      } else {
        out.push(decoded);
      }
      i += 3;
    } else {
      out.push(bytes[i]);
      i += 1;
    }
  }

  match String::from_utf8(out) {
    Ok(s) => Cow::Owned(s),
    Err(_) => Cow::Borrowed(path),
  }
}
