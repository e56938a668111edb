/* src/server/core/rust/src/pattern/generator.rs */

use super::escape::encode_literal;
use super::route_template;
use crate::route::{Params, RouteSegment, TrailingSlash};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
  #[error("missing value for parameter `{0}`")]
  MissingParam(String),

  #[error("value `{value}` for parameter `{name}` must be a single path segment")]
  InvalidParam { name: String, value: String },

  #[error("parameter in segment {0} has no name")]
  UnnamedParam(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
  Literal(String),
  Param {
    name: String,
    /// `/` when the parameter opens its segment; only emitted together with a value.
    prefix: &'static str,
    /// Optional and allowed to span segments.
    catch_all: bool,
  },
}

/// Reverse of a route pattern: fills named parameters into a route's segments.
///
/// Tokens come straight from the segment parts, so a parameter is looked up
/// under exactly its declared name (`post-id`, `é`, ...). The template string
/// is only kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGenerator {
  template: String,
  tokens: Vec<Token>,
}

impl PathGenerator {
  pub fn new(
    segments: &[RouteSegment],
    trailing_slash: TrailingSlash,
  ) -> Result<Self, TemplateError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for (index, segment) in segments.iter().enumerate() {
      let mut opens_segment = true;
      for part in segment {
        if part.dynamic {
          let name = part.param_name();
          if name.is_empty() {
            return Err(TemplateError::UnnamedParam(index));
          }
          if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
          }
          tokens.push(Token::Param {
            name: name.to_string(),
            prefix: if opens_segment { "/" } else { "" },
            catch_all: part.spread,
          });
        } else {
          if opens_segment {
            literal.push('/');
          }
          literal.push_str(&encode_literal(&part.content));
        }
        opens_segment = false;
      }
      if opens_segment {
        literal.push('/');
      }
    }

    if trailing_slash == TrailingSlash::Always && !segments.is_empty() {
      literal.push('/');
    }
    if !literal.is_empty() {
      tokens.push(Token::Literal(literal));
    }

    Ok(Self { template: route_template(segments, trailing_slash), tokens })
  }

  /// Display form, e.g. `/blog/:slug`.
  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn generate(&self, params: &Params) -> Result<String, TemplateError> {
    let mut path = String::new();
    for token in &self.tokens {
      match token {
        Token::Literal(text) => path.push_str(text),
        Token::Param { name, prefix, catch_all } => {
          let value = params.get(name).map(String::as_str).filter(|v| !v.is_empty());
          match value {
            Some(v) => {
              if !catch_all && v.contains(['/', '#', '?']) {
                return Err(TemplateError::InvalidParam { name: name.clone(), value: v.to_string() });
              }
              path.push_str(prefix);
              path.push_str(v);
            }
            None if *catch_all => {}
            None => return Err(TemplateError::MissingParam(name.clone())),
          }
        }
      }
    }
    if path.is_empty() {
      path.push('/');
    }
    Ok(path)
  }
}
