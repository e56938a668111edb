/* src/server/core/rust/src/pattern/escape.rs */

use unicode_normalization::UnicodeNormalization;

const METACHARS: &[char] = &['.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\'];

/// Literal text as it appears in a generated path: NFC, `?`/`#` encoded,
/// `%5B`/`%5D` restored to brackets.
pub(crate) fn encode_literal(content: &str) -> String {
  let normalized: String = content.nfc().collect();
  normalized.replace('?', "%3F").replace('#', "%23").replace("%5B", "[").replace("%5D", "]")
}

/// Escape a literal route part so it can sit inside a template or pattern.
///
/// The text is NFC-normalized, `?` and `#` are percent-encoded, `%5B`/`%5D`
/// turn back into brackets, and every remaining metacharacter gets a backslash.
pub fn escape_literal(content: &str) -> String {
  let encoded = encode_literal(content);
  let mut out = String::with_capacity(encoded.len());
  for c in encoded.chars() {
    if METACHARS.contains(&c) {
      out.push('\\');
    }
    out.push(c);
  }
  out
}
