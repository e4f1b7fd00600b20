// Token escaping for the attribute and style sections.
//
// Two layers, both required:
//   1. Sanitization replaces the four grammar separators with `_` inside
//      keys and values.  Lossy and intentional: a decoded value never
//      contains a reserved character.
//   2. Percent-encoding of the whole `key*value` token, with the exact
//      unescaped set of JS `encodeURIComponent` (alphanumerics plus
//      `- _ . ! ~ * ' ( )`).  The reserved set here belongs to the hash
//      grammar, not to URIs, which is why sanitization cannot be replaced
//      by a general-purpose URI encoder alone.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::alphabet::RESERVED;
use super::error::FormatError;

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Replace the grammar separators `~ ' ( )` with `_`.
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if s.contains(RESERVED) {
        Cow::Owned(
            s.chars()
                .map(|c| if RESERVED.contains(&c) { '_' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Percent-encode a sanitized token.
pub fn encode_token(token: &str) -> String {
    utf8_percent_encode(token, URI_COMPONENT).to_string()
}

/// Percent-decode one token. Non-UTF-8 payloads are malformed input.
pub fn decode_token(token: &str) -> Result<String, FormatError> {
    percent_decode_str(token)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| FormatError::BadEscape(token.to_string()))
}
