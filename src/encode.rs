//! Percent-encoding of URN segments.
//!
//! Encoding is applied once, when a segment is written into a URN through
//! composition or attribute rewriting. Parsing and the accessors return
//! segment text as stored; [`decode_segment`] reverses the escaping for
//! callers that need the original text.

use std::borrow::Cow;
use std::str::Utf8Error;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in entity, id, and attribute segments.
///
/// Everything outside the RFC 3986 unreserved set is escaped, so stored
/// segment text can never contain a bare `:` separator or `%` introducer.
pub const SEGMENT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a segment for inclusion in a URN string.
///
/// Returns the input unchanged (without allocating) when no character
/// needs escaping.
#[must_use]
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, SEGMENT_ESCAPE).into()
}

/// Reverses the escaping applied by [`encode_segment`].
///
/// # Errors
///
/// Returns `Utf8Error` if the decoded bytes are not valid UTF-8.
pub fn decode_segment(segment: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(segment).decode_utf8()
}
