use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// `application/x-www-form-urlencoded` percent-encode set.
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`.
/// Space is written as `+` by the serializer before this set applies.
pub const FORM_URLENCODED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Whitespace trimmed from tag text before it becomes a filter value.
/// Whitespace stripped by `String.prototype.trim`: Unicode `White_Space`
/// except NEL (U+0085), plus BOM.
pub fn is_tag_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
