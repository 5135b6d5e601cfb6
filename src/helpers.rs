use crate::character_sets::is_tag_whitespace;

/// Prune fragment (#hash) from an address.
/// Returns (`address_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split an address (already without fragment) at the first `?`.
/// Returns (`location`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Trim surrounding whitespace from tag text.
pub fn trim_tag(input: &str) -> &str {
    input.trim_matches(is_tag_whitespace)
}
