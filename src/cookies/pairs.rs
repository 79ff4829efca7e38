//! Cookie-header pair parsing.
//!
//! A host cookie store reads back as one `;`-separated header line holding
//! every cookie. [`parse_pairs`] splits that line into percent-decoded
//! `(name, value)` pairs; [`find_value`] locates a single storage's payload
//! inside it.

use cookie::Cookie;

/// Split a raw cookie header into percent-decoded `(name, value)` pairs.
///
/// Each segment is split on its first `=`; everything after it belongs to
/// the value and is never split again. Segments that do not form a pair
/// (bare attribute words, empty fragments, missing names) are skipped, and
/// whitespace around names is trimmed.
pub fn parse_pairs(header: &str) -> Vec<(String, String)> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect()
}

/// Find the payload stored under `name`, if any.
///
/// Pairs with an empty value never carry a payload and read as absent. When
/// the name occurs more than once the last occurrence wins, matching what an
/// object built left-to-right from the header would hold.
pub fn find_value(header: &str, name: &str) -> Option<String> {
    parse_pairs(header)
        .into_iter()
        .filter(|(n, value)| n.as_str() == name && !value.is_empty())
        .map(|(_, value)| value)
        .last()
}
