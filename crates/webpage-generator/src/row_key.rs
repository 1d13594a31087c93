//! Row key codec.
//!
//! A row key is the page's fully-qualified host with its labels reversed,
//! followed by [`ROW_KEY_SEPARATOR`] and the path:
//!
//! ```text
//! blog.example.com + posts/007  ->  com.example.blog#posts/007
//! ```
//!
//! Reversed labels put every host under the same registered domain next to
//! each other in byte order, so a prefix scan over `com.example.` covers
//! `www.example.com`, `blog.example.com` and so on. The separator is neither
//! `.` nor `/`, so the host/path boundary is never ambiguous.

/// Marker between the reversed host and the path.
pub const ROW_KEY_SEPARATOR: char = '#';

/// Reverse the dot-separated labels of a host name.
///
/// The operation is its own inverse.
pub fn reverse_domain(domain: &str) -> String {
    domain.split('.').rev().collect::<Vec<_>>().join(".")
}

/// Build the row key for a page at `full_domain` and `path`.
///
/// Both inputs are expected to be non-empty.
pub fn encode(full_domain: &str, path: &str) -> String {
    format!(
        "{}{}{}",
        reverse_domain(full_domain),
        ROW_KEY_SEPARATOR,
        path
    )
}

/// Split a row key back into its host and path.
///
/// Returns `None` when the key carries no separator.
pub fn decode(row_key: &str) -> Option<(String, &str)> {
    let (reversed, path) = row_key.split_once(ROW_KEY_SEPARATOR)?;
    Some((reverse_domain(reversed), path))
}
