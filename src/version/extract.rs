//! Tag name extraction from provider response bodies
//!
//! Both GitHub and GitLab return tag lists as JSON arrays of objects carrying
//! a `name` field. Rather than deserializing the whole payload, the body is
//! scanned for `"name": "<value>"` pairs and every value that matches the
//! version grammar becomes a candidate.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::tag::parse_tag;

/// Matches `"name": "<value>"`, where the value holds no quote or backslash
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""name"\s*:\s*"([^"\\]+)""#).expect("valid name pattern")
});

/// Returns every `name` value in the body, in order of appearance
pub fn extract_tag_names(body: &str) -> Vec<&str> {
    NAME_PATTERN
        .captures_iter(body)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Select the highest version-shaped tag name in the body.
///
/// Names that do not match the grammar are skipped. The winning tag is
/// returned exactly as published (including any `v` prefix).
pub fn extract_latest_tag(body: &str) -> Option<String> {
    extract_tag_names(body)
        .into_iter()
        .filter_map(|name| parse_tag(name).map(|parsed| (name, parsed)))
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(name, _)| name.to_string())
}
