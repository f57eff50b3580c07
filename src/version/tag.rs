//! Tag normalization, parsing and ordering
//!
//! Tags follow a fixed `YYYY.M.P[-I]` convention:
//! - `2026.1.0` is the finalized release for 2026.1.0
//! - `2026.1.0-3` is the third numbered iteration of the same release
//!
//! A tag without an iteration outranks every numbered iteration of the
//! same `(year, month, patch)` triple.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Anchored grammar for a normalized tag
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})\.(\d{1,2})\.(\d{1,2})(?:-(\d+))?$").expect("valid version pattern")
});

/// Optional iteration suffix of a tag.
///
/// Variant order matters: `Numbered` sorts below `Final`, so the derived
/// `Ord` ranks a missing iteration above every concrete number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Iteration {
    Numbered(u64),
    Final,
}

/// A tag decomposed into `(year, month, patch, iteration)`.
///
/// Field order drives the derived `Ord`, compared most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedVersion {
    pub year: u32,
    pub month: u32,
    pub patch: u32,
    pub iteration: Iteration,
}

impl ParsedVersion {
    /// Parse a normalized tag, returning `None` unless the whole string matches.
    ///
    /// Month and patch are not range checked (`2026.13.99` is accepted).
    pub fn parse(normalized: &str) -> Option<Self> {
        let captures = VERSION_PATTERN.captures(normalized)?;

        let year = captures.get(1)?.as_str().parse().ok()?;
        let month = captures.get(2)?.as_str().parse().ok()?;
        let patch = captures.get(3)?.as_str().parse().ok()?;
        // An iteration too large for u64 is treated as not-a-version
        let iteration = match captures.get(4) {
            Some(m) => Iteration::Numbered(m.as_str().parse().ok()?),
            None => Iteration::Final,
        };

        Some(Self {
            year,
            month,
            patch,
            iteration,
        })
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.patch)?;
        if let Iteration::Numbered(n) = self.iteration {
            write!(f, "-{}", n)?;
        }
        Ok(())
    }
}

/// Trim whitespace and strip at most one leading `v` or `V`.
///
/// Idempotent for every tag this crate can rank: a second `v` would make the
/// result fail the grammar anyway.
pub fn normalize_tag(tag: &str) -> &str {
    let trimmed = tag.trim();
    trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed)
}

/// Parse a raw tag after normalizing it
pub fn parse_tag(tag: &str) -> Option<ParsedVersion> {
    ParsedVersion::parse(normalize_tag(tag))
}

/// Returns true when the normalized tag matches the version grammar
pub fn is_version_like(tag: &str) -> bool {
    parse_tag(tag).is_some()
}

/// Compare two raw tags.
///
/// Falls back to plain lexicographic ordering of the raw inputs when either
/// side does not match the grammar.
pub fn compare_raw(a: &str, b: &str) -> Ordering {
    match (parse_tag(a), parse_tag(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Returns true when `candidate` ranks strictly above `current`
pub fn is_newer(current: &str, candidate: &str) -> bool {
    compare_raw(candidate, current) == Ordering::Greater
}

/// Returns true when the remote `latest` tag supersedes `current`.
///
/// Both sides are normalized first, so `v2026.1.0` and `2026.1.0` are equal.
pub fn has_update(current: &str, latest: &str) -> bool {
    is_newer(normalize_tag(current), normalize_tag(latest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v2026.1.0", "2026.1.0")]
    #[case("V2026.1.0-1", "2026.1.0-1")]
    #[case("  v2026.2.0\n", "2026.2.0")]
    #[case("2026.1.0", "2026.1.0")]
    #[case("vv2026.1.0", "v2026.1.0")]
    #[case("release-1", "release-1")]
    #[case("", "")]
    #[case("   ", "")]
    #[case("v", "")]
    fn normalize_tag_strips_single_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_tag(input), expected);
    }

    #[rstest]
    #[case("v2026.1.0")]
    #[case("2026.1.0-7")]
    #[case(" V2025.12.31 ")]
    #[case("main")]
    fn normalize_tag_is_idempotent_for_ranked_tags(#[case] input: &str) {
        let once = normalize_tag(input);
        assert_eq!(normalize_tag(once), once);
    }

    #[rstest]
    #[case("2026.1.0", true)]
    #[case("2026.1.0-1", true)]
    #[case("v2026.1.0", true)]
    #[case("2026.13.99", true)]
    #[case("2026.1", false)]
    #[case("release-1", false)]
    #[case("26.1.0", false)]
    #[case("2026.1.0-", false)]
    #[case("2026.1.0-rc1", false)]
    #[case("2026.100.0", false)]
    #[case("x2026.1.0", false)]
    #[case("2026.1.0.4", false)]
    #[case("", false)]
    fn is_version_like_requires_full_match(#[case] tag: &str, #[case] expected: bool) {
        assert_eq!(is_version_like(tag), expected);
    }

    #[test]
    fn parse_decomposes_all_fields() {
        assert_eq!(
            ParsedVersion::parse("2026.4.12-3"),
            Some(ParsedVersion {
                year: 2026,
                month: 4,
                patch: 12,
                iteration: Iteration::Numbered(3),
            })
        );
        assert_eq!(
            ParsedVersion::parse("2026.4.12").map(|v| v.iteration),
            Some(Iteration::Final)
        );
    }

    #[test]
    fn parse_rejects_prefixed_tag_without_normalization() {
        assert_eq!(ParsedVersion::parse("v2026.1.0"), None);
    }

    #[rstest]
    #[case("2026.2.0", "2026.1.0", Ordering::Greater)]
    #[case("2026.1.0", "2026.1.0-1", Ordering::Greater)] // unnumbered beats numbered
    #[case("2026.1.0-2", "2026.1.0-1", Ordering::Greater)]
    #[case("2025.12.31", "2026.1.0", Ordering::Less)]
    #[case("2026.1.10", "2026.1.9", Ordering::Greater)] // numeric, not lexicographic
    #[case("v2026.1.0", "2026.1.0", Ordering::Equal)]
    #[case("2026.01.0", "2026.1.0", Ordering::Equal)]
    #[case("beta", "alpha", Ordering::Greater)] // lexicographic fallback
    #[case("2026.1.0", "main", Ordering::Less)] // fallback when one side is malformed
    fn compare_raw_orders_tags(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_raw(a, b), expected);
    }

    #[test]
    fn final_iteration_outranks_any_number() {
        assert!(Iteration::Final > Iteration::Numbered(u64::MAX));
    }

    #[rstest]
    #[case("2026.1.0-1", "2026.1.0", true)]
    #[case("2026.1.0-1", "2026.1.0-1", false)]
    #[case("2026.1.0", "2026.1.0-9", false)]
    #[case("2026.2.0", "2026.1.0", false)]
    #[case("main", "main", false)]
    fn is_newer_is_strict(#[case] current: &str, #[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(is_newer(current, candidate), expected);
    }

    #[rstest]
    #[case("2026.1.0-1", "v2026.1.0", true)]
    #[case("2026.1.0-1", "v2026.1.0-1", false)]
    #[case("V2026.1.0", " 2026.1.0 ", false)]
    #[case("v2025.12.3", "2026.1.0-1", true)]
    fn has_update_normalizes_both_sides(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(has_update(current, latest), expected);
    }

    #[test]
    fn display_round_trips_canonical_form() {
        let parsed = parse_tag("v2026.03.1-2");
        assert_eq!(parsed.map(|v| v.to_string()), Some("2026.3.1-2".to_string()));
    }
}
