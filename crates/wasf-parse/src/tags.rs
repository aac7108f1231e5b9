//! Tag line merging and normalization.

use std::collections::HashSet;

use crate::script::Scripts;
use crate::text::{clean_segment, split_tags, TAG_DELIMITERS, TAG_JOINER};

/// Reconcile the tags-line value with its continuation lines.
///
/// When the primary line is mostly English-only and the continuation is
/// mostly Arabic-only, the model has split the languages across lines and
/// tags are paired back up by position as `"english / arabic"`. Otherwise
/// the two lists are concatenated.
pub fn merge_tag_lines(primary: &str, continuations: &[String]) -> String {
    let primary_tags = split_tags(primary);
    if continuations.is_empty() {
        return primary_tags.join(TAG_JOINER);
    }

    let extra_tags = split_tags(&continuations.join(TAG_JOINER));
    if primary_tags.is_empty() {
        return extra_tags.join(TAG_JOINER);
    }
    if extra_tags.is_empty() {
        return primary_tags.join(TAG_JOINER);
    }

    if is_language_split(&primary_tags, &extra_tags) {
        let pair_count = primary_tags.len().min(extra_tags.len());
        let mut merged: Vec<String> = primary_tags
            .iter()
            .zip(&extra_tags)
            .map(|(english, arabic)| format!("{english} / {arabic}"))
            .collect();
        merged.extend_from_slice(&primary_tags[pair_count..]);
        merged.extend_from_slice(&extra_tags[pair_count..]);
        tracing::debug!(pairs = pair_count, "Paired language-split tag lines");
        return merged.join(TAG_JOINER);
    }

    primary_tags
        .into_iter()
        .chain(extra_tags)
        .collect::<Vec<_>>()
        .join(TAG_JOINER)
}

/// Half (rounded down, at least one) of the primary tags are Latin-only and
/// half of the extra tags are Arabic-only.
fn is_language_split(primary: &[String], extra: &[String]) -> bool {
    let latin_only = primary
        .iter()
        .filter(|tag| Scripts::of(tag).is_latin_only())
        .count();
    let arabic_only = extra
        .iter()
        .filter(|tag| Scripts::of(tag).is_arabic_only())
        .count();

    latin_only >= (primary.len() / 2).max(1) && arabic_only >= (extra.len() / 2).max(1)
}

/// Flatten `"english / arabic"` tags into two standalone tags and drop
/// case-insensitive duplicates, keeping the first occurrence.
///
/// Running it on its own output changes nothing.
pub fn normalize_tags(tags: &str) -> String {
    let mut seen = HashSet::new();
    let mut out: Vec<&str> = Vec::new();

    for token in tags.split(TAG_DELIMITERS) {
        for part in expand_pair(token) {
            if seen.insert(part.to_lowercase()) {
                out.push(part);
            }
        }
    }

    out.join(TAG_JOINER)
}

/// Split a slash-joined token into its non-empty parts. A token with fewer
/// than two non-empty parts is kept whole.
fn expand_pair(token: &str) -> Vec<&str> {
    let token = clean_segment(token);
    if token.is_empty() {
        return Vec::new();
    }
    let parts: Vec<&str> = token
        .split('/')
        .map(clean_segment)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() >= 2 {
        parts
    } else {
        vec![token]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn no_continuations_rejoins_primary() {
        assert_eq!(merge_tag_lines("a ,b،  c", &[]), "a, b, c");
    }

    #[test]
    fn empty_primary_uses_continuations() {
        assert_eq!(merge_tag_lines("", &lines(&["x, y", "z"])), "x, y, z");
    }

    #[test]
    fn language_split_lines_are_paired() {
        assert_eq!(
            merge_tag_lines("building, architecture, modern", &lines(&["مبنى، عمارة، حديث"])),
            "building / مبنى, architecture / عمارة, modern / حديث"
        );
    }

    #[test]
    fn pairing_keeps_leftovers_in_order() {
        assert_eq!(
            merge_tag_lines("building, architecture, modern, glass", &lines(&["مبنى، عمارة"])),
            "building / مبنى, architecture / عمارة, modern, glass"
        );
        assert_eq!(
            merge_tag_lines("building", &lines(&["مبنى، عمارة"])),
            "building / مبنى, عمارة"
        );
    }

    #[test]
    fn already_bilingual_lines_are_concatenated() {
        assert_eq!(
            merge_tag_lines("building / مبنى, glass / زجاج", &lines(&["modern / حديث"])),
            "building / مبنى, glass / زجاج, modern / حديث"
        );
    }

    #[test]
    fn english_continuation_is_concatenated() {
        assert_eq!(merge_tag_lines("a, b", &lines(&["c, d"])), "a, b, c, d");
    }

    #[test]
    fn half_threshold_rounds_down() {
        // 1 of 3 primary tags Latin-only: 1 >= max(1, 3 / 2) fires.
        assert_eq!(
            merge_tag_lines("logo, شعار, علامة", &lines(&["رمز"])),
            "logo / رمز, شعار, علامة"
        );
    }

    #[test]
    fn continuation_without_tokens_keeps_primary() {
        assert_eq!(merge_tag_lines("a, b", &lines(&["،،"])), "a, b");
    }

    #[test]
    fn normalize_expands_slash_pairs() {
        assert_eq!(normalize_tags("building/مبنى"), "building, مبنى");
        assert_eq!(
            normalize_tags("building / مبنى, glass / زجاج"),
            "building, مبنى, glass, زجاج"
        );
    }

    #[test]
    fn normalize_one_sided_slash_is_not_a_pair() {
        assert_eq!(normalize_tags("input/, 24/7"), "input, 24, 7");
    }

    #[test]
    fn normalize_deduplicates_case_insensitively() {
        assert_eq!(
            normalize_tags("Logo, logo / شعار, LOGO, شعار, brand"),
            "Logo, شعار, brand"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let input = "building / مبنى, Glass, glass/زجاج, a/b/c, ,  modern ، حديث";
        let once = normalize_tags(input);
        assert_eq!(normalize_tags(&once), once);
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_tags(""), "");
        assert_eq!(normalize_tags(" , ، "), "");
    }
}
