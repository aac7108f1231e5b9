//! Small string helpers shared by the extractor, splitter and tag passes.

/// Characters stripped from the edges of a name or tag segment.
const SEGMENT_PUNCT: &[char] = &['-', '\u{2013}', '\u{2014}', '/', '|', ':', '\u{2022}'];

/// Latin comma and Arabic comma.
pub const TAG_DELIMITERS: &[char] = &[',', '\u{060C}'];

/// Separator used when joining tags back into a single string.
pub const TAG_JOINER: &str = ", ";

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into trimmed lines, dropping blank ones.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Trim whitespace, then separator punctuation, then whitespace again.
pub fn clean_segment(s: &str) -> &str {
    s.trim().trim_matches(SEGMENT_PUNCT).trim()
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a tag string on either comma into cleaned, non-empty tokens.
pub fn split_tags(s: &str) -> Vec<String> {
    s.split(TAG_DELIMITERS)
        .map(clean_segment)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn contains_tag_delimiter(s: &str) -> bool {
    s.contains(TAG_DELIMITERS)
}

/// `true` when `line` begins with `label`, ignoring ASCII case.
pub fn starts_with_label(line: &str, label: &str) -> bool {
    line.get(..label.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_blank_ones_dropped() {
        let lines = non_empty_lines("  first \r\n\r\n\tsecond\u{2028}third  \n   \n");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn clean_segment_strips_edge_punctuation() {
        assert_eq!(clean_segment("  - Logo / "), "Logo");
        assert_eq!(clean_segment("\u{2022} شعار :"), "شعار");
        assert_eq!(clean_segment("a-b"), "a-b");
        assert_eq!(clean_segment(" | "), "");
    }

    #[test]
    fn split_tags_on_both_commas() {
        assert_eq!(
            split_tags("building, مبنى، , - modern -"),
            vec!["building", "مبنى", "modern"]
        );
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn label_prefix_is_case_insensitive() {
        assert!(starts_with_label("ASSET NAME: Logo", "asset name:"));
        assert!(starts_with_label("tags:", "tags:"));
        assert!(!starts_with_label("tag", "tags:"));
        // Multi-byte text shorter than the label must not panic.
        assert!(!starts_with_label("مبنى", "asset name:"));
    }

    #[test]
    fn collapse_runs() {
        assert_eq!(collapse_whitespace("  Logo \t  شعار  "), "Logo شعار");
    }
}
