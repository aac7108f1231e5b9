use crate::script::{has_arabic, has_latin};
use crate::text::{contains_tag_delimiter, non_empty_lines, starts_with_label};

pub const NAME_LABEL: &str = "asset name:";
pub const TAGS_LABEL: &str = "tags:";

/// Labeled fields pulled out of a raw model response, before any
/// bilingual splitting or tag merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    /// Value of the asset-name line, possibly with a recovered Arabic line
    /// appended after `" / "`.
    pub name: String,
    /// Value of the tags line.
    pub tags: String,
    /// Lines after the tags line that still look like tag data.
    pub continuations: Vec<String>,
}

fn is_label(line: &str) -> bool {
    starts_with_label(line, NAME_LABEL) || starts_with_label(line, TAGS_LABEL)
}

/// Text after the first colon of a labeled line.
fn label_value(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, value)| value.trim())
}

/// A line after the tags label that should be absorbed as more tags.
fn is_tag_continuation(line: &str) -> bool {
    contains_tag_delimiter(line) || (has_arabic(line) && !has_latin(line))
}

/// Locate the authoritative labeled lines in `text`.
///
/// The last occurrence of each label wins, so a model that echoes the
/// header before answering is read from its final answer.
pub fn extract_fields(text: &str) -> RawFields {
    let lines = non_empty_lines(text);

    let mut name_index = None;
    let mut tags_index = None;
    for (i, line) in lines.iter().enumerate() {
        if starts_with_label(line, NAME_LABEL) {
            name_index = Some(i);
        } else if starts_with_label(line, TAGS_LABEL) {
            tags_index = Some(i);
        }
    }

    let mut fields = RawFields::default();

    if let Some(ti) = tags_index {
        fields.tags = label_value(lines[ti]).to_string();
        fields.continuations = lines[ti + 1..]
            .iter()
            .take_while(|line| !is_label(line) && is_tag_continuation(line))
            .map(|line| line.to_string())
            .collect();
    }

    if let Some(ni) = name_index {
        let mut name = label_value(lines[ni]).to_string();
        // Arabic name placed on its own line under an English-only name.
        if !name.is_empty() && !has_arabic(&name) {
            if let Some(next) = lines.get(ni + 1) {
                if has_arabic(next) && !starts_with_label(next, TAGS_LABEL) {
                    name = format!("{name} / {next}");
                }
            }
        }
        fields.name = name;
    }

    fields
}
