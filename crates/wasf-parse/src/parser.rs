use crate::elements::Metadata;
use crate::extract::extract_fields;
use crate::name::split_bilingual_name;
use crate::tags::{merge_tag_lines, normalize_tags};

/// Parse a raw model response into bilingual names and normalized tags.
///
/// Never fails: missing labels or separators leave the matching fields empty.
///
/// # Example
/// ```
/// let meta = wasf_parse::parse_metadata(
///     "Asset Name: Corporate Building / مبنى الشركة\nTags: building / مبنى, glass / زجاج",
/// );
/// assert_eq!(meta.english_name, "Corporate Building");
/// assert_eq!(meta.arabic_name, "مبنى الشركة");
/// assert_eq!(meta.tags, "building, مبنى, glass, زجاج");
/// ```
pub fn parse_metadata(text: &str) -> Metadata {
    let fields = extract_fields(text);
    let name = split_bilingual_name(&fields.name);
    let merged = merge_tag_lines(&fields.tags, &fields.continuations);
    let tags = normalize_tags(&merged);

    tracing::debug!(
        english = %name.english,
        arabic = %name.arabic,
        continuations = fields.continuations.len(),
        "Parsed model output"
    );

    Metadata {
        english_name: name.english,
        arabic_name: name.arabic,
        tags,
    }
}
