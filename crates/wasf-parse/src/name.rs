use crate::script::{first_arabic, first_latin, has_arabic, has_latin};
use crate::text::{clean_segment, collapse_whitespace};

/// Separators tried in priority order when splitting a bilingual name.
const NAME_SEPARATORS: &[&str] = &[
    " - ",
    " \u{2013} ",
    " \u{2014} ",
    " / ",
    " \u{2022} ",
    " /",
    "/ ",
    " | ",
    "|",
];

/// English and Arabic halves of an asset name. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualName {
    pub english: String,
    pub arabic: String,
}

impl BilingualName {
    fn new(english: &str, arabic: &str) -> Self {
        Self {
            english: clean_segment(english).to_string(),
            arabic: clean_segment(arabic).to_string(),
        }
    }
}

/// Split an asset-name value into its English and Arabic parts.
///
/// Order of attempts:
/// 1. A bare pipe with text on both sides, taken positionally.
/// 2. The first separator whose split leaves Arabic on exactly one side.
/// 3. Single-script names go whole to that language.
/// 4. Mixed names are cut where the second script begins.
pub fn split_bilingual_name(value: &str) -> BilingualName {
    let value = collapse_whitespace(value);
    if value.is_empty() {
        return BilingualName::default();
    }

    if let Some((left, right)) = value.split_once('|') {
        let (left, right) = (left.trim(), right.trim());
        if !left.is_empty() && !right.is_empty() {
            return BilingualName {
                english: left.to_string(),
                arabic: right.to_string(),
            };
        }
    }

    for separator in NAME_SEPARATORS {
        let Some((left, right)) = value.split_once(*separator) else {
            continue;
        };
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() {
            continue;
        }
        match (has_arabic(left), has_arabic(right)) {
            (false, true) => return BilingualName::new(left, right),
            (true, false) => return BilingualName::new(right, left),
            _ => {}
        }
    }

    if !has_arabic(&value) {
        return BilingualName::new(&value, "");
    }
    if !has_latin(&value) {
        return BilingualName::new("", &value);
    }

    let (Some(arabic_at), Some(latin_at)) = (first_arabic(&value), first_latin(&value)) else {
        return BilingualName::new(&value, "");
    };

    if latin_at < arabic_at {
        let (english, arabic) = value.split_at(arabic_at);
        BilingualName::new(english, arabic)
    } else {
        let (arabic, english) = value.split_at(latin_at);
        BilingualName::new(english, arabic)
    }
}
