//! Quality gate deciding whether a parse is good enough to keep or should
//! be sent back to the model for a corrective rewrite.

use serde::Serialize;
use wasf_parse::script::{has_arabic, Scripts};
use wasf_parse::text::split_tags;

use crate::config::QualityConfig;

/// Why a parsed asset fell short.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum Shortfall {
    MissingArabicName,
    TooFewTags(usize),
    TooManyTags(usize),
    /// Share of tags containing Arabic script.
    LowArabicCoverage(f64),
    /// Share of tags containing a Latin letter.
    LowLatinCoverage(f64),
}

/// Outcome of scoring a parsed asset.
#[derive(Debug, Clone, PartialEq)]
pub enum QualityVerdict {
    Acceptable,
    NeedsCorrection(Vec<Shortfall>),
}

impl QualityVerdict {
    pub fn needs_correction(&self) -> bool {
        matches!(self, QualityVerdict::NeedsCorrection(_))
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            QualityVerdict::Acceptable => &[],
            QualityVerdict::NeedsCorrection(reasons) => reasons,
        }
    }
}

/// Score an Arabic name and a normalized tag string against `config`.
///
/// A tag may count toward both the Arabic and the Latin share.
pub fn assess(arabic_name: &str, tags: &str, config: &QualityConfig) -> QualityVerdict {
    let mut shortfalls = Vec::new();

    if !has_arabic(arabic_name) {
        shortfalls.push(Shortfall::MissingArabicName);
    }

    let tags = split_tags(tags);
    let total = tags.len();
    if total < config.min_tags.max(1) {
        shortfalls.push(Shortfall::TooFewTags(total));
    } else {
        if total > config.max_tags {
            shortfalls.push(Shortfall::TooManyTags(total));
        }

        let (mut arabic, mut latin) = (0usize, 0usize);
        for tag in &tags {
            let scripts = Scripts::of(tag);
            if scripts.contains(Scripts::ARABIC) {
                arabic += 1;
            }
            if scripts.contains(Scripts::LATIN) {
                latin += 1;
            }
        }

        let arabic_ratio = arabic as f64 / total as f64;
        let latin_ratio = latin as f64 / total as f64;
        if arabic_ratio < config.min_script_ratio {
            shortfalls.push(Shortfall::LowArabicCoverage(arabic_ratio));
        }
        if latin_ratio < config.min_script_ratio {
            shortfalls.push(Shortfall::LowLatinCoverage(latin_ratio));
        }
    }

    if shortfalls.is_empty() {
        QualityVerdict::Acceptable
    } else {
        QualityVerdict::NeedsCorrection(shortfalls)
    }
}

/// Shorthand for `assess(..).needs_correction()`.
pub fn needs_correction(arabic_name: &str, tags: &str, config: &QualityConfig) -> bool {
    assess(arabic_name, tags, config).needs_correction()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn cfg() -> QualityConfig {
        AppConfig::default().quality
    }

    fn bilingual_tags(pairs: usize) -> String {
        (0..pairs)
            .flat_map(|i| [format!("tag{i}"), format!("وسم{i}")])
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn balanced_output_is_acceptable() {
        let verdict = assess("مبنى", "building, مبنى, glass, زجاج", &cfg());
        assert_eq!(verdict, QualityVerdict::Acceptable);
        assert!(verdict.shortfalls().is_empty());
    }

    #[test]
    fn missing_arabic_name_always_fails() {
        assert!(needs_correction("", "building, مبنى", &cfg()));
        assert!(needs_correction("Building", "building, مبنى", &cfg()));
        assert_eq!(
            assess("", "building, مبنى", &cfg()).shortfalls(),
            &[Shortfall::MissingArabicName]
        );
    }

    #[test]
    fn empty_tags_fail() {
        let verdict = assess("مبنى", "", &cfg());
        assert_eq!(verdict.shortfalls(), &[Shortfall::TooFewTags(0)]);
    }

    #[test]
    fn too_many_tags_fail_even_when_bilingual() {
        // 43 pairs give 86 tags; keep 85.
        let mut tags: Vec<String> = bilingual_tags(43).split(", ").map(String::from).collect();
        tags.truncate(85);
        let verdict = assess("مبنى", &tags.join(", "), &cfg());
        assert_eq!(verdict.shortfalls(), &[Shortfall::TooManyTags(85)]);
    }

    #[test]
    fn eighty_tags_pass() {
        assert!(!needs_correction("مبنى", &bilingual_tags(40), &cfg()));
    }

    #[test]
    fn english_only_tags_fail_arabic_coverage() {
        let verdict = assess("مبنى", "building, glass, modern, facade", &cfg());
        assert_eq!(verdict.shortfalls(), &[Shortfall::LowArabicCoverage(0.0)]);
    }

    #[test]
    fn coverage_at_threshold_passes() {
        // 1 of 4 tags Arabic: exactly 25%.
        assert!(!needs_correction("مبنى", "building, glass, modern, مبنى", &cfg()));
    }

    #[test]
    fn mixed_tag_counts_for_both_scripts() {
        assert!(!needs_correction("مبنى", "building / مبنى", &cfg()));
    }

    #[test]
    fn arabic_only_tags_fail_latin_coverage() {
        let verdict = assess("مبنى", "مبنى, زجاج, حديث", &cfg());
        assert_eq!(verdict.shortfalls(), &[Shortfall::LowLatinCoverage(0.0)]);
    }
}
