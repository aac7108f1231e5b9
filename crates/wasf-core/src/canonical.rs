//! Comparison keys for asset names.
//!
//! Two names a person would call "the same" (spelling variants of Arabic
//! letters, Arabic-Indic digits, case, accents, punctuation) map to one key.
//! Keys only group names for duplicate detection and are never shown.

use phf::phf_map;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Arabic letter variants folded to their base letter. Tatweel is dropped.
static ARABIC_LETTER_FOLDS: phf::Map<char, &'static str> = phf_map! {
    '\u{0622}' => "\u{0627}", // alef with madda above
    '\u{0623}' => "\u{0627}", // alef with hamza above
    '\u{0625}' => "\u{0627}", // alef with hamza below
    '\u{0671}' => "\u{0627}", // alef wasla
    '\u{0649}' => "\u{064A}", // alef maksura -> yeh
    '\u{0624}' => "\u{0648}", // waw with hamza
    '\u{0626}' => "\u{064A}", // yeh with hamza
    '\u{0629}' => "\u{0647}", // teh marbuta -> heh
    '\u{0640}' => "",         // tatweel
};

/// Full case folds that `to_lowercase` leaves alone. Compatibility forms
/// such as long s and Greek symbol variants are already gone after NFKC.
static CASE_FOLDS: phf::Map<char, &'static str> = phf_map! {
    '\u{00DF}' => "ss",       // sharp s
    '\u{03C2}' => "\u{03C3}", // final sigma
    '\u{1C80}' => "\u{0432}", // rounded ve
    '\u{1C81}' => "\u{0434}", // long-legged de
    '\u{1C82}' => "\u{043E}", // narrow o
    '\u{1C83}' => "\u{0441}", // wide es
    '\u{1C84}' => "\u{0442}", // tall te
    '\u{1C85}' => "\u{0442}", // three-legged te
    '\u{1C86}' => "\u{044A}", // tall hard sign
    '\u{1C87}' => "\u{0463}", // tall yat
    '\u{1C88}' => "\u{A64B}", // unblended uk
};

/// Build the comparison key for a display name.
///
/// Steps:
/// 1. Unicode NFKC
/// 2. Arabic letter folding
/// 3. Arabic-Indic and Extended Arabic-Indic digits to ASCII
/// 4. Case folding
/// 5. Diacritic and format-control removal
/// 6. Non-alphanumerics to spaces, runs collapsed
pub fn canonical_key(name: &str) -> String {
    let s: String = name.nfkc().collect();
    let s = fold_arabic(&s);
    let s = case_fold(&s);
    let s = strip_marks(&s);
    erase_punctuation(&s)
}

// ── Level 2–3: Arabic letters and digits ──────────────────────────────

fn fold_arabic(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if let Some(folded) = ARABIC_LETTER_FOLDS.get(&c) {
            out.push_str(folded);
        } else if let Some(digit) = fold_digit(c) {
            out.push(digit);
        } else {
            out.push(c);
        }
    }
    out
}

fn fold_digit(c: char) -> Option<char> {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

// ── Level 4: Case ─────────────────────────────────────────────────────

fn case_fold(s: &str) -> String {
    let lower = s.to_lowercase();
    if !lower.chars().any(|c| CASE_FOLDS.contains_key(&c)) {
        return lower;
    }
    let mut out = String::with_capacity(lower.len() + 2);
    for c in lower.chars() {
        match CASE_FOLDS.get(&c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

// ── Level 5: Diacritics and format controls ───────────────────────────

/// Decompose and drop combining marks (accents, harakat) and invisible
/// format characters.
fn strip_marks(s: &str) -> String {
    s.nfkd()
        .filter(|&c| !is_combining_mark(c) && !is_format_control(c))
        .collect()
}

/// Characters of general category Cf (joiners, bidi controls, BOM).
fn is_format_control(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

// ── Level 6: Punctuation and whitespace ───────────────────────────────

/// Keep letters and numbers; everything else becomes a single space.
fn erase_punctuation(s: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_accents_and_punctuation() {
        assert_eq!(canonical_key("Café \u{2014} Building"), canonical_key("cafe building"));
        assert_eq!(canonical_key("Café \u{2014} Building"), "cafe building");
    }

    #[test]
    fn case_folding_beyond_lowercase() {
        assert_eq!(canonical_key("Straße Banner"), canonical_key("STRASSE banner"));
        assert_eq!(canonical_key("STRAẞE"), "strasse");
        assert_eq!(canonical_key("ΟΔΟΣ"), canonical_key("οδοσ"));
        assert_eq!(canonical_key("\u{1C82}кно"), canonical_key("ОКНО"));
    }

    #[test]
    fn fullwidth_and_whitespace() {
        assert_eq!(canonical_key("  ＬＯＧＯ\t\tMark  "), "logo mark");
    }

    #[test]
    fn alef_maksura_folds_to_yeh() {
        assert_eq!(canonical_key("مبنى"), canonical_key("مبني"));
        assert_eq!(canonical_key("مبنى"), "مبني");
    }

    #[test]
    fn farsi_yeh_is_not_in_the_fold_table() {
        assert_ne!(canonical_key("مبنى"), canonical_key("مبنی"));
    }

    #[test]
    fn hamza_alef_forms_fold_to_bare_alef() {
        assert_eq!(canonical_key("أحمد"), canonical_key("احمد"));
        assert_eq!(canonical_key("إسلام"), canonical_key("اسلام"));
        assert_eq!(canonical_key("آمن"), canonical_key("امن"));
        assert_eq!(canonical_key("ٱلله"), canonical_key("الله"));
    }

    #[test]
    fn waw_yeh_hamza_and_teh_marbuta() {
        assert_eq!(canonical_key("مؤسسة"), canonical_key("موسسه"));
        assert_eq!(canonical_key("رئيس"), canonical_key("رييس"));
    }

    #[test]
    fn tatweel_and_harakat_removed() {
        assert_eq!(canonical_key("مـــبنى"), canonical_key("مبنى"));
        assert_eq!(canonical_key("مَبْنًى"), canonical_key("مبنى"));
    }

    #[test]
    fn arabic_digits_fold_to_ascii() {
        assert_eq!(canonical_key("تقرير ٢٠٢٤"), "تقرير 2024");
        assert_eq!(canonical_key("Chart ۳"), "chart 3");
    }

    #[test]
    fn format_controls_removed_not_spaced() {
        assert_eq!(canonical_key("lo\u{200B}go"), "logo");
        assert_eq!(canonical_key("\u{200F}شعار"), "شعار");
        assert_eq!(canonical_key("lo\u{E0067}go\u{E007F}"), "logo");
        assert_eq!(canonical_key("ma\u{1D173}rk"), "mark");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(canonical_key("Logo-Mark/Brand"), "logo mark brand");
        assert_eq!(canonical_key("---"), "");
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn suffix_keeps_names_distinct() {
        assert_ne!(canonical_key("Logo - 001"), canonical_key("Logo - 002"));
    }
}
