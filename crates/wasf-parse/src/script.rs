use bitflags::bitflags;

bitflags! {
    /// Writing systems present in a piece of text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Scripts: u8 {
        const ARABIC = 0b0000_0001;
        const LATIN = 0b0000_0010;
    }
}

impl Scripts {
    /// Scan `s` once and collect every script it touches.
    pub fn of(s: &str) -> Self {
        let mut found = Scripts::empty();
        for c in s.chars() {
            if is_arabic(c) {
                found |= Scripts::ARABIC;
            } else if is_latin(c) {
                found |= Scripts::LATIN;
            }
            if found.is_all() {
                break;
            }
        }
        found
    }

    /// Latin letters present, no Arabic.
    pub fn is_latin_only(self) -> bool {
        self == Scripts::LATIN
    }

    /// Arabic present, no Latin letters.
    pub fn is_arabic_only(self) -> bool {
        self == Scripts::ARABIC
    }
}

/// Code point lies in one of the Arabic blocks (base, supplement, extended-A,
/// presentation forms A and B).
pub fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Latin letter: ASCII letters plus the accented letters of Latin-1
/// Supplement, Latin Extended-A/B and Latin Extended Additional.
pub fn is_latin(c: char) -> bool {
    match c {
        'A'..='Z' | 'a'..='z' => true,
        '\u{00D7}' | '\u{00F7}' => false, // × ÷
        '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => true,
        _ => false,
    }
}

pub fn has_arabic(s: &str) -> bool {
    s.chars().any(is_arabic)
}

pub fn has_latin(s: &str) -> bool {
    s.chars().any(is_latin)
}

/// Byte offset of the first Arabic code point.
pub fn first_arabic(s: &str) -> Option<usize> {
    s.char_indices().find(|&(_, c)| is_arabic(c)).map(|(i, _)| i)
}

/// Byte offset of the first Latin letter.
pub fn first_latin(s: &str) -> Option<usize> {
    s.char_indices().find(|&(_, c)| is_latin(c)).map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_blocks() {
        assert!(is_arabic('م'));
        assert!(is_arabic('\u{060C}')); // Arabic comma
        assert!(is_arabic('\u{0671}')); // alef wasla
        assert!(is_arabic('\u{FEFB}')); // lam-alef ligature
        assert!(!is_arabic('a'));
        assert!(!is_arabic('1'));
    }

    #[test]
    fn latin_letters() {
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(is_latin('é'));
        assert!(!is_latin('×'));
        assert!(!is_latin('3'));
        assert!(!is_latin('-'));
        assert!(!is_latin('ب'));
    }

    #[test]
    fn scripts_of_mixed_text() {
        assert_eq!(Scripts::of("building / مبنى"), Scripts::ARABIC | Scripts::LATIN);
        assert!(Scripts::of("building").is_latin_only());
        assert!(Scripts::of("مبنى").is_arabic_only());
        assert!(Scripts::of("3D").is_latin_only());
        assert_eq!(Scripts::of("2024 - !"), Scripts::empty());
    }

    #[test]
    fn first_positions() {
        let s = "Logo شعار";
        assert_eq!(first_latin(s), Some(0));
        assert_eq!(first_arabic(s), Some(5));
        assert_eq!(first_arabic("logo"), None);
        assert_eq!(first_latin("شعار"), None);
    }
}
