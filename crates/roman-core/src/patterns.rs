//! Character-class pattern for numeral strings.

use lazy_static::lazy_static;
use regex::Regex;

use crate::symbols;

lazy_static! {
    /// Anchored class of the seven letters, built from the symbol table.
    pub static ref NUMERAL_PATTERN: Regex = Regex::new(
        &format!("^[{}]+$", symbols::letters().collect::<String>())
    ).unwrap();

    /// First character outside the class. Used to point at the offender.
    static ref FOREIGN_CHAR_PATTERN: Regex = Regex::new(
        &format!("[^{}]", symbols::letters().collect::<String>())
    ).unwrap();
}

/// Check that every character of an upper-cased string is a numeral letter.
pub fn is_numeral_charset(normalized: &str) -> bool {
    NUMERAL_PATTERN.is_match(normalized)
}

/// Find the first foreign character and its character (not byte) index.
pub fn first_foreign_char(normalized: &str) -> Option<(usize, char)> {
    let m = FOREIGN_CHAR_PATTERN.find(normalized)?;
    let position = normalized[..m.start()].chars().count();
    m.as_str().chars().next().map(|c| (position, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_accepts_letters() {
        assert!(is_numeral_charset("MDCLXVI"));
        assert!(is_numeral_charset("IIII"));
    }

    #[test]
    fn test_charset_rejects_foreign() {
        assert!(!is_numeral_charset(""));
        assert!(!is_numeral_charset("VJK"));
        assert!(!is_numeral_charset("XX XX"));
        assert!(!is_numeral_charset("X\n"));
        assert!(!is_numeral_charset("mdc"));
    }

    #[test]
    fn test_first_foreign_char() {
        assert_eq!(first_foreign_char("VIJ"), Some((2, 'J')));
        assert_eq!(first_foreign_char("XX XX"), Some((2, ' ')));
        assert_eq!(first_foreign_char("ÉX"), Some((0, 'É')));
        assert_eq!(first_foreign_char("XÉJ"), Some((1, 'É')));
        assert_eq!(first_foreign_char("MCM"), None);
    }
}
