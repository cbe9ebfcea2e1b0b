//! The fixed symbol table.
//!
//! Thirteen entries, largest first: the seven single-letter symbols and the
//! six subtractive pairs. Ordering matters to `to_roman`, which walks it
//! greedily.

/// Every symbol and subtractive pair with its magnitude, largest first.
pub const SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Largest value a numeral can express.
pub const MAX_VALUE: u32 = 3999;

/// Magnitude of a single (already upper-cased) letter.
pub fn letter_value(letter: char) -> Option<u32> {
    match letter {
        'M' => Some(1000),
        'D' => Some(500),
        'C' => Some(100),
        'L' => Some(50),
        'X' => Some(10),
        'V' => Some(5),
        'I' => Some(1),
        _ => None,
    }
}

/// Magnitude of a subtractive pair such as "IX".
pub fn pair_value(first: char, second: char) -> Option<u32> {
    match (first, second) {
        ('C', 'M') => Some(900),
        ('C', 'D') => Some(400),
        ('X', 'C') => Some(90),
        ('X', 'L') => Some(40),
        ('I', 'X') => Some(9),
        ('I', 'V') => Some(4),
        _ => None,
    }
}

/// The single-letter symbols, in table order. Used to build the character class.
pub fn letters() -> impl Iterator<Item = &'static str> {
    SYMBOLS.iter().map(|(key, _)| *key).filter(|key| key.len() == 1)
}

/// V, L and D: these never repeat and never subtract.
pub fn is_five_family(value: u32) -> bool {
    matches!(value, 5 | 50 | 500)
}
