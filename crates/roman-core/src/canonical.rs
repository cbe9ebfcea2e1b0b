//! Canonical form generation.

use crate::symbols::{MAX_VALUE, SYMBOLS};
use crate::RomanError;

/// Shortest numeral for `value`, built greedily from the symbol table.
pub fn to_roman(value: u32) -> Result<String, RomanError> {
    if !(1..=MAX_VALUE).contains(&value) {
        return Err(RomanError::OutOfRange(value));
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for (key, magnitude) in SYMBOLS {
        while remaining >= magnitude {
            numeral.push_str(key);
            remaining -= magnitude;
        }
    }

    Ok(numeral)
}
