//! Numeral to integer conversion.

use crate::symbols::{letter_value, pair_value, MAX_VALUE};
use crate::validator::{normalize, validate};
use crate::RomanError;

/// Convert a numeral to its value.
///
/// Input is validated first; a malformed numeral is an error rather than a
/// meaningless sum.
pub fn to_integer(numeral: &str) -> Result<u32, RomanError> {
    validate(numeral)?;

    let value = weighted_sum(numeral);
    if !(1..=MAX_VALUE).contains(&value) {
        return Err(RomanError::OutOfRange(value));
    }

    tracing::trace!(numeral, value, "converted numeral");
    Ok(value)
}

/// Greedy left-to-right sum over the symbol table, without validation.
///
/// Subtractive pairs are consumed two characters at a time. Characters
/// outside the table contribute nothing.
pub fn weighted_sum(numeral: &str) -> u32 {
    let chars: Vec<char> = normalize(numeral).chars().collect();
    let mut total = 0u32;
    let mut i = 0;

    while i < chars.len() {
        if let Some(value) = chars
            .get(i + 1)
            .and_then(|next| pair_value(chars[i], *next))
        {
            total = total.saturating_add(value);
            i += 2;
            continue;
        }

        total = total.saturating_add(letter_value(chars[i]).unwrap_or(0));
        i += 1;
    }

    total
}
