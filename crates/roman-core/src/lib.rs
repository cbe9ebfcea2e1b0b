//! # roman-core
//!
//! Deterministic Roman numeral validation and conversion.
//!
//! ## Key Guarantees
//!
//! 1. **Pure**: Every function depends only on its input and a constant table
//! 2. **Single pass**: Validation is one left-to-right scan with bounded lookahead
//! 3. **Traceable**: Every rejection names the rule and the position it fired at
//! 4. **Thread-safe**: No shared mutable state
//!
//! ## Example
//!
//! ```rust
//! use roman_core::{is_valid, to_integer, to_roman};
//!
//! assert!(is_valid("MMMCMXCIX"));
//! assert_eq!(to_integer("MMMCMXCIX").unwrap(), 3999);
//! assert!(!is_valid("IIII"));
//! assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
//! ```

pub mod canonical;
pub mod converter;
pub mod numeral;
pub mod patterns;
pub mod symbols;
pub mod validator;

// Re-export main API at crate root
pub use canonical::to_roman;
pub use converter::{to_integer, weighted_sum};
pub use numeral::Numeral;
pub use symbols::{MAX_VALUE, SYMBOLS};
pub use validator::{is_valid, validate, Rule, Violation, Window};

use thiserror::Error;

/// Errors from validating, converting or generating numerals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("Empty numeral")]
    Empty,

    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Malformed numeral: {0}")]
    RuleViolation(Violation),

    #[error("Value {0} is outside 1..={max}", max = MAX_VALUE)]
    OutOfRange(u32),
}

impl RomanError {
    /// Rule that fired, when the numeral failed a positional rule.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            RomanError::RuleViolation(violation) => Some(violation.rule),
            _ => None,
        }
    }
}
