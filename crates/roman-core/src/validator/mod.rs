//! Numeral validation.
//!
//! A candidate passes three gates in order:
//! 1. It is not empty.
//! 2. After an ASCII upper-case fold, it matches `^[MDCLXVI]+$`.
//! 3. No positional [`Rule`] fires anywhere in one left-to-right scan.

mod rules;

pub use rules::{check_descent, check_repetition, check_subtraction, check_window, Rule, Window};

use std::fmt;

use serde::Serialize;

use crate::patterns;
use crate::symbols::letter_value;
use crate::RomanError;

/// A positional rule that rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,

    /// Character index where the window starts
    pub position: usize,

    /// `[first, second, third]` magnitudes at `position` (third is 0 past the end)
    pub window: [u32; 3],
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at position {}: {}",
            self.rule.id(),
            self.position,
            self.rule.description()
        )
    }
}

/// Fold to the canonical case. Only ASCII letters change.
pub fn normalize(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Quick yes/no form of [`validate`].
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validate a candidate and report the first failure.
pub fn validate(input: &str) -> Result<(), RomanError> {
    let result = check(input);
    match &result {
        Err(RomanError::RuleViolation(v)) => {
            tracing::debug!(input, rule = v.rule.id(), position = v.position, "rejected numeral");
        }
        Err(e) => tracing::debug!(input, error = %e, "rejected numeral"),
        Ok(()) => {}
    }
    result
}

fn check(input: &str) -> Result<(), RomanError> {
    if input.is_empty() {
        return Err(RomanError::Empty);
    }

    let normalized = normalize(input);
    // Non-empty and free of foreign characters is exactly a full class match.
    if let Some((position, character)) = patterns::first_foreign_char(&normalized) {
        return Err(RomanError::InvalidCharacter {
            character,
            position,
        });
    }

    let values: Vec<u32> = normalized.chars().filter_map(letter_value).collect();
    scan(&values).map_or(Ok(()), |violation| Err(RomanError::RuleViolation(violation)))
}

/// Run every window through the rules. Returns the leftmost violation.
fn scan(values: &[u32]) -> Option<Violation> {
    (0..values.len()).find_map(|position| {
        let window = Window::at(values, position)?;
        check_window(&window).map(|rule| Violation {
            rule,
            position,
            window: window.head(),
        })
    })
}
