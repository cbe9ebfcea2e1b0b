//! Positional rules.
//!
//! Each rule looks at a [`Window`] of up to four consecutive magnitudes
//! starting at the current position. Missing lookahead values read as 0,
//! which never compares greater than a real symbol.

use std::fmt;

use serde::Serialize;

use crate::symbols::is_five_family;

/// A named rejection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// V, L or D used as the smaller half of a subtraction ("VX").
    FiveSubtracts,
    /// Subtracted symbol reappears at or above itself after the pair ("IXV", "CMM").
    SubtrahendRecurs,
    /// Subtraction from more than ten times the symbol ("IC").
    SubtractionTooWide,
    /// V, L or D repeated ("VV").
    FiveRepeats,
    /// Repeated symbol followed by something larger ("XXC").
    RepeatBeforeLarger,
    /// Four of the same symbol in a row ("IIII").
    FourRepeats,
    /// Descent followed by a climb past the lead ("XIL").
    ClimbAfterDescent,
    /// Five-family symbol on both sides of a smaller one ("VIV").
    FiveStraddles,
}

impl Rule {
    pub const ALL: [Rule; 8] = [
        Rule::FiveSubtracts,
        Rule::SubtrahendRecurs,
        Rule::SubtractionTooWide,
        Rule::FiveRepeats,
        Rule::RepeatBeforeLarger,
        Rule::FourRepeats,
        Rule::ClimbAfterDescent,
        Rule::FiveStraddles,
    ];

    /// Stable short identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::FiveSubtracts => "S1",
            Rule::SubtrahendRecurs => "S2",
            Rule::SubtractionTooWide => "S3",
            Rule::FiveRepeats => "R1",
            Rule::RepeatBeforeLarger => "R2",
            Rule::FourRepeats => "R3",
            Rule::ClimbAfterDescent => "D1",
            Rule::FiveStraddles => "D2",
        }
    }

    /// One-line explanation of what the rule forbids.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::FiveSubtracts => "V, L and D never subtract",
            Rule::SubtrahendRecurs => {
                "a subtracted symbol may not be followed by a value at least as large"
            }
            Rule::SubtractionTooWide => {
                "a symbol may only subtract from a value at most ten times itself"
            }
            Rule::FiveRepeats => "V, L and D never repeat",
            Rule::RepeatBeforeLarger => "a repeated symbol may not precede a larger one",
            Rule::FourRepeats => "no symbol repeats four times",
            Rule::ClimbAfterDescent => {
                "a smaller symbol after a larger one may not lead into a value above the larger"
            }
            Rule::FiveStraddles => "V, L and D may not reappear after one smaller symbol",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id(), self.description())
    }
}

/// Magnitudes at `i`, `i+1`, `i+2` and `i+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub first: u32,
    pub second: u32,
    /// 0 when past the end.
    pub third: u32,
    pub fourth: Option<u32>,
}

impl Window {
    /// Build the window at `index`. Returns `None` when there is no second value.
    pub fn at(values: &[u32], index: usize) -> Option<Self> {
        let first = *values.get(index)?;
        let second = *values.get(index + 1)?;
        Some(Self {
            first,
            second,
            third: values.get(index + 2).copied().unwrap_or(0),
            fourth: values.get(index + 3).copied(),
        })
    }

    /// The first three magnitudes, as reported in a violation.
    pub fn head(&self) -> [u32; 3] {
        [self.first, self.second, self.third]
    }
}

/// S1..S3, for `first < second`.
pub fn check_subtraction(w: &Window) -> Option<Rule> {
    if is_five_family(w.first) {
        return Some(Rule::FiveSubtracts);
    }
    if w.first <= w.third {
        return Some(Rule::SubtrahendRecurs);
    }
    if w.first * 10 < w.second {
        return Some(Rule::SubtractionTooWide);
    }
    None
}

/// R1..R3, for `first == second`.
pub fn check_repetition(w: &Window) -> Option<Rule> {
    if is_five_family(w.first) {
        return Some(Rule::FiveRepeats);
    }
    if w.second < w.third {
        return Some(Rule::RepeatBeforeLarger);
    }
    if w.second == w.third && w.fourth == Some(w.third) {
        return Some(Rule::FourRepeats);
    }
    None
}

/// D1..D2, for `first > second`.
pub fn check_descent(w: &Window) -> Option<Rule> {
    if w.first < w.third {
        return Some(Rule::ClimbAfterDescent);
    }
    if is_five_family(w.first) && w.first == w.third {
        return Some(Rule::FiveStraddles);
    }
    None
}

/// Dispatch on how `first` relates to `second`.
pub fn check_window(w: &Window) -> Option<Rule> {
    use std::cmp::Ordering;

    match w.first.cmp(&w.second) {
        Ordering::Less => check_subtraction(w),
        Ordering::Equal => check_repetition(w),
        Ordering::Greater => check_descent(w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(first: u32, second: u32, third: u32, fourth: Option<u32>) -> Window {
        Window {
            first,
            second,
            third,
            fourth,
        }
    }

    #[test]
    fn test_window_at_pads_with_zero() {
        let values = [10, 1, 10];
        assert_eq!(Window::at(&values, 0), Some(window(10, 1, 10, None)));
        assert_eq!(Window::at(&values, 1), Some(window(1, 10, 0, None)));
        assert_eq!(Window::at(&values, 2), None);
        assert_eq!(Window::at(&[1, 1, 1, 1], 0), Some(window(1, 1, 1, Some(1))));
    }

    #[test]
    fn test_subtraction_rules() {
        // VX
        assert_eq!(check_subtraction(&window(5, 10, 0, None)), Some(Rule::FiveSubtracts));
        // IXV, CMM, XLX
        assert_eq!(check_subtraction(&window(1, 10, 5, None)), Some(Rule::SubtrahendRecurs));
        assert_eq!(
            check_subtraction(&window(100, 1000, 1000, None)),
            Some(Rule::SubtrahendRecurs)
        );
        assert_eq!(check_subtraction(&window(10, 50, 10, None)), Some(Rule::SubtrahendRecurs));
        // IC
        assert_eq!(
            check_subtraction(&window(1, 100, 0, None)),
            Some(Rule::SubtractionTooWide)
        );
        // IX, XLI
        assert_eq!(check_subtraction(&window(1, 10, 0, None)), None);
        assert_eq!(check_subtraction(&window(10, 50, 1, None)), None);
    }

    #[test]
    fn test_repetition_rules() {
        assert_eq!(check_repetition(&window(5, 5, 0, None)), Some(Rule::FiveRepeats));
        assert_eq!(check_repetition(&window(10, 10, 100, None)), Some(Rule::RepeatBeforeLarger));
        assert_eq!(check_repetition(&window(1, 1, 1, Some(1))), Some(Rule::FourRepeats));
        assert_eq!(check_repetition(&window(1, 1, 1, None)), None);
        assert_eq!(check_repetition(&window(10, 10, 10, Some(1))), None);
        assert_eq!(check_repetition(&window(100, 100, 10, None)), None);
    }

    #[test]
    fn test_descent_rules() {
        // XIL
        assert_eq!(check_descent(&window(10, 1, 50, None)), Some(Rule::ClimbAfterDescent));
        // VIV
        assert_eq!(check_descent(&window(5, 1, 5, None)), Some(Rule::FiveStraddles));
        // LIX, XIX
        assert_eq!(check_descent(&window(50, 1, 10, None)), None);
        assert_eq!(check_descent(&window(10, 1, 10, None)), None);
    }

    #[test]
    fn test_check_window_dispatch() {
        assert_eq!(check_window(&window(1, 5, 0, None)), None);
        assert_eq!(check_window(&window(5, 5, 0, None)), Some(Rule::FiveRepeats));
        assert_eq!(check_window(&window(5, 1, 5, None)), Some(Rule::FiveStraddles));
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<&str> = Rule::ALL.iter().map(Rule::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Rule::ALL.len());
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::FourRepeats.to_string(), "R3: no symbol repeats four times");
    }
}
