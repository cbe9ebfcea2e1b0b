//! Per-input results for the CLI, built apart from printing.

use roman_core::{to_integer, to_roman, validate, RomanError};
use serde::Serialize;

/// Outcome for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub ok: bool,

    /// Numeral value (`check`, `convert`) or the integer given (`encode`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,

    /// Canonical numeral (`encode`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeral: Option<String>,

    /// Rule id when a positional rule rejected the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    fn success(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ok: true,
            value: None,
            numeral: None,
            rule_id: None,
            error: None,
        }
    }

    fn failure(input: impl Into<String>, error: &RomanError) -> Self {
        Self {
            input: input.into(),
            ok: false,
            value: None,
            numeral: None,
            rule_id: error.rule().map(|rule| rule.id()),
            error: Some(error.to_string()),
        }
    }

    /// Line for `--format text`.
    pub fn to_text(&self) -> String {
        let shown = if self.input.is_empty() {
            "[empty]"
        } else {
            self.input.as_str()
        };
        match (&self.error, &self.numeral, self.value) {
            (Some(error), _, _) => format!("{shown}: invalid ({error})"),
            (None, Some(numeral), _) => format!("{shown}: {numeral}"),
            (None, None, Some(value)) => format!("{shown}: {value}"),
            (None, None, None) => format!("{shown}: valid"),
        }
    }
}

/// Validity of each numeral.
pub fn check(inputs: &[String]) -> Vec<Report> {
    inputs
        .iter()
        .map(|input| match validate(input) {
            Ok(()) => Report::success(input.as_str()),
            Err(e) => Report::failure(input.as_str(), &e),
        })
        .collect()
}

/// Value of each numeral.
pub fn convert(inputs: &[String]) -> Vec<Report> {
    inputs
        .iter()
        .map(|input| match to_integer(input) {
            Ok(value) => Report {
                value: Some(value),
                ..Report::success(input.as_str())
            },
            Err(e) => Report::failure(input.as_str(), &e),
        })
        .collect()
}

/// Canonical numeral for each integer.
pub fn encode(values: &[u32]) -> Vec<Report> {
    values
        .iter()
        .map(|&value| match to_roman(value) {
            Ok(numeral) => Report {
                value: Some(value),
                numeral: Some(numeral),
                ..Report::success(value.to_string())
            },
            Err(e) => Report {
                value: Some(value),
                ..Report::failure(value.to_string(), &e)
            },
        })
        .collect()
}

pub fn all_ok(reports: &[Report]) -> bool {
    reports.iter().all(|r| r.ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_reports_rule() {
        let reports = check(&inputs(&["IV", "IIII", ""]));
        assert!(reports[0].ok);
        assert_eq!(reports[1].rule_id, Some("R3"));
        assert!(!reports[2].ok);
        assert_eq!(reports[2].rule_id, None);
        assert!(!all_ok(&reports));
    }

    #[test]
    fn test_convert_values() {
        let reports = convert(&inputs(&["MCD", "cC"]));
        assert_eq!(reports[0].value, Some(1400));
        assert_eq!(reports[1].value, Some(200));
        assert!(all_ok(&reports));
    }

    #[test]
    fn test_encode_values() {
        let reports = encode(&[3999, 0]);
        assert_eq!(reports[0].numeral.as_deref(), Some("MMMCMXCIX"));
        assert!(!reports[1].ok);
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(check(&inputs(&["XIX"]))[0].to_text(), "XIX: valid");
        assert_eq!(convert(&inputs(&["XLIX"]))[0].to_text(), "XLIX: 49");
        assert_eq!(encode(&[14])[0].to_text(), "14: XIV");
        assert_eq!(
            check(&inputs(&[""]))[0].to_text(),
            "[empty]: invalid (Empty numeral)"
        );
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let json = serde_json::to_string(&check(&inputs(&["V"]))[0]).unwrap();
        assert_eq!(json, r#"{"input":"V","ok":true}"#);
    }
}
