//! A validated numeral.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canonical::to_roman;
use crate::converter::to_integer;
use crate::validator::normalize;
use crate::RomanError;

/// An upper-cased numeral that has passed validation, with its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Numeral {
    text: String,
    value: u32,
}

impl Numeral {
    /// Validate and convert `input`.
    pub fn parse(input: &str) -> Result<Self, RomanError> {
        let value = to_integer(input)?;
        Ok(Self {
            text: normalize(input),
            value,
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this spelling is the shortest one for its value.
    pub fn is_canonical(&self) -> bool {
        to_roman(self.value).is_ok_and(|canonical| canonical == self.text)
    }
}

impl FromStr for Numeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Numeral {
    type Error = RomanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl TryFrom<u32> for Numeral {
    type Error = RomanError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(Self {
            text: to_roman(value)?,
            value,
        })
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.text
    }
}

impl PartialOrd for Numeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by value; the spelling only breaks ties.
impl Ord for Numeral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
