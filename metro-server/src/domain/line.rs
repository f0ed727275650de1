//! Line codes and line definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationName;

/// Maximum length of a line code.
const MAX_CODE_LEN: usize = 8;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A short line code such as `M1` or `A1`.
///
/// Codes are 1 to 8 characters of uppercase ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use metro_server::domain::LineCode;
///
/// let m1 = LineCode::parse("M1").unwrap();
/// assert_eq!(m1.as_str(), "M1");
///
/// assert!(LineCode::parse("m1").is_err());
/// assert_eq!(LineCode::parse_normalized(" m1 ").unwrap(), m1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code. The input must already be uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() || s.len() > MAX_CODE_LEN {
            return Err(InvalidLineCode {
                reason: "must be 1 to 8 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidLineCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(LineCode(s.to_string()))
    }

    /// Parse user input, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLineCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineCode {
    type Error = InvalidLineCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LineCode::parse(&s)
    }
}

impl From<LineCode> for String {
    fn from(code: LineCode) -> Self {
        code.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of the network: its code, display colour and station order.
///
/// The colour is only used for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    pub code: LineCode,
    pub color: String,
    pub stations: Vec<StationName>,
}

impl LineDefinition {
    /// Create a line definition from already-validated parts.
    pub fn new(code: LineCode, color: impl Into<String>, stations: Vec<StationName>) -> Self {
        Self {
            code,
            color: color.into(),
            stations,
        }
    }

    /// Consecutive station pairs served by this line.
    pub fn hops(&self) -> impl Iterator<Item = (&StationName, &StationName)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// An ordered table of line definitions.
///
/// Order matters: it fixes the order in which stations and connections
/// enter the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTable {
    pub lines: Vec<LineDefinition>,
}

impl LineTable {
    /// Create a table from line definitions in order.
    pub fn new(lines: Vec<LineDefinition>) -> Self {
        Self { lines }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the table has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineDefinition> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineTable {
    type Item = &'a LineDefinition;
    type IntoIter = std::slice::Iter<'a, LineDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
