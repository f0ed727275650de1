//! Station name type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// The display name of a station, which is also its identity.
///
/// Names are trimmed of surrounding whitespace and must be non-empty.
/// Any other text is allowed, including non-ASCII letters, since the
/// network uses Turkish station names.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let kizilay = StationName::parse("  KIZILAY ").unwrap();
/// assert_eq!(kizilay.as_str(), "KIZILAY");
///
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }
        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = InvalidStationName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationName::parse(&s)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing is idempotent once a name has been trimmed
        #[test]
        fn parse_idempotent(s in "[A-ZÇĞİÖŞÜ0-9 -]{1,20}") {
            if let Ok(name) = StationName::parse(&s) {
                let again = StationName::parse(name.as_str()).unwrap();
                prop_assert_eq!(again, name);
            }
        }

        /// Whitespace-only input is always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t\n]{0,8}") {
            prop_assert!(StationName::parse(&s).is_err());
        }
    }
}
