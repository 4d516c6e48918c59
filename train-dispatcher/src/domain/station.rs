//! Station name type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A valid station name.
///
/// Station names are non-empty and consist of ASCII letters, digits and
/// underscores. This is exactly the alphabet the map format can carry:
/// `,`, `-`, `:`, `#` and whitespace are all structural characters there.
/// The type guarantees that any `StationName` value is valid by
/// construction, and clones share the backing string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(Arc<str>);

impl StationName {
    /// Parse a station name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        if s.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                return Err(InvalidStationName {
                    reason: "must contain only ASCII letters, digits and underscores",
                });
            }
        }

        Ok(StationName(Arc::from(s)))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.as_str())
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station names.
    fn valid_name() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9_]{1,16}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original.
        #[test]
        fn roundtrip(s in valid_name()) {
            let name = StationName::parse(&s).unwrap();
            prop_assert_eq!(name.as_str(), s.as_str());
        }

        /// Any name over the valid alphabet parses.
        #[test]
        fn valid_always_parses(s in valid_name()) {
            prop_assert!(StationName::parse(&s).is_ok());
        }

        /// Names containing a structural character are always rejected.
        #[test]
        fn structural_rejected(
            prefix in valid_name(),
            c in prop::sample::select(vec!['-', ',', ':', '#', ' ', '\t']),
            suffix in valid_name(),
        ) {
            let s = format!("{prefix}{c}{suffix}");
            prop_assert!(StationName::parse(&s).is_err());
        }
    }
}
