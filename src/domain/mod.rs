//! Domain types for the show catalog with strong typing.
//!
//! Follows the Newtype pattern so a show key can't be mixed up with an
//! arbitrary integer pulled from a request path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a Show in the catalog.
///
/// # Examples
///
/// ```rust
/// use showcase::domain::ShowId;
///
/// let id: ShowId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShowId(i32);

impl ShowId {
    /// Creates a new `ShowId` from a raw i32 value.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `id` is negative. Untrusted input should go
    /// through [`FromStr`] instead.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        debug_assert!(id >= 0, "ShowId should be non-negative");
        Self(id)
    }

    /// Returns the underlying i32 value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

/// Raised when a path segment can't name a stored show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid show id")]
pub struct ParseShowIdError(pub String);

impl FromStr for ShowId {
    type Err = ParseShowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i32>() {
            Ok(id) if id >= 0 => Ok(Self(id)),
            _ => Err(ParseShowIdError(s.to_string())),
        }
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShowId> for i32 {
    fn from(id: ShowId) -> Self {
        id.0
    }
}

impl From<i32> for ShowId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for ShowId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for ShowId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        if id < 0 {
            return Err(serde::de::Error::custom("show id must be non-negative"));
        }
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_path_segments() {
        assert_eq!("7".parse::<ShowId>(), Ok(ShowId::new(7)));
        assert_eq!("0".parse::<ShowId>(), Ok(ShowId::new(0)));
    }

    #[test]
    fn rejects_segments_that_cannot_be_keys() {
        assert!("abc".parse::<ShowId>().is_err());
        assert!("-3".parse::<ShowId>().is_err());
        assert!("".parse::<ShowId>().is_err());
        assert!("99999999999".parse::<ShowId>().is_err());
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "friends".parse::<ShowId>().unwrap_err();
        assert_eq!(err.to_string(), "'friends' is not a valid show id");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&ShowId::new(12)).unwrap();
        assert_eq!(json, "12");

        let back: ShowId = serde_json::from_str("12").unwrap();
        assert_eq!(back.value(), 12);
        assert!(serde_json::from_str::<ShowId>("-1").is_err());
    }
}
