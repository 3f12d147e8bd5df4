use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

use super::InvalidInput;

/// Trim surrounding whitespace and lowercase.
///
/// Both required items and possessions go through this, so matching is
/// insensitive to case and padding on either side.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized, non-empty item name (e.g. `driving license`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Item(NonEmptyString);

impl Item {
    /// Creates a new `Item`, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyItem`] if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, InvalidInput> {
        NonEmptyString::new(normalize(raw))
            .map(Self)
            .map_err(|_| InvalidInput::EmptyItem)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for Item {
    type Error = InvalidInput;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Item {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl FromStr for Item {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Item {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
