//! Player identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for jersey numbers.
///
/// A player's jersey number is their identity within a position: two chart
/// entries at the same position may never share one, and removal and backup
/// lookups match on it alone.
///
/// # Examples
///
/// ```rust
/// use depth_chart::JerseyNumber;
///
/// let number = JerseyNumber::new(12);
/// assert_eq!(number.as_u16(), 12);
/// assert_eq!(number.to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JerseyNumber(pub u16);

impl JerseyNumber {
    /// Create a new JerseyNumber from a u16 value.
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    /// Get the underlying u16 value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for JerseyNumber {
    fn from(number: u16) -> Self {
        Self(number)
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rostered player: jersey number plus display name.
///
/// The name is display data only; chart operations never match on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: JerseyNumber,
    pub name: String,
}

impl Player {
    pub fn new(number: impl Into<JerseyNumber>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}
