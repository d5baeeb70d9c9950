//! Position name handling and normalization.

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized position name.
///
/// Position lookups are case- and whitespace-insensitive: `" qb "`, `"qb"`,
/// and `"QB"` all address the same chart entry. Construction is the single
/// normalization boundary; a `PositionKey` always holds the trimmed,
/// upper-cased form.
///
/// # Examples
///
/// ```rust
/// use depth_chart::PositionKey;
///
/// let key = PositionKey::new("  lwr ")?;
/// assert_eq!(key.as_str(), "LWR");
/// # Ok::<(), depth_chart::ChartError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey(String);

impl PositionKey {
    /// Normalize a raw position name, rejecting blank input.
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ChartError::BlankPosition);
        }
        Ok(Self(normalized))
    }

    /// Get the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
