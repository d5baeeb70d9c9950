//! Output models used for printing and JSON serialization.

use super::{Player, PositionKey};
use serde::Serialize;

/// One position's ordered players, starter first.
///
/// A copy of chart state, designed for easy JSON serialization;
/// mutating it never touches the chart it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionChart {
    /// Normalized position name.
    pub position: PositionKey,
    /// Players in rank order; index 0 is the starter.
    pub players: Vec<Player>,
}
