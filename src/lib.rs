//! NFL Depth Chart Library
//!
//! A Rust library for maintaining per-position NFL depth charts: ordered
//! player rosters with validated insertion at an arbitrary rank, removal,
//! backup lookup, and full-chart reporting.
//!
//! ## Features
//!
//! - **Ranked Insertion**: Add a player at a specific depth, shifting lower
//!   ranks down, or append to the end of the chart
//! - **Backup Lookup**: List every player ranked behind a given player, in
//!   rank order
//! - **Validated Mutation**: Capacity, duplicate, and depth-range checks run
//!   before any state changes, so the chart is never left half-updated
//! - **Pluggable Reporting**: Report lines go to a caller-supplied sink, so
//!   output can be captured, redirected, or dropped
//! - **JSON Output**: Chart snapshots serialize via serde for machine
//!   consumption
//!
//! ## Quick Start
//!
//! ```rust
//! use depth_chart::{DepthChart, Player, DEFAULT_MAX_DEPTH};
//!
//! # fn main() -> depth_chart::Result<()> {
//! let mut chart = DepthChart::new(&["QB", "LWR"], DEFAULT_MAX_DEPTH)?;
//!
//! chart.add_player("QB", Player::new(12, "Tom Brady"))?;
//! chart.add_player_at_depth("QB", Player::new(2, "Kyle Trask"), 1)?;
//!
//! let backups = chart.backups("QB", &Player::new(12, "Tom Brady"))?;
//! assert_eq!(backups.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use chart::DepthChart;
pub use error::{ChartError, Result};
pub use models::{JerseyNumber, Player, PositionChart, PositionKey};
pub use report::{ReportSink, StdoutSink};

pub const DEFAULT_MAX_DEPTH: usize = 5;
