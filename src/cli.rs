//! CLI argument definitions and parsing.

use crate::DEFAULT_MAX_DEPTH;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "depth-chart", about = "NFL depth chart bookkeeping CLI")]
pub struct DepthChartCli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the scripted Buccaneers roster walkthrough.
    ///
    /// Builds a QB/LWR chart, ranks the starters, queries backups, and
    /// removes a player, printing each report.
    Demo {
        /// Maximum players per position.
        #[clap(long, short, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Output the final chart as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Narrate each roster move as it happens.
        #[clap(long)]
        verbose: bool,
    },

    /// Exercise ad-hoc adds, a depth-0 jump, and surfaced errors.
    Sample {
        /// Narrate each roster move as it happens.
        #[clap(long)]
        verbose: bool,
    },
}
