//! Report-line formatting and output sinks.
//!
//! The chart never prints directly: operations that report hand their lines
//! to a caller-supplied [`ReportSink`], so output can go to the console, a
//! capture buffer in tests, or nowhere at all.

use crate::models::{Player, PositionKey};


/// Line emitted when a backups query has nothing to list.
pub const NO_LIST: &str = "<NO LIST>";

/// Append-only consumer of report lines.
pub trait ReportSink {
    /// Consume one line, without a trailing line break.
    fn line(&mut self, line: &str);
}

/// Capture sink for tests and programmatic callers.
impl ReportSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Sink that prints each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Single-player report line: `#12 - Tom Brady`.
pub fn player_line(player: &Player) -> String {
    format!("#{} - {}", player.number, player.name)
}

/// Full-chart position line: `QB - (#12, Tom Brady), (#2, Kyle Trask)`.
///
/// An empty roster renders as the position name with an empty list.
pub fn position_line(position: &PositionKey, players: &[Player]) -> String {
    let entries: Vec<String> = players
        .iter()
        .map(|p| format!("(#{}, {})", p.number, p.name))
        .collect();
    format!("{} - {}", position, entries.join(", "))
}
