//! The depth chart store: per-position ordered rosters.

use std::collections::HashMap;

use crate::error::{ChartError, Result};
use crate::models::{Player, PositionChart, PositionKey};
use crate::report::{self, ReportSink};


/// An in-memory depth chart: one ordered player roster per position.
///
/// The position set and the per-position capacity are fixed at construction.
/// Within a position, vector order is depth order: index 0 is the starter and
/// higher indices are lower-priority backups. Every mutation validates before
/// touching state, so a failed operation leaves the chart unchanged.
#[derive(Debug, Clone)]
pub struct DepthChart {
    /// Position insertion order; drives full-chart iteration.
    order: Vec<PositionKey>,
    positions: HashMap<PositionKey, Vec<Player>>,
    max_depth: usize,
}

impl DepthChart {
    /// Create a chart with the given positions and per-position capacity.
    ///
    /// Position names are normalized (trimmed, upper-cased) before storage.
    /// Fails if the list is empty, contains a blank or duplicate name, or if
    /// `max_depth` is zero.
    pub fn new<S: AsRef<str>>(positions: &[S], max_depth: usize) -> Result<Self> {
        if positions.is_empty() {
            return Err(ChartError::EmptyPositionList);
        }
        if max_depth == 0 {
            return Err(ChartError::InvalidMaxDepth);
        }

        let mut order = Vec::with_capacity(positions.len());
        let mut map = HashMap::with_capacity(positions.len());
        for raw in positions {
            let key =
                PositionKey::new(raw.as_ref()).map_err(|_| ChartError::BlankPositionName)?;
            if map.insert(key.clone(), Vec::new()).is_some() {
                return Err(ChartError::DuplicatePosition {
                    position: key.to_string(),
                });
            }
            order.push(key);
        }

        Ok(Self {
            order,
            positions: map,
            max_depth,
        })
    }

    /// The capacity ceiling shared by every position.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Position names in insertion order.
    pub fn position_keys(&self) -> &[PositionKey] {
        &self.order
    }

    /// Add a player at the end of a position's roster.
    pub fn add_player(&mut self, position: &str, player: Player) -> Result<()> {
        self.insert_player(position, player, None)
    }

    /// Add a player at a specific depth, shifting lower ranks down one.
    ///
    /// A depth beyond the current roster length (but below `max_depth`)
    /// appends instead of leaving a gap.
    pub fn add_player_at_depth(
        &mut self,
        position: &str,
        player: Player,
        depth: usize,
    ) -> Result<()> {
        self.insert_player(position, player, Some(depth))
    }

    fn insert_player(
        &mut self,
        position: &str,
        player: Player,
        depth: Option<usize>,
    ) -> Result<()> {
        let max_depth = self.max_depth;
        let key = PositionKey::new(position)?;
        let entries = match self.positions.get_mut(&key) {
            Some(entries) => entries,
            None => {
                return Err(ChartError::UnknownPosition {
                    position: key.to_string(),
                })
            }
        };

        if entries.len() >= max_depth {
            return Err(ChartError::CapacityExceeded {
                position: key.to_string(),
                max_depth,
            });
        }
        if entries.iter().any(|p| p.number == player.number) {
            return Err(ChartError::DuplicatePlayer {
                number: player.number,
                name: player.name,
                position: key.to_string(),
            });
        }

        match depth {
            Some(depth) if depth >= max_depth => Err(ChartError::InvalidDepth { depth, max_depth }),
            Some(depth) if depth > entries.len() => {
                entries.push(player);
                Ok(())
            }
            Some(depth) => {
                entries.insert(depth, player);
                Ok(())
            }
            None => {
                entries.push(player);
                Ok(())
            }
        }
    }

    /// Remove a player from a position's roster, matching by jersey number.
    ///
    /// On a match the stored record is removed (lower ranks shift up one), a
    /// report line is emitted for it, and it is returned; its name may differ
    /// from the argument's. A missing player is a normal outcome: no
    /// mutation, no report line, `Ok(None)`.
    pub fn remove_player(
        &mut self,
        position: &str,
        player: &Player,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<Player>> {
        let key = PositionKey::new(position)?;
        let entries = match self.positions.get_mut(&key) {
            Some(entries) => entries,
            None => {
                return Err(ChartError::UnknownPosition {
                    position: key.to_string(),
                })
            }
        };

        match entries.iter().position(|p| p.number == player.number) {
            Some(index) => {
                let removed = entries.remove(index);
                sink.line(&report::player_line(&removed));
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    /// Every player ranked strictly behind the given player, nearest first.
    ///
    /// Empty when the player is not on the roster or has no one behind them.
    pub fn backups(&self, position: &str, player: &Player) -> Result<Vec<Player>> {
        let key = PositionKey::new(position)?;
        let entries = match self.positions.get(&key) {
            Some(entries) => entries,
            None => {
                return Err(ChartError::UnknownPosition {
                    position: key.to_string(),
                })
            }
        };

        Ok(match entries.iter().position(|p| p.number == player.number) {
            Some(index) => entries[index + 1..].to_vec(),
            None => Vec::new(),
        })
    }

    /// Emit one report line per backup, or a `<NO LIST>` line if none.
    pub fn report_backups(
        &self,
        position: &str,
        player: &Player,
        sink: &mut dyn ReportSink,
    ) -> Result<()> {
        let backups = self.backups(position, player)?;
        if backups.is_empty() {
            sink.line(report::NO_LIST);
        } else {
            for backup in &backups {
                sink.line(&report::player_line(backup));
            }
        }
        Ok(())
    }

    /// Emit the whole chart: one line per position in insertion order,
    /// followed by a blank line.
    pub fn report_full_chart(&self, sink: &mut dyn ReportSink) {
        for key in &self.order {
            if let Some(players) = self.positions.get(key) {
                sink.line(&report::position_line(key, players));
            }
        }
        sink.line("");
    }

    /// Snapshot of every position's roster, in insertion order.
    ///
    /// Returns copies; callers cannot mutate chart state through
    /// the result.
    pub fn chart_data(&self) -> Vec<PositionChart> {
        self.order
            .iter()
            .filter_map(|key| {
                self.positions.get(key).map(|players| PositionChart {
                    position: key.clone(),
                    players: players.clone(),
                })
            })
            .collect()
    }
}
