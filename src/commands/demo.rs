//! Scripted requirement walkthrough command implementation

use crate::{DepthChart, Player, Result, StdoutSink};

/// Handle the demo command
pub fn handle_demo(max_depth: usize, as_json: bool, verbose: bool) -> Result<()> {
    let mut chart = DepthChart::new(&["QB", "LWR"], max_depth)?;
    let mut sink = StdoutSink;

    let ranked = [
        ("QB", Player::new(12, "Tom Brady"), 0),
        ("QB", Player::new(11, "Blaine Gabbert"), 1),
        ("QB", Player::new(2, "Kyle Trask"), 2),
        ("LWR", Player::new(13, "Mike Evans"), 0),
        ("LWR", Player::new(1, "Jaelon Darden"), 1),
        ("LWR", Player::new(10, "Scott Miller"), 2),
    ];
    for (position, player, depth) in ranked {
        if verbose {
            println!(
                "Adding #{} {} to {} at depth {}",
                player.number, player.name, position, depth
            );
        }
        chart.add_player_at_depth(position, player, depth)?;
    }

    let queries = [
        ("QB", Player::new(12, "Tom Brady")),
        ("LWR", Player::new(1, "Jaelon Darden")),
        ("QB", Player::new(13, "Mike Evans")),
        ("QB", Player::new(11, "Blaine Gabbert")),
        ("QB", Player::new(2, "Kyle Trask")),
    ];
    for (position, player) in queries {
        println!("Backups for {} ({}):", player.name, position);
        chart.report_backups(position, &player, &mut sink)?;
    }

    if !as_json {
        chart.report_full_chart(&mut sink);
    }

    if verbose {
        println!("Removing Mike Evans from LWR");
    }
    chart.remove_player("LWR", &Player::new(13, "Mike Evans"), &mut sink)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&chart.chart_data())?);
    } else {
        chart.report_full_chart(&mut sink);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;

    #[test]
    fn test_handle_demo_succeeds_at_default_depth() {
        assert!(handle_demo(5, false, false).is_ok());
    }

    #[test]
    fn test_handle_demo_json_output() {
        assert!(handle_demo(5, true, false).is_ok());
    }

    #[test]
    fn test_handle_demo_fails_when_chart_too_shallow() {
        // Three quarterbacks do not fit a two-deep chart.
        let result = handle_demo(2, false, false);

        match result.unwrap_err() {
            ChartError::CapacityExceeded { position, max_depth } => {
                assert_eq!(position, "QB");
                assert_eq!(max_depth, 2);
            }
            other => panic!("Expected CapacityExceeded, got {other:?}"),
        }
    }
}
