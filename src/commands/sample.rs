//! Ad-hoc sample usage command implementation

use crate::{DepthChart, Player, Result, StdoutSink, DEFAULT_MAX_DEPTH};

/// Handle the sample command
pub fn handle_sample(verbose: bool) -> Result<()> {
    let mut chart = DepthChart::new(&["QB", "LWR"], DEFAULT_MAX_DEPTH)?;
    let mut sink = StdoutSink;

    let appended = [
        ("lwr", Player::new(1, "p1")),
        ("lwr", Player::new(2, "p2")),
        ("qb", Player::new(3, "p3")),
        ("qb", Player::new(4, "p4")),
        ("lwr", Player::new(5, "p5")),
    ];
    for (position, player) in appended {
        if verbose {
            println!("Adding #{} {} to {}", player.number, player.name, position);
        }
        chart.add_player(position, player)?;
    }

    // p6 jumps the QB line.
    chart.add_player_at_depth("qb", Player::new(6, "p6"), 0)?;

    // Re-using a rostered number is an error; surface it and keep going.
    if let Err(error) = chart.add_player("qb", Player::new(6, "p6 again")) {
        println!("{error}");
    }

    chart.report_full_chart(&mut sink);

    for player in [
        Player::new(6, "p6"),
        Player::new(3, "p3"),
        Player::new(4, "p4"),
    ] {
        println!("Backups for {} (QB):", player.name);
        chart.report_backups("qb", &player, &mut sink)?;
    }

    // p6 never joined the receivers, so this reports an empty list.
    println!("Backups for p6 (LWR):");
    chart.report_backups("lwr", &Player::new(6, "p6"), &mut sink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_sample_succeeds() {
        assert!(handle_sample(false).is_ok());
    }

    #[test]
    fn test_handle_sample_verbose_succeeds() {
        assert!(handle_sample(true).is_ok());
    }
}
