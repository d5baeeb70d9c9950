//! Integration tests driving the public depth chart API

use depth_chart::{ChartError, DepthChart, Player, DEFAULT_MAX_DEPTH};

fn capture() -> Vec<String> {
    Vec::new()
}

#[test]
fn test_requirement_scenario_end_to_end() {
    let mut chart = DepthChart::new(&["QB", "LWR"], DEFAULT_MAX_DEPTH).unwrap();

    chart
        .add_player_at_depth("QB", Player::new(12, "Tom Brady"), 0)
        .unwrap();
    chart
        .add_player_at_depth("QB", Player::new(11, "Blaine Gabbert"), 1)
        .unwrap();
    chart
        .add_player_at_depth("QB", Player::new(2, "Kyle Trask"), 2)
        .unwrap();

    chart
        .add_player_at_depth("LWR", Player::new(13, "Mike Evans"), 0)
        .unwrap();
    chart
        .add_player_at_depth("LWR", Player::new(1, "Jaelon Darden"), 1)
        .unwrap();
    chart
        .add_player_at_depth("LWR", Player::new(10, "Scott Miller"), 2)
        .unwrap();

    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(12, "Tom Brady"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["#11 - Blaine Gabbert", "#2 - Kyle Trask"]);

    let mut lines = capture();
    chart
        .report_backups("LWR", &Player::new(1, "Jaelon Darden"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["#10 - Scott Miller"]);

    // Mike Evans is a receiver; he has no spot on the QB chart.
    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(13, "Mike Evans"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["<NO LIST>"]);

    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(11, "Blaine Gabbert"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["#2 - Kyle Trask"]);

    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(2, "Kyle Trask"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["<NO LIST>"]);

    let mut lines = capture();
    chart.report_full_chart(&mut lines);
    assert_eq!(
        lines,
        vec![
            "QB - (#12, Tom Brady), (#11, Blaine Gabbert), (#2, Kyle Trask)",
            "LWR - (#13, Mike Evans), (#1, Jaelon Darden), (#10, Scott Miller)",
            "",
        ]
    );

    let mut lines = capture();
    let removed = chart
        .remove_player("LWR", &Player::new(13, "Mike Evans"), &mut lines)
        .unwrap();
    assert_eq!(removed, Some(Player::new(13, "Mike Evans")));
    assert_eq!(lines, vec!["#13 - Mike Evans"]);

    let mut lines = capture();
    chart.report_full_chart(&mut lines);
    assert_eq!(
        lines,
        vec![
            "QB - (#12, Tom Brady), (#11, Blaine Gabbert), (#2, Kyle Trask)",
            "LWR - (#1, Jaelon Darden), (#10, Scott Miller)",
            "",
        ]
    );
}

#[test]
fn test_capacity_scenario_names_position_and_max_depth() {
    let mut chart = DepthChart::new(&["QB"], DEFAULT_MAX_DEPTH).unwrap();
    for number in 1..=5u16 {
        chart
            .add_player("QB", Player::new(number, format!("p{number}")))
            .unwrap();
    }

    let result = chart.add_player("QB", Player::new(6, "p6"));

    let error = result.unwrap_err();
    match &error {
        ChartError::CapacityExceeded { position, max_depth } => {
            assert_eq!(position, "QB");
            assert_eq!(*max_depth, 5);
        }
        other => panic!("Expected CapacityExceeded, got {other:?}"),
    }
    let message = error.to_string();
    assert!(message.contains("QB"));
    assert!(message.contains('5'));
}

#[test]
fn test_positions_are_case_and_whitespace_insensitive_across_operations() {
    let mut chart = DepthChart::new(&["qb"], DEFAULT_MAX_DEPTH).unwrap();

    chart.add_player(" QB ", Player::new(12, "Tom Brady")).unwrap();
    chart.add_player("Qb", Player::new(2, "Kyle Trask")).unwrap();

    let backups = chart.backups("qB", &Player::new(12, "Tom Brady")).unwrap();
    assert_eq!(backups, vec![Player::new(2, "Kyle Trask")]);

    let mut lines = capture();
    let removed = chart
        .remove_player("  qb", &Player::new(2, "Kyle Trask"), &mut lines)
        .unwrap();
    assert!(removed.is_some());
}

#[test]
fn test_removed_player_no_longer_has_backups() {
    let mut chart = DepthChart::new(&["QB"], DEFAULT_MAX_DEPTH).unwrap();
    chart.add_player("QB", Player::new(12, "Tom Brady")).unwrap();
    chart.add_player("QB", Player::new(2, "Kyle Trask")).unwrap();

    let mut lines = capture();
    chart
        .remove_player("QB", &Player::new(12, "Tom Brady"), &mut lines)
        .unwrap();

    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(12, "Tom Brady"), &mut lines)
        .unwrap();
    assert_eq!(lines, vec!["<NO LIST>"]);
}

#[test]
fn test_chart_data_serializes_to_json() {
    let mut chart = DepthChart::new(&["QB", "LWR"], DEFAULT_MAX_DEPTH).unwrap();
    chart.add_player("QB", Player::new(12, "Tom Brady")).unwrap();

    let value = serde_json::to_value(chart.chart_data()).unwrap();

    assert_eq!(value[0]["position"], "QB");
    assert_eq!(value[0]["players"][0]["number"], 12);
    assert_eq!(value[0]["players"][0]["name"], "Tom Brady");
    assert_eq!(value[1]["position"], "LWR");
    assert!(value[1]["players"].as_array().unwrap().is_empty());
}

#[test]
fn test_report_sink_collects_across_operations() {
    let mut chart = DepthChart::new(&["QB"], DEFAULT_MAX_DEPTH).unwrap();
    chart.add_player("QB", Player::new(12, "Tom Brady")).unwrap();
    chart.add_player("QB", Player::new(2, "Kyle Trask")).unwrap();

    // One sink can accumulate a whole session's report.
    let mut lines = capture();
    chart
        .report_backups("QB", &Player::new(12, "Tom Brady"), &mut lines)
        .unwrap();
    chart
        .remove_player("QB", &Player::new(2, "Kyle Trask"), &mut lines)
        .unwrap();
    chart.report_full_chart(&mut lines);

    assert_eq!(
        lines,
        vec!["#2 - Kyle Trask", "#2 - Kyle Trask", "QB - (#12, Tom Brady)", ""]
    );
}
