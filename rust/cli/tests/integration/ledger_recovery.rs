use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::fs;

#[test]
fn corrupt_leaderboard_starts_fresh() {
    let cli = CliRunner::new().unwrap();
    fs::write(cli.dir().join("leaderboard.json"), "{ this is not json").unwrap();

    let res = cli.run(&["--name", "Ned", "--seed", "4"], "1\n10\nstand\nno\n4\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.contains("Error loading leaderboard:"));

    let text = fs::read_to_string(cli.dir().join("leaderboard.json")).unwrap();
    let board: Value = serde_json::from_str(&text).expect("rewritten as JSON");
    assert_eq!(board["Ned"]["total_games"], 1);
}

#[test]
fn non_object_balances_are_replaced() {
    let cli = CliRunner::new().unwrap();
    fs::write(cli.dir().join("balances.json"), "[100, 200]").unwrap();

    let res = cli.run(&["--name", "Ola"], "4\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Error loading balances:"));
    assert!(res.stdout.contains("Current Balance: 100"));
}

#[test]
fn malformed_balance_entries_are_skipped() {
    let cli = CliRunner::new().unwrap();
    fs::write(
        cli.dir().join("balances.json"),
        r#"{"Pat": {"initial_balance": 100, "current_balance": 70}, "Quinn": "lots"}"#,
    )
    .unwrap();

    let res = cli.run(&["--name", "Pat"], "4\n");
    assert_eq!(res.exit_code, 0);
    assert!(
        res.stderr
            .contains("WARNING: Skipping invalid balance entry for player Quinn")
    );
    assert!(res.stdout.contains("Current Balance: 70"));
}

#[test]
fn achievements_view_reads_existing_file() {
    let cli = CliRunner::new().unwrap();
    fs::write(
        cli.dir().join("achievements.json"),
        r#"{"Rae": {"Lucky Nine Master": "You achieved a perfect 9!"}}"#,
    )
    .unwrap();

    let res = cli.run(&["--name", "Rae"], "5\n4\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("ACHIEVEMENTS (Playing as \"Rae\")"));
    assert!(
        res.stdout
            .contains("Lucky Nine Master: You achieved a perfect 9!")
    );
}
