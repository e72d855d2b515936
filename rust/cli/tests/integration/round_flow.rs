use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::fs;

fn read_json(runner: &CliRunner, file: &str) -> Value {
    let text = fs::read_to_string(runner.dir().join(file)).expect("ledger written");
    serde_json::from_str(&text).expect("ledger is JSON")
}

fn seed_balance(runner: &CliRunner, player: &str, initial: i64, current: i64) {
    let doc = format!(
        r#"{{"{}": {{"initial_balance": {}, "current_balance": {}}}}}"#,
        player, initial, current
    );
    fs::write(runner.dir().join("balances.json"), doc).unwrap();
}

#[test]
fn all_in_bet_settles_consistently() {
    let cli = CliRunner::new().unwrap();
    seed_balance(&cli, "Bob", 100, 100);

    let res = cli.run(&["--name", "Bob", "--seed", "42"], "1\n100\nstand\nno\n4\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let board = read_json(&cli, "leaderboard.json");
    let bob = &board["Bob"];
    assert_eq!(bob["total_games"], 1);
    let balance = read_json(&cli, "balances.json")["Bob"]["current_balance"]
        .as_i64()
        .unwrap();

    if bob["wins"] == 1 {
        assert_eq!(balance, 200);
        assert!(res.stdout.contains("Player wins!"));
    } else if bob["losses"] == 1 {
        // ruined, so half the initial balance comes back
        assert_eq!(balance, 50);
        assert!(res.stdout.contains("Banker wins!"));
    } else {
        assert_eq!(bob["ties"], 1);
        assert_eq!(balance, 100);
        assert!(res.stdout.contains("It's a tie!"));
    }
}

#[test]
fn invalid_bets_are_reprompted() {
    let cli = CliRunner::new().unwrap();
    seed_balance(&cli, "Carol", 100, 50);

    let res = cli.run(
        &["--name", "Carol", "--seed", "5"],
        "1\n80\n0\nabc\n30\nstand\nno\n4\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(
        res.stderr
            .matches("Invalid bet amount. Must be between 1 and 50.")
            .count(),
        2
    );
    assert!(res.stderr.contains("Invalid input. Please enter a valid number."));
    assert_eq!(res.stdout.matches("Enter your bet amount (1 - 50): ").count(), 4);
    assert_eq!(read_json(&cli, "leaderboard.json")["Carol"]["total_games"], 1);
}

#[test]
fn same_seed_replays_the_same_round() {
    let input = "1\n10\nhit\nyes\n4\n";
    let first = CliRunner::new().unwrap().run(&["--name", "Ann", "--seed", "2024"], input);
    let second = CliRunner::new().unwrap().run(&["--name", "Ann", "--seed", "2024"], input);
    assert_eq!(first.exit_code, 0);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn action_history_on_request() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["--name", "Hal", "--seed", "9"], "1\n10\nstand\nyes\n4\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("ACTION HISTORY (Playing as \"Hal\")"));
    assert!(res.stdout.contains("Player's initial hand: ["));
    assert!(res.stdout.contains("Player stands with total: "));
}

#[test]
fn empty_balance_skips_the_round() {
    let cli = CliRunner::new().unwrap();
    seed_balance(&cli, "Ivy", 100, 0);

    let res = cli.run(&["--name", "Ivy"], "1\nyes\n4\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Ivy, your balance is 0. Cannot place a bet."));
    assert!(res.stdout.contains("Round skipped."));
    assert!(!res.stdout.contains("Enter your bet amount"));
    assert!(res.stdout.contains("Do you want to view the action history? (yes/no): "));
    assert!(res.stdout.contains("ACTION HISTORY (Playing as \"Ivy\")"));
    assert!(!res.stdout.contains("Player's hand"));
}

#[test]
fn ledgers_are_pretty_printed_with_four_spaces() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["--name", "Jo", "--seed", "1"], "1\n10\nstand\nno\n4\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let text = fs::read_to_string(cli.dir().join("balances.json")).unwrap();
    assert!(text.starts_with("{\n    \"Jo\": {\n        \""), "{}", text);
}

#[test]
fn balance_view_shows_profit() {
    let cli = CliRunner::new().unwrap();
    seed_balance(&cli, "Kim", 100, 130);
    let res = cli.run(&["--name", "Kim"], "6\n4\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Balance info for Kim:"));
    assert!(res.stdout.contains("  Profit: 30"));
}
