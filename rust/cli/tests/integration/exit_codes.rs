use crate::helpers::cli_runner::CliRunner;

#[test]
fn exit_from_menu_returns_zero() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&[], "Alice\n4\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Enter your name: "));
    assert!(res.stdout.contains("THANKS FOR PLAYING! GOODBYE!"));
}

#[test]
fn closed_stdin_returns_130() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["play", "--name", "Alice"], "");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
fn invalid_menu_choice_is_reprompted() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["--name", "Alice"], "9\n4\n");
    assert_eq!(res.exit_code, 0);
    assert!(
        res.stderr
            .contains("Invalid input. Please enter one of: 1, 2, 3, 4, 5, 6.")
    );
    assert_eq!(res.stdout.matches("Choose an option: ").count(), 2);
}

#[test]
fn unknown_subcommand_returns_two() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["deal"], "");
    assert_eq!(res.exit_code, 2);
    assert!(!res.stderr.is_empty());
}

#[test]
fn help_goes_to_stdout() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run(&["--help"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("leaderboard"));
    assert!(res.stdout.contains("--data-dir"));
}

#[test]
fn leaderboard_subcommand_prints_and_exits() {
    let cli = CliRunner::new().unwrap();
    std::fs::write(
        cli.dir().join("leaderboard.json"),
        r#"{"Zoe": {"wins": 2, "losses": 1, "ties": 0, "total_games": 3}}"#,
    )
    .unwrap();
    let res = cli.run(&["leaderboard"], "");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("LEADERBOARD"));
    assert!(res.stdout.contains("Zoe"));
    assert!(!res.stdout.contains("Playing as"));
}

#[test]
fn in_process_run_uses_the_given_input() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().into_owned();
    let mut stdin = std::io::Cursor::new("6\n4\n");
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = lucky9_cli::run_with_input(
        ["lucky9", "--name", "Sam", "--data-dir", data_dir.as_str()],
        &mut stdin,
        &mut out,
        &mut err,
    );

    assert_eq!(code, 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Balance info for Sam:"));
    assert!(dir.path().join("balances.json").is_file());
}

#[test]
fn garbled_bytes_at_the_menu_are_reprompted() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().into_owned();
    let mut stdin = std::io::Cursor::new(b"Alice\n\xff\xfe\n4\n".to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = lucky9_cli::run_with_input(
        ["lucky9", "--data-dir", data_dir.as_str()],
        &mut stdin,
        &mut out,
        &mut err,
    );

    let err = String::from_utf8(err).unwrap();
    assert_eq!(code, 0, "stderr={}", err);
    assert!(err.contains("Invalid input. Please enter one of: 1, 2, 3, 4, 5, 6."));
    assert!(!err.contains("Interrupted"));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Choose an option: ").count(), 2);
    assert!(text.contains("THANKS FOR PLAYING! GOODBYE!"));
}
