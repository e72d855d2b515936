use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::fs;

fn cfg_json(cli: &CliRunner, args: &[&str], env: &[(&str, &str)]) -> Value {
    let mut full = vec!["cfg"];
    full.extend_from_slice(args);
    let res = cli.run_with_env(&full, "", env);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn cfg_shows_defaults() {
    let cli = CliRunner::new().unwrap();
    let json = cfg_json(&cli, &[], &[]);
    assert_eq!(json["starting_balance"]["value"], 100);
    assert_eq!(json["starting_balance"]["source"], "default");
    assert_eq!(json["data_dir"]["value"], ".");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["log_level"]["value"], "warn");
}

#[test]
fn cli_beats_env_beats_file() {
    let cli = CliRunner::new().unwrap();
    let file = cli.dir().join("lucky9.toml");
    fs::write(&file, "seed = 1\nstarting_balance = 300\nlog_level = \"info\"\n").unwrap();
    let file = file.to_string_lossy().into_owned();

    let json = cfg_json(
        &cli,
        &["--seed", "3"],
        &[("LUCKY9_CONFIG", file.as_str()), ("LUCKY9_SEED", "2")],
    );
    assert_eq!(json["seed"]["value"], 3);
    assert_eq!(json["seed"]["source"], "cli");
    assert_eq!(json["starting_balance"]["value"], 300);
    assert_eq!(json["starting_balance"]["source"], "file");

    let json = cfg_json(&cli, &[], &[("LUCKY9_CONFIG", file.as_str()), ("LUCKY9_SEED", "2")]);
    assert_eq!(json["seed"]["value"], 2);
    assert_eq!(json["seed"]["source"], "env");
}

#[test]
fn configured_starting_balance_applies_to_new_players() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run_with_env(
        &["--name", "Lee"],
        "4\n",
        &[("LUCKY9_STARTING_BALANCE", "250")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Current Balance: 250"));
}

#[test]
fn data_dir_env_moves_the_ledgers() {
    let cli = CliRunner::new().unwrap();
    let data = cli.dir().join("saves");
    let data_str = data.to_string_lossy().into_owned();
    let res = cli.run_with_env(&["--name", "Mo"], "4\n", &[("LUCKY9_DATA_DIR", data_str.as_str())]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(data.join("balances.json").is_file());
    assert!(!cli.dir().join("balances.json").exists());
}

#[test]
fn invalid_configuration_exits_with_two() {
    let cli = CliRunner::new().unwrap();
    let res = cli.run_with_env(&["cfg"], "", &[("LUCKY9_STARTING_BALANCE", "-5")]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr
            .contains("Error: Invalid configuration: starting_balance must be >0")
    );
}
