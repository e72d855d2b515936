use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const CONFIG_VARS: &[&str] = &[
    "LUCKY9_CONFIG",
    "LUCKY9_DATA_DIR",
    "LUCKY9_STARTING_BALANCE",
    "LUCKY9_SEED",
    "LUCKY9_LOG",
    "RUST_LOG",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

impl CliRunner {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_lucky9")),
            temp_dir: TempDir::new()?,
        })
    }

    /// Working directory of every run; also the default data directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str], input: &str) -> CliResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(&self, args: &[&str], input: &str, env: &[(&str, &str)]) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("spawn lucky9");
        {
            let mut stdin = child.stdin.take().expect("stdin piped");
            // The game may exit before reading everything.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("wait for lucky9");
        CliResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
