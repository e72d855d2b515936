use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const BALANCES_FILE: &str = "balances.json";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub starting_balance: i64,
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Config {
    pub fn balances_path(&self) -> PathBuf {
        self.data_dir.join(BALANCES_FILE)
    }
    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join(LEADERBOARD_FILE)
    }
    pub fn achievements_path(&self) -> PathBuf {
        self.data_dir.join(ACHIEVEMENTS_FILE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub data_dir: ValueSource,
    pub starting_balance: ValueSource,
    pub seed: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            data_dir: ValueSource::Default,
            starting_balance: ValueSource::Default,
            seed: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Command-line flags win over every other layer.
    pub fn apply_cli(&mut self, data_dir: Option<&Path>, seed: Option<u64>) {
        if let Some(dir) = data_dir {
            self.config.data_dir = dir.to_path_buf();
            self.sources.data_dir = ValueSource::Cli;
        }
        if let Some(seed) = seed {
            self.config.seed = Some(seed);
            self.sources.seed = ValueSource::Cli;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            starting_balance: lucky9_engine::balances::DEFAULT_STARTING_BALANCE,
            seed: None,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_env(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `LUCKY9_CONFIG`, then the
/// `LUCKY9_*` variables, reading variables through `env`.
pub fn load_with_env<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var("LUCKY9_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.data_dir {
            cfg.data_dir = v;
            sources.data_dir = ValueSource::File;
        }
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Some(dir) = var("LUCKY9_DATA_DIR") {
        cfg.data_dir = PathBuf::from(dir);
        sources.data_dir = ValueSource::Env;
    }
    if let Some(balance) = var("LUCKY9_STARTING_BALANCE") {
        cfg.starting_balance = balance
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Some(seed) = var("LUCKY9_SEED") {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(level) = var("LUCKY9_LOG") {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    starting_balance: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance <= 0 {
        return Err(ConfigError::Invalid("starting_balance must be >0".into()));
    }
    Ok(())
}
