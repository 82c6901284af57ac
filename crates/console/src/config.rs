use std::path::{Path, PathBuf};

use serde::Deserialize;

use ruledeck_client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default)]
    pub poll: PollConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PollConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            poll: PollConfig::default(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_server() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_interval_ms() -> u64 {
    1000
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("ruledeck").join("console.yml");
    }
    PathBuf::from("/etc/ruledeck/console.yml")
}

pub fn load_from_file(path: &Path) -> Result<ConsoleConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<ConsoleConfig, LoadError> {
    let cfg: ConsoleConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &ConsoleConfig) -> Result<(), LoadError> {
    if cfg.server.is_empty() {
        return Err(LoadError::Validation("server URL must not be empty".into()));
    }
    if cfg.poll.interval_ms == 0 {
        return Err(LoadError::Validation("poll.interval_ms must be > 0".into()));
    }
    Ok(())
}

/// Base-URL resolution order: `--server` flag, then config file, then the
/// built-in default. An explicitly named config file must load; the default
/// path is optional and silently falls back when absent.
pub fn resolve(
    server_flag: Option<&str>,
    config_path: Option<&str>,
) -> Result<ConsoleConfig, LoadError> {
    let mut cfg = match config_path {
        Some(path) => load_from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                load_from_file(&path)?
            } else {
                ConsoleConfig::default()
            }
        }
    };
    if let Some(server) = server_flag {
        cfg.server = server.trim_end_matches('/').to_string();
    }
    Ok(cfg)
}
