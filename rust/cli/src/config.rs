//! Layered configuration: built-in defaults, then a TOML file named by
//! `HULHE_CONFIG`, then `HULHE_*` environment variables. Command-line flags
//! are applied on top by the individual commands.

use std::fs;

use hulhe_engine::rules::{StackMode, TableConfig};
use serde::{Deserialize, Serialize};

/// Stack assignment selectable from the command line and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StackModeSetting {
    Randomized,
    Even,
    CarryOver,
}

impl From<StackModeSetting> for StackMode {
    fn from(s: StackModeSetting) -> Self {
        match s {
            StackModeSetting::Randomized => StackMode::Randomized,
            StackModeSetting::Even => StackMode::Even,
            StackModeSetting::CarryOver => StackMode::CarryOver,
        }
    }
}

impl std::str::FromStr for StackModeSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randomized" | "random" => Ok(Self::Randomized),
            "even" => Ok(Self::Even),
            "carry-over" | "carryover" => Ok(Self::CarryOver),
            other => Err(ConfigError::Invalid(format!("Invalid stack mode: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub total_stack: u32,
    pub big_blind: u32,
    pub min_stack: u32,
    pub stack_mode: StackModeSetting,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            seed: None,
            total_stack: table.total_stack,
            big_blind: table.big_blind,
            min_stack: table.min_stack,
            stack_mode: StackModeSetting::Randomized,
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            total_stack: self.total_stack,
            big_blind: self.big_blind,
            min_stack: self.min_stack,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub total_stack: ValueSource,
    pub big_blind: ValueSource,
    pub min_stack: ValueSource,
    pub stack_mode: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            total_stack: ValueSource::Default,
            big_blind: ValueSource::Default,
            min_stack: ValueSource::Default,
            stack_mode: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {e}"),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HULHE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.total_stack {
            cfg.total_stack = v;
            sources.total_stack = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.min_stack {
            cfg.min_stack = v;
            sources.min_stack = ValueSource::File;
        }
        if let Some(v) = f.stack_mode {
            cfg.stack_mode = v;
            sources.stack_mode = ValueSource::File;
        }
    }

    if let Some(v) = env_value("HULHE_SEED") {
        cfg.seed = Some(parse_env("HULHE_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("HULHE_TOTAL_STACK") {
        cfg.total_stack = parse_env("HULHE_TOTAL_STACK", &v)?;
        sources.total_stack = ValueSource::Env;
    }
    if let Some(v) = env_value("HULHE_BIG_BLIND") {
        cfg.big_blind = parse_env("HULHE_BIG_BLIND", &v)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("HULHE_STACK_MODE") {
        cfg.stack_mode = v.parse()?;
        sources.stack_mode = ValueSource::Env;
    }

    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    total_stack: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    min_stack: Option<u32>,
    #[serde(default)]
    stack_mode: Option<StackModeSetting>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {key}: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.table(), TableConfig::default());
        assert_eq!(cfg.stack_mode, StackModeSetting::Randomized);
    }

    #[test]
    fn stack_mode_names_parse() {
        assert_eq!("even".parse::<StackModeSetting>().unwrap(), StackModeSetting::Even);
        assert_eq!(
            "Carry-Over".parse::<StackModeSetting>().unwrap(),
            StackModeSetting::CarryOver
        );
        assert!("split".parse::<StackModeSetting>().is_err());
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("level = 3").is_err());
        let f: FileConfig = toml::from_str("stack_mode = \"carry-over\"\nseed = 4").unwrap();
        assert_eq!(f.stack_mode, Some(StackModeSetting::CarryOver));
        assert_eq!(f.seed, Some(4));
    }
}
