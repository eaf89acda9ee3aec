use chessort_engine::round::DEFAULT_MAX_RETRIES;
use chessort_engine::schedule::StrategyKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub max_retries: u32,
    pub strategy: StrategyKind,
    pub format: OutputFormat,
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
    pub max_retries: ValueSource,
    pub strategy: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            max_retries: ValueSource::Default,
            strategy: ValueSource::Default,
            format: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_retries: DEFAULT_MAX_RETRIES,
            strategy: StrategyKind::Randomized,
            format: OutputFormat::Text,
        }
    }
}

pub const CONFIG_ENV: &str = "CHESSORT_CONFIG";
pub const SEED_ENV: &str = "CHESSORT_SEED";
pub const MAX_RETRIES_ENV: &str = "CHESSORT_MAX_RETRIES";
pub const STRATEGY_ENV: &str = "CHESSORT_STRATEGY";
pub const FORMAT_ENV: &str = "CHESSORT_FORMAT";

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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `CHESSORT_CONFIG`, then `CHESSORT_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_retries {
            cfg.max_retries = v;
            sources.max_retries = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(retries) = std::env::var(MAX_RETRIES_ENV)
        && !retries.is_empty()
    {
        cfg.max_retries = retries.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid {}: {}", MAX_RETRIES_ENV, retries))
        })?;
        sources.max_retries = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var(STRATEGY_ENV)
        && !strategy.is_empty()
    {
        cfg.strategy = strategy
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", STRATEGY_ENV, e)))?;
        sources.strategy = ValueSource::Env;
    }
    if let Ok(format) = std::env::var(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = OutputFormat::from_str(&format, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", FORMAT_ENV, format)))?;
        sources.format = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    max_retries: Option<u32>,
    #[serde(default)]
    strategy: Option<StrategyKind>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    crate::validation::validate_max_retries(cfg.max_retries)
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
