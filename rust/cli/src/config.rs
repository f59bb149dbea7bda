//! Layered configuration: defaults, then an optional TOML file named by
//! `CABO_CONFIG`, then `CABO_*` environment variables. Command-line flags are
//! applied on top by each command.

use cabo_ai::is_known_ai;
use cabo_engine::player::DEFAULT_NAMES;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const ENV_CONFIG: &str = "CABO_CONFIG";
pub const ENV_SEED: &str = "CABO_SEED";
pub const ENV_PLAYER_NAME: &str = "CABO_PLAYER_NAME";
pub const ENV_AI: &str = "CABO_AI";
pub const ENV_REVEAL_ALL: &str = "CABO_REVEAL_ALL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Name of the human seat
    pub player_name: String,
    /// Computer opponent kind, see [`cabo_ai::AI_KINDS`]
    pub ai: String,
    /// Show every card face-up when rendering (debugging aid)
    pub reveal_all: bool,
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
    pub player_name: ValueSource,
    pub ai: ValueSource,
    pub reveal_all: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            player_name: ValueSource::Default,
            ai: ValueSource::Default,
            reveal_all: ValueSource::Default,
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
            player_name: DEFAULT_NAMES[0].into(),
            ai: "greedy".into(),
            reveal_all: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.reveal_all {
            cfg.reveal_all = v;
            sources.reveal_all = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(ENV_PLAYER_NAME)
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(ENV_AI)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(reveal) = std::env::var(ENV_REVEAL_ALL)
        && !reveal.is_empty()
    {
        cfg.reveal_all =
            parse_bool(&reveal).ok_or_else(|| ConfigError::Invalid("Invalid reveal_all".into()))?;
        sources.reveal_all = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    reveal_all: Option<bool>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    if !is_known_ai(&cfg.ai) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}'",
            cfg.ai
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
