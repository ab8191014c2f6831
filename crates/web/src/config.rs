use std::path::PathBuf;
use std::time::Duration;
use tagdraw_core::GHOST_DURATION;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:7878";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub addr: String,
    pub assets_dir: PathBuf,
    pub web_dir: PathBuf,
    pub seed: Option<u64>,
    pub ghost_duration: Duration,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            assets_dir: PathBuf::from("assets"),
            web_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("web"),
            seed: None,
            ghost_duration: GHOST_DURATION,
        }
    }
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(addr) = lookup("TAGDRAW_ADDR") {
            config.addr = addr;
        }
        if let Some(dir) = lookup("TAGDRAW_ASSETS") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("TAGDRAW_WEB") {
            config.web_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup("TAGDRAW_SEED") {
            config.seed = Some(parse_seed(&seed)?);
        }
        if let Some(ms) = lookup("TAGDRAW_GHOST_MS") {
            let ms = ms
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "TAGDRAW_GHOST_MS",
                    value: ms.clone(),
                })?;
            config.ghost_duration = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.map_err(|_| ConfigError::InvalidNumber {
        key: "TAGDRAW_SEED",
        value: value.to_string(),
    })
}
