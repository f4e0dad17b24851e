//! Optional `nim.toml` configuration for the play binary.
//!
//! A missing file falls back to built-in defaults; a file that exists but
//! does not parse is an error.

use std::path::Path;

use nim_core::{Algorithm, game};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "nim.toml";

/// Default thinking pause before an engine move is applied.
pub const DEFAULT_THINK_MS: u64 = 800;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown algorithm {0:?}, expected \"minimax\" or \"alphabeta\"")]
    UnknownAlgorithm(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pile size a fresh game starts from.
    pub initial_stones: u32,
    /// Thinking pause in milliseconds.
    pub ai_delay_ms: u64,
    /// Algorithm name, parsed by [`CliConfig::algorithm`].
    pub algorithm: String,
    /// Analytics jitter seed; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            initial_stones: game::INITIAL_STONES,
            ai_delay_ms: DEFAULT_THINK_MS,
            algorithm: "alphabeta".to_string(),
            seed: None,
        }
    }
}

impl CliConfig {
    /// Parses the configured algorithm name.
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        Algorithm::from_name(&self.algorithm)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(self.algorithm.clone()))
    }
}

/// Loads [`CONFIG_FILE`] from the working directory.
pub fn load() -> Result<CliConfig, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

pub fn load_from(path: &Path) -> Result<CliConfig, ConfigError> {
    if !path.exists() {
        debug!("no {} found, using defaults", path.display());
        return Ok(CliConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
