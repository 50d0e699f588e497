//! Runtime configuration loaded from an optional JSON file

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

pub const DEFAULT_SAVE_DIR: &str = "saves";
pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config: {_0}")]
    Io(io::Error),
    #[display("invalid config: {_0}")]
    Json(serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenteConfig {
    /// Seed for every random choice; entropy is used when absent
    pub seed: Option<u64>,
    pub save_dir: PathBuf,
    pub player_name: String,
    pub weights: EvalWeights,
}

impl Default for PenteConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            weights: EvalWeights::default(),
        }
    }
}

impl PenteConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
