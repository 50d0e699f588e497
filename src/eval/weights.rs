//! Scoring weights for move evaluation
//!
//! The four weights are ordered so that one completed five outweighs any
//! capture, and one capture outweighs any amount of building.

use serde::{Deserialize, Serialize};

/// Weights applied to the signals read back after a simulated placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per completed five in a row
    pub win: i64,
    /// Per captured pair, also the threshold for a capture classification
    pub capture: i64,
    /// Per n-in-a-row formed, multiplied by n squared
    pub build: i64,
    /// Per lane where the mover's own pair becomes capturable
    pub capture_risk: i64,
}

impl EvalWeights {
    pub const WIN: i64 = 10_000;
    pub const CAPTURE: i64 = 2_000;
    pub const BUILD: i64 = 5;
    pub const CAPTURE_RISK: i64 = 2_000;
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win: Self::WIN,
            capture: Self::CAPTURE,
            build: Self::BUILD,
            capture_risk: Self::CAPTURE_RISK,
        }
    }
}
