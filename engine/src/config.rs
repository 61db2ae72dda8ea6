//! Map-generation parameters.
//!
//! Tunables for the procedural generator, deserializable from a JSON file so
//! referee deployments can reshape maps without a rebuild. Missing fields
//! fall back to the defaults the stock game ships with.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Parameters driving the stochastic map generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GenParams {
    /// Probability that a cell starts passable in the initial random fill.
    #[serde(default = "default_land_chance")]
    pub land_chance: f32,
    /// Number of cellular-automaton smoothing passes.
    #[serde(default = "default_automaton_iterations")]
    pub automaton_iterations: u32,
    /// Minimum passable neighbours (of 8) for a cell to stay passable.
    #[serde(default = "default_smooth_threshold")]
    pub smooth_threshold: u32,
}

fn default_land_chance() -> f32 {
    0.5
}

fn default_automaton_iterations() -> u32 {
    2
}

fn default_smooth_threshold() -> u32 {
    5
}

impl Default for GenParams {
    fn default() -> Self {
        GenParams {
            land_chance: default_land_chance(),
            automaton_iterations: default_automaton_iterations(),
            smooth_threshold: default_smooth_threshold(),
        }
    }
}

/// Errors that can occur while loading generation parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GenParams {
    /// Loads parameters from a JSON file.
    pub fn load(path: &Path) -> Result<GenParams, ConfigError> {
        let data = fs::read_to_string(path)?;
        let params = serde_json::from_str(&data)?;
        Ok(params)
    }
}
