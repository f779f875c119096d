//! Search configuration and validation.

use hp_core::errors::{ErrorInfo, HpError};
use serde::{Deserialize, Serialize};

/// Parameters governing a replica-exchange search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Energy at which the search stops (an upper bound on the optimum,
    /// so it is never positive).
    pub target_energy: i32,
    /// Number of replicas on the temperature ladder.
    #[serde(default = "default_replicas")]
    pub replicas: usize,
    /// Temperature of the coldest replica.
    #[serde(default = "default_t_min")]
    pub t_min: u32,
    /// Upper end of the temperature range (exclusive for the ladder).
    #[serde(default = "default_t_max")]
    pub t_max: u32,
    /// Probability that an interior residue attempts a pull move.
    #[serde(default = "default_pull_probability")]
    pub pull_probability: f64,
    /// Inner Metropolis steps per replica per round.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Cap on outer rounds; the search stops here even when the target
    /// was not reached.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
    /// Grid side length as a multiple of the sequence length.
    #[serde(default = "default_grid_factor")]
    pub grid_factor: usize,
    /// Master seed; every replica and the exchange stream derive their
    /// own substream from it.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_replicas() -> usize {
    5
}

fn default_t_min() -> u32 {
    160
}

fn default_t_max() -> u32 {
    220
}

fn default_pull_probability() -> f64 {
    0.5
}

fn default_iterations() -> usize {
    500
}

fn default_max_rounds() -> usize {
    1_000
}

fn default_grid_factor() -> usize {
    hp_lattice::GRID_SIZE_FACTOR
}

fn default_master_seed() -> u64 {
    0xF01D_5EED
}

impl SearchConfig {
    /// Default configuration for the given target energy.
    pub fn new(target_energy: i32) -> Self {
        Self {
            target_energy,
            replicas: default_replicas(),
            t_min: default_t_min(),
            t_max: default_t_max(),
            pull_probability: default_pull_probability(),
            iterations: default_iterations(),
            max_rounds: default_max_rounds(),
            grid_factor: default_grid_factor(),
            master_seed: default_master_seed(),
        }
    }

    /// Validates the configuration, reporting the first offending
    /// parameter as an `invalid-parameters` error.
    pub fn validate(&self) -> Result<(), HpError> {
        if self.replicas == 0 {
            return Err(invalid("replica count must be positive", "replicas", "0"));
        }
        if self.t_min == 0 {
            return Err(invalid("temperatures must be positive", "t_min", "0"));
        }
        if self.t_min >= self.t_max {
            return Err(invalid(
                "temperature range must be increasing",
                "range",
                format!("{}..{}", self.t_min, self.t_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.pull_probability) {
            return Err(invalid(
                "pull probability must lie in [0, 1]",
                "pull_probability",
                self.pull_probability.to_string(),
            ));
        }
        if self.target_energy > 0 {
            return Err(invalid(
                "target energy cannot be positive",
                "target_energy",
                self.target_energy.to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(invalid("iteration budget must be positive", "iterations", "0"));
        }
        if self.max_rounds == 0 {
            return Err(invalid("round cap must be positive", "max_rounds", "0"));
        }
        if self.grid_factor < hp_lattice::GRID_SIZE_FACTOR {
            return Err(invalid(
                "grid factor must be at least two",
                "grid_factor",
                self.grid_factor.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

fn invalid(message: &str, key: &str, value: impl Into<String>) -> HpError {
    HpError::Parameters(ErrorInfo::new("invalid-parameters", message).with_context(key, value))
}
