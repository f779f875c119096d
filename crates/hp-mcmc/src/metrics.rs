//! Run metrics and coverage summaries.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Per-round, per-replica sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Outer round the sample was recorded in.
    pub round: usize,
    /// Replica index within the ladder.
    pub replica: usize,
    /// Temperature of the replica slot.
    pub temperature: f64,
    /// Energy of the replica's last accepted state.
    pub energy: i32,
    /// Proposals accepted by the replica so far.
    pub accepted_moves: usize,
    /// Proposals issued by the replica so far.
    pub proposed_moves: usize,
    /// Canonical hash of the replica's conformation.
    pub conformation: String,
}

/// Aggregate exploration summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    /// Distinct conformation hashes seen across all samples.
    pub unique_conformations: usize,
    /// Mean sampled energy.
    pub mean_energy: f64,
    /// Variance of the sampled energies.
    pub energy_variance: f64,
}

impl CoverageMetrics {
    /// Returns an empty coverage descriptor.
    pub fn empty() -> Self {
        Self {
            unique_conformations: 0,
            mean_energy: 0.0,
            energy_variance: 0.0,
        }
    }
}

/// Collects per-round samples and derives the coverage summary.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: Vec<MetricSample>,
    unique: IndexSet<String>,
}

impl MetricsRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample.
    pub fn push_sample(&mut self, sample: MetricSample) {
        self.unique.insert(sample.conformation.clone());
        self.samples.push(sample);
    }

    /// Returns an immutable view over the recorded samples.
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    /// Computes coverage metrics from the recorded data.
    pub fn coverage(&self) -> CoverageMetrics {
        if self.samples.is_empty() {
            return CoverageMetrics::empty();
        }
        let energies: Vec<f64> = self
            .samples
            .iter()
            .map(|sample| f64::from(sample.energy))
            .collect();
        let mean_energy = energies.iter().sum::<f64>() / energies.len() as f64;
        let energy_variance = if energies.len() > 1 {
            let mean_sq = energies.iter().map(|&e| e * e).sum::<f64>() / energies.len() as f64;
            (mean_sq - mean_energy * mean_energy).max(0.0)
        } else {
            0.0
        };
        CoverageMetrics {
            unique_conformations: self.unique.len(),
            mean_energy,
            energy_variance,
        }
    }
}
