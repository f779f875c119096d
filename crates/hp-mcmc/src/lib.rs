#![deny(missing_docs)]

//! Replica-exchange Monte Carlo search for low-energy HP conformations.
//!
//! Each replica is a Metropolis walker over the move kernels of
//! `hp-lattice`, pinned to one rung of an arithmetic temperature ladder.
//! After every inner pass, neighbouring replicas attempt to exchange their
//! configurations under the Δβ·ΔE criterion, alternating between even and
//! odd pairings. The search reports the lowest-energy conformation it
//! observed.

/// Search configuration and validation.
pub mod config;
/// Deterministic seed derivation for replicas and exchanges.
pub mod determinism;
/// Run metrics and coverage summaries.
pub mod metrics;
/// The replica-exchange driver.
pub mod remc;
/// Temperature ladder and the exchange criterion.
pub mod tempering;
/// The per-replica Metropolis walker.
pub mod walker;

pub use config::SearchConfig;
pub use metrics::{CoverageMetrics, MetricSample};
pub use remc::{run, ExchangeReport, RemcSearch, ReplicaReport, RoundReport, RunSummary};
pub use walker::{Walker, WalkerStatus};
