#![deny(missing_docs)]

//! Shared infrastructure for the HP-model REMC sampler: structured errors,
//! the deterministic RNG handle with its substream policy, and the
//! amino-acid to hydrophobic/polar reduction.

/// Residue polarity and the amino-acid reduction table.
pub mod alphabet;
/// Structured error types shared across the workspace.
pub mod errors;
/// Deterministic RNG wrapper and seed-derivation helpers.
pub mod rng;

pub use alphabet::Polarity;
pub use errors::{ErrorInfo, HpError};
pub use rng::{derive_substream_seed, RngHandle};
