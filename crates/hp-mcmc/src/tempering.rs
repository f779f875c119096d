//! Temperature ladder construction and the replica-exchange criterion.

use hp_core::errors::{ErrorInfo, HpError};
use hp_core::rng::RngHandle;

/// Builds the arithmetic temperature ladder
/// `T_i = t_min + i * floor((t_max - t_min) / replicas)` for
/// `i = 0..replicas`.
///
/// The ladder is non-decreasing and always has exactly `replicas` rungs;
/// a range narrower than the replica count degenerates to a flat ladder,
/// which is permitted.
pub fn build_ladder(t_min: u32, t_max: u32, replicas: usize) -> Result<Vec<f64>, HpError> {
    if replicas == 0 {
        return Err(HpError::Parameters(ErrorInfo::new(
            "invalid-parameters",
            "ladder needs at least one replica",
        )));
    }
    if t_min == 0 || t_min >= t_max {
        return Err(HpError::Parameters(
            ErrorInfo::new("invalid-parameters", "ladder range must be positive and increasing")
                .with_context("range", format!("{t_min}..{t_max}")),
        ));
    }
    let step = (t_max - t_min) as u64 / replicas as u64;
    Ok((0..replicas)
        .map(|rung| (t_min as u64 + rung as u64 * step) as f64)
        .collect())
}

/// Computes Δ = (β_j − β_i)(E_i − E_j) for the neighbouring pair (i, j).
pub fn exchange_delta(energy_i: i32, temp_i: f64, energy_j: i32, temp_j: f64) -> f64 {
    let beta_i = 1.0 / temp_i;
    let beta_j = 1.0 / temp_j;
    (beta_j - beta_i) * f64::from(energy_i - energy_j)
}

/// Acceptance probability of the exchange, `min(1, exp(-Δ))`.
pub fn exchange_acceptance(energy_i: i32, temp_i: f64, energy_j: i32, temp_j: f64) -> f64 {
    let delta = exchange_delta(energy_i, temp_i, energy_j, temp_j);
    (-delta).exp().min(1.0)
}

/// Attempts a replica exchange using the provided RNG handle.
///
/// Standard Metropolis form: accept outright when Δ ≤ 0 (in particular
/// equal-temperature pairs always swap), otherwise with probability
/// `exp(-Δ)`. Returns the decision together with the acceptance
/// probability.
pub fn attempt_exchange(
    energy_i: i32,
    temp_i: f64,
    energy_j: i32,
    temp_j: f64,
    rng: &mut RngHandle,
) -> (bool, f64) {
    let delta = exchange_delta(energy_i, temp_i, energy_j, temp_j);
    let acceptance = (-delta).exp().min(1.0);
    let accepted = delta <= 0.0 || rng.uniform() < acceptance;
    (accepted, acceptance)
}
