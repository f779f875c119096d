//! The per-replica Metropolis walker.

use std::collections::BTreeMap;
use std::mem;

use hp_core::errors::{ErrorInfo, HpError};
use hp_core::rng::RngHandle;
use hp_lattice::{Conformation, Lattice, MoveKind};
use serde::{Deserialize, Serialize};

/// Lifecycle of a walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkerStatus {
    /// The walker has iterations left in its current pass.
    Running,
    /// The walker's energy reached the target.
    ReachedTarget,
    /// The pass ended without reaching the target.
    Exhausted,
}

/// One Metropolis trajectory at a fixed temperature.
///
/// The walker owns its lattice and its RNG substream. Rejected proposals
/// are rolled back through the move journal, so the walker is always
/// bit-identical to its last accepted state; accepted states are appended
/// to the trajectory.
#[derive(Debug, Clone)]
pub struct Walker {
    lattice: Lattice,
    temperature: f64,
    pull_probability: f64,
    max_iterations: usize,
    target_energy: Option<i32>,
    rng: RngHandle,
    energy: i32,
    status: WalkerStatus,
    trajectory: Vec<Conformation>,
    proposed: BTreeMap<MoveKind, usize>,
    accepted: BTreeMap<MoveKind, usize>,
}

impl Walker {
    /// Wraps a lattice in a walker. The trajectory starts with the
    /// initial conformation.
    pub fn new(
        lattice: Lattice,
        temperature: f64,
        pull_probability: f64,
        max_iterations: usize,
        target_energy: Option<i32>,
        rng: RngHandle,
    ) -> Result<Self, HpError> {
        if temperature <= 0.0 {
            return Err(HpError::Parameters(
                ErrorInfo::new("invalid-parameters", "walker temperature must be positive")
                    .with_context("temperature", temperature.to_string()),
            ));
        }
        let energy = lattice.compute_energy();
        let trajectory = vec![lattice.conformation(energy)];
        Ok(Self {
            lattice,
            temperature,
            pull_probability,
            max_iterations,
            target_energy,
            rng,
            energy,
            status: WalkerStatus::Running,
            trajectory,
            proposed: BTreeMap::new(),
            accepted: BTreeMap::new(),
        })
    }

    /// Runs one pass of at most `max_iterations` Metropolis steps,
    /// stopping early when the target energy is reached.
    pub fn run(&mut self) -> Result<WalkerStatus, HpError> {
        for _ in 0..self.max_iterations {
            if self.target_reached() {
                self.status = WalkerStatus::ReachedTarget;
                return Ok(self.status);
            }
            self.step()?;
        }
        self.status = if self.target_reached() {
            WalkerStatus::ReachedTarget
        } else {
            WalkerStatus::Exhausted
        };
        Ok(self.status)
    }

    fn target_reached(&self) -> bool {
        self.target_energy
            .map_or(false, |target| self.energy <= target)
    }

    fn step(&mut self) -> Result<(), HpError> {
        let chain_index = self.rng.pick(self.lattice.len()) + 1;
        let outcome = self
            .lattice
            .propose_move(chain_index, self.pull_probability, &mut self.rng)?;
        *self.proposed.entry(outcome.kind()).or_insert(0) += 1;

        if outcome.is_noop() {
            return Ok(());
        }

        let candidate = self.lattice.compute_energy();
        let accepted = candidate <= self.energy || {
            let acceptance = (f64::from(self.energy - candidate) / self.temperature).exp();
            self.rng.uniform() < acceptance
        };

        if accepted {
            self.lattice.recenter()?;
            // Translation leaves the contact energy untouched.
            debug_assert_eq!(self.lattice.compute_energy(), candidate);
            self.energy = candidate;
            *self.accepted.entry(outcome.kind()).or_insert(0) += 1;
            self.trajectory.push(self.lattice.conformation(candidate));
        } else {
            self.lattice.undo_move(&outcome);
        }
        Ok(())
    }

    /// Current lifecycle state.
    pub fn status(&self) -> WalkerStatus {
        self.status
    }

    /// Energy of the last accepted state.
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Temperature of this replica slot.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The walker's lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Accepted states in order, starting with the initial conformation.
    pub fn trajectory(&self) -> &[Conformation] {
        &self.trajectory
    }

    /// Proposals issued per move kind.
    pub fn proposed_counts(&self) -> &BTreeMap<MoveKind, usize> {
        &self.proposed
    }

    /// Proposals accepted per move kind.
    pub fn accepted_counts(&self) -> &BTreeMap<MoveKind, usize> {
        &self.accepted
    }

    /// Total proposals issued so far.
    pub fn proposed_total(&self) -> usize {
        self.proposed.values().sum()
    }

    /// Total proposals accepted so far.
    pub fn accepted_total(&self) -> usize {
        self.accepted.values().sum()
    }

    /// Exchanges configurations with a neighbouring replica: the lattices
    /// and their cached energies swap, the temperatures stay with the
    /// slots, and both trajectories record the received state.
    pub(crate) fn swap_state(&mut self, other: &mut Walker) {
        mem::swap(&mut self.lattice, &mut other.lattice);
        mem::swap(&mut self.energy, &mut other.energy);
        self.trajectory.push(self.lattice.conformation(self.energy));
        other
            .trajectory
            .push(other.lattice.conformation(other.energy));
    }
}
