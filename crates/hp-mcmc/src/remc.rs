//! The replica-exchange driver.

use std::collections::BTreeMap;

use hp_core::errors::HpError;
use hp_core::rng::RngHandle;
use hp_lattice::{conformation_hash, Conformation, Lattice, Sequence};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::determinism;
use crate::metrics::{CoverageMetrics, MetricSample, MetricsRecorder};
use crate::tempering;
use crate::walker::{Walker, WalkerStatus};

/// State of one replica after its inner pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaReport {
    /// Replica index within the ladder.
    pub replica: usize,
    /// Temperature of the replica slot.
    pub temperature: f64,
    /// Energy of the replica's last accepted state.
    pub energy: i32,
    /// Walker state at the end of the pass.
    pub status: WalkerStatus,
}

/// One attempted exchange between neighbouring replicas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeReport {
    /// Lower replica index of the pair.
    pub lower: usize,
    /// Upper replica index of the pair.
    pub upper: usize,
    /// Whether the configurations were swapped.
    pub accepted: bool,
    /// Metropolis acceptance probability of the attempt.
    pub acceptance: f64,
}

/// Everything that happened in one outer round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 0-based round number.
    pub round: usize,
    /// Per-replica results of the inner passes.
    pub replicas: Vec<ReplicaReport>,
    /// Exchange attempts of this round's sweep.
    pub exchanges: Vec<ExchangeReport>,
    /// Best energy observed so far, including this round.
    pub best_energy: i32,
}

/// Summary returned to callers after a search completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lowest energy observed across all replicas and rounds.
    pub best_energy: i32,
    /// The conformation that attained the best energy.
    pub best: Conformation,
    /// Number of completed outer rounds.
    pub rounds_completed: usize,
    /// Whether the target energy was reached.
    pub reached_target: bool,
    /// Ladder temperatures, coldest first.
    pub replica_temperatures: Vec<f64>,
    /// Acceptance rates per move kind, aggregated over replicas.
    pub acceptance_rates: BTreeMap<String, f64>,
    /// Mean exchange acceptance probability per neighbouring pair.
    pub exchange_acceptance: Vec<f64>,
    /// Coverage metrics captured during the run.
    pub coverage: CoverageMetrics,
}

/// Replica-exchange search over one sequence.
///
/// Temperatures stay attached to their replica slots; an accepted
/// exchange swaps the configurations. The driver owns the exchange
/// randomness, each walker its own substream.
#[derive(Debug)]
pub struct RemcSearch {
    config: SearchConfig,
    walkers: Vec<Walker>,
    exchange_offset: usize,
    best_energy: i32,
    best: Conformation,
    rounds_completed: usize,
    recorder: MetricsRecorder,
    exchange_totals: Vec<f64>,
    exchange_counts: Vec<usize>,
}

impl RemcSearch {
    /// Validates the configuration and builds the replica ladder, each
    /// walker starting from its own random conformation.
    pub fn new(config: SearchConfig, sequence: Sequence) -> Result<Self, HpError> {
        config.validate()?;
        let ladder = tempering::build_ladder(config.t_min, config.t_max, config.replicas)?;

        let mut walkers = Vec::with_capacity(ladder.len());
        for (index, &temperature) in ladder.iter().enumerate() {
            let mut rng =
                RngHandle::from_seed(determinism::replica_seed(config.master_seed, index));
            let lattice =
                Lattice::new_random_with_factor(sequence.clone(), config.grid_factor, &mut rng)?;
            walkers.push(Walker::new(
                lattice,
                temperature,
                config.pull_probability,
                config.iterations,
                Some(config.target_energy),
                rng,
            )?);
        }

        // The running best starts from the lowest initial state; it only
        // ever decreases from here.
        let mut best_energy = i32::MAX;
        let mut best = walkers[0].lattice().conformation(walkers[0].energy());
        for walker in &walkers {
            if walker.energy() < best_energy {
                best_energy = walker.energy();
                best = walker.lattice().conformation(walker.energy());
            }
        }

        let pairs = walkers.len().saturating_sub(1);
        Ok(Self {
            config,
            walkers,
            exchange_offset: 0,
            best_energy,
            best,
            rounds_completed: 0,
            recorder: MetricsRecorder::new(),
            exchange_totals: vec![0.0; pairs],
            exchange_counts: vec![0; pairs],
        })
    }

    /// The configuration the search was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Lowest energy observed so far.
    pub fn best_energy(&self) -> i32 {
        self.best_energy
    }

    /// Conformation attaining the best energy.
    pub fn best(&self) -> &Conformation {
        &self.best
    }

    /// Number of completed outer rounds.
    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// True once the best energy is at or below the target.
    pub fn reached_target(&self) -> bool {
        self.best_energy <= self.config.target_energy
    }

    /// The replica walkers, coldest slot first.
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    /// Runs one outer round: an inner pass for every replica, then the
    /// alternating-pair exchange sweep.
    pub fn round(&mut self) -> Result<RoundReport, HpError> {
        let round = self.rounds_completed;
        let mut replicas = Vec::with_capacity(self.walkers.len());

        for (index, walker) in self.walkers.iter_mut().enumerate() {
            let status = walker.run()?;
            if walker.energy() < self.best_energy {
                self.best_energy = walker.energy();
                self.best = walker.lattice().conformation(walker.energy());
            }
            replicas.push(ReplicaReport {
                replica: index,
                temperature: walker.temperature(),
                energy: walker.energy(),
                status,
            });
            self.recorder.push_sample(MetricSample {
                round,
                replica: index,
                temperature: walker.temperature(),
                energy: walker.energy(),
                accepted_moves: walker.accepted_total(),
                proposed_moves: walker.proposed_total(),
                conformation: conformation_hash(
                    walker.lattice().sequence(),
                    walker.lattice().positions(),
                ),
            });
        }

        let exchanges = self.exchange_sweep();
        self.rounds_completed += 1;

        Ok(RoundReport {
            round,
            replicas,
            exchanges,
            best_energy: self.best_energy,
        })
    }

    /// Attempts an exchange for every pair (i, i+1) with
    /// i ∈ {offset, offset+2, …}, then flips the offset for the next
    /// sweep. Accepted exchanges swap configurations in place.
    pub fn exchange_sweep(&mut self) -> Vec<ExchangeReport> {
        let round = self.rounds_completed;
        let mut reports = Vec::new();
        let mut lower = self.exchange_offset;
        while lower + 1 < self.walkers.len() {
            let mut rng = RngHandle::from_seed(determinism::exchange_seed(
                self.config.master_seed,
                round,
                lower,
            ));
            let (head, tail) = self.walkers.split_at_mut(lower + 1);
            let cold = &mut head[lower];
            let hot = &mut tail[0];
            let (accepted, acceptance) = tempering::attempt_exchange(
                cold.energy(),
                cold.temperature(),
                hot.energy(),
                hot.temperature(),
                &mut rng,
            );
            if accepted {
                cold.swap_state(hot);
            }
            self.exchange_totals[lower] += acceptance;
            self.exchange_counts[lower] += 1;
            reports.push(ExchangeReport {
                lower,
                upper: lower + 1,
                accepted,
                acceptance,
            });
            lower += 2;
        }
        self.exchange_offset = 1 - self.exchange_offset;
        reports
    }

    /// Summarises the search so far.
    pub fn summary(&self) -> RunSummary {
        let exchange_acceptance = self
            .exchange_totals
            .iter()
            .zip(self.exchange_counts.iter())
            .map(|(total, count)| {
                if *count == 0 {
                    0.0
                } else {
                    total / *count as f64
                }
            })
            .collect();
        RunSummary {
            best_energy: self.best_energy,
            best: self.best.clone(),
            rounds_completed: self.rounds_completed,
            reached_target: self.reached_target(),
            replica_temperatures: self.walkers.iter().map(Walker::temperature).collect(),
            acceptance_rates: aggregate_acceptance(&self.walkers),
            exchange_acceptance,
            coverage: self.recorder.coverage(),
        }
    }
}

/// Runs the search to completion: rounds until the target energy is
/// reached or the round cap expires.
pub fn run(config: SearchConfig, sequence: Sequence) -> Result<RunSummary, HpError> {
    let max_rounds = config.max_rounds;
    let mut search = RemcSearch::new(config, sequence)?;
    while !search.reached_target() && search.rounds_completed() < max_rounds {
        search.round()?;
    }
    Ok(search.summary())
}

fn aggregate_acceptance(walkers: &[Walker]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::<&'static str, (usize, usize)>::new();
    for walker in walkers {
        for (kind, proposed) in walker.proposed_counts() {
            let entry = totals.entry(kind.as_str()).or_insert((0, 0));
            entry.0 += proposed;
        }
        for (kind, accepted) in walker.accepted_counts() {
            let entry = totals.entry(kind.as_str()).or_insert((0, 0));
            entry.1 += accepted;
        }
    }
    totals
        .into_iter()
        .map(|(kind, (proposed, accepted))| {
            let rate = if proposed == 0 {
                0.0
            } else {
                accepted as f64 / proposed as f64
            };
            (kind.to_string(), rate)
        })
        .collect()
}
