//! The lattice: residue placement, contact energy, recentering and the
//! reversible write primitives the move kernels build on.

use std::fmt;

use hp_core::errors::{ErrorInfo, HpError};
use hp_core::rng::RngHandle;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Pos};
use crate::journal::MoveJournal;
use crate::moves::{self, MoveOutcome};
use crate::sequence::Sequence;

/// Grid side length as a multiple of the sequence length. A factor of two
/// leaves enough slack that recentering always fits the chain.
pub const GRID_SIZE_FACTOR: usize = 2;

/// Cap on random-placement restarts before initialisation gives up.
pub const MAX_INIT_ATTEMPTS: usize = 10_000;

/// Snapshot of an accepted conformation: positions in chain order plus
/// the energy the walker computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conformation {
    /// Residue cells, index i holding chain index i+1.
    pub positions: Vec<Pos>,
    /// Contact energy of the conformation.
    pub energy: i32,
}

/// A self-avoiding walk of the sequence on a square grid.
///
/// The grid and the positions array are two views of the same state; the
/// only way to relocate a residue is the crate-internal write primitive
/// used by the move kernels, which keeps the views consistent and
/// journals the change.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    sequence: Sequence,
    grid: Grid,
    positions: Vec<Pos>,
    initial: Vec<Pos>,
}

impl Lattice {
    /// Initialises a uniformly random self-avoiding walk with the default
    /// grid factor.
    pub fn new_random(sequence: Sequence, rng: &mut RngHandle) -> Result<Self, HpError> {
        Self::new_random_with_factor(sequence, GRID_SIZE_FACTOR, rng)
    }

    /// Initialises a uniformly random self-avoiding walk on a grid of side
    /// `sequence.len() * factor`.
    ///
    /// Residue 1 starts at the centre; each following residue is placed on
    /// a uniformly chosen empty neighbour of its predecessor. Dead ends
    /// restart the whole placement (the naive rejection sampler of the
    /// model), up to [`MAX_INIT_ATTEMPTS`] restarts.
    pub fn new_random_with_factor(
        sequence: Sequence,
        factor: usize,
        rng: &mut RngHandle,
    ) -> Result<Self, HpError> {
        if factor < GRID_SIZE_FACTOR {
            return Err(HpError::Parameters(
                ErrorInfo::new("invalid-parameters", "grid factor must be at least two")
                    .with_context("factor", factor.to_string()),
            ));
        }
        let length = sequence.len();
        let side = length * factor;
        let centre = Pos::new(side as i32 / 2, side as i32 / 2);

        for _ in 0..MAX_INIT_ATTEMPTS {
            let mut grid = Grid::new(side);
            let mut positions = Vec::with_capacity(length);
            grid.set(centre, 1);
            positions.push(centre);

            let mut cursor = centre;
            let mut stuck = false;
            for chain_index in 2..=length {
                let open: Vec<Pos> = cursor
                    .neighbours()
                    .into_iter()
                    .filter(|&cell| grid.is_empty(cell))
                    .collect();
                if open.is_empty() {
                    stuck = true;
                    break;
                }
                cursor = open[rng.pick(open.len())];
                grid.set(cursor, chain_index as u16);
                positions.push(cursor);
            }
            if !stuck {
                return Ok(Self {
                    sequence,
                    grid,
                    initial: positions.clone(),
                    positions,
                });
            }
        }

        Err(HpError::Lattice(
            ErrorInfo::new("init-failure", "no self-avoiding placement found")
                .with_context("length", length.to_string())
                .with_context("attempts", MAX_INIT_ATTEMPTS.to_string()),
        ))
    }

    /// Builds a lattice from an explicit conformation, validating that it
    /// is a self-avoiding walk inside the default-sized grid.
    pub fn from_positions(sequence: Sequence, positions: Vec<Pos>) -> Result<Self, HpError> {
        if positions.len() != sequence.len() {
            return Err(HpError::Lattice(
                ErrorInfo::new("conformation-length-mismatch", "one cell per residue required")
                    .with_context("residues", sequence.len().to_string())
                    .with_context("cells", positions.len().to_string()),
            ));
        }
        let side = sequence.len() * GRID_SIZE_FACTOR;
        let mut grid = Grid::new(side);
        for (index, &cell) in positions.iter().enumerate() {
            if !grid.in_bounds(cell) {
                return Err(HpError::Lattice(
                    ErrorInfo::new("cell-out-of-bounds", "cell lies outside the grid")
                        .with_context("chain_index", (index + 1).to_string()),
                ));
            }
            if !grid.is_empty(cell) {
                return Err(HpError::Lattice(
                    ErrorInfo::new("cell-collision", "two residues share a cell")
                        .with_context("chain_index", (index + 1).to_string()),
                ));
            }
            grid.set(cell, (index + 1) as u16);
        }
        for window in positions.windows(2) {
            if !window[0].is_adjacent(window[1]) {
                return Err(HpError::Lattice(ErrorInfo::new(
                    "chain-broken",
                    "consecutive residues are not lattice-adjacent",
                )));
            }
        }
        Ok(Self {
            sequence,
            grid,
            initial: positions.clone(),
            positions,
        })
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; sequences have at least four residues.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The sequence folded on this lattice.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell of the residue with the given 1-based chain index.
    pub fn position(&self, chain_index: usize) -> Pos {
        self.positions[chain_index - 1]
    }

    /// All residue cells in chain order.
    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    /// The conformation produced by random initialisation, kept for
    /// diagnostics.
    pub fn initial_positions(&self) -> &[Pos] {
        &self.initial
    }

    /// Contact energy: minus the number of hydrophobic pairs that are
    /// lattice-adjacent but not chain-adjacent.
    ///
    /// Scanning only the +x and +y neighbour of every residue counts each
    /// unordered pair exactly once.
    pub fn compute_energy(&self) -> i32 {
        let mut energy = 0;
        for (index, &cell) in self.positions.iter().enumerate() {
            if !self.sequence.is_hydrophobic(index) {
                continue;
            }
            let chain_index = (index + 1) as i32;
            for probe in [cell.offset(1, 0), cell.offset(0, 1)] {
                let other = self.grid.occupant(probe) as i32;
                if other == 0 || (other - chain_index).abs() == 1 {
                    continue;
                }
                if self.sequence.is_hydrophobic(other as usize - 1) {
                    energy -= 1;
                }
            }
        }
        energy
    }

    /// Proposes a move at the given chain index, following the dispatch
    /// rule: terminal residues get the end move, interior residues pull
    /// with probability `pull_probability` and otherwise flip a corner or
    /// a crankshaft with equal odds.
    ///
    /// The returned outcome carries the journal; an empty journal means
    /// the attempt found no applicable geometry and the lattice is
    /// untouched.
    pub fn propose_move(
        &mut self,
        chain_index: usize,
        pull_probability: f64,
        rng: &mut RngHandle,
    ) -> Result<MoveOutcome, HpError> {
        if chain_index == 0 || chain_index > self.len() {
            return Err(HpError::Parameters(
                ErrorInfo::new("invalid-parameters", "chain index outside the sequence")
                    .with_context("chain_index", chain_index.to_string())
                    .with_context("length", self.len().to_string()),
            ));
        }
        Ok(moves::dispatch(self, chain_index, pull_probability, rng))
    }

    /// Reverses a move by replaying its journal backwards.
    pub fn undo_journal(&mut self, journal: &MoveJournal) {
        for write in journal.writes().iter().rev() {
            let index = write.chain_index as usize - 1;
            self.grid.clear(write.to);
            self.grid.set(write.from, write.chain_index);
            self.positions[index] = write.from;
        }
    }

    /// Reverses the given move outcome.
    pub fn undo_move(&mut self, outcome: &MoveOutcome) {
        self.undo_journal(outcome.journal());
    }

    /// Translates the conformation back towards the grid centre when its
    /// bounding box touches the margin. Returns whether a translation was
    /// applied. Translation does not change the energy.
    pub fn recenter(&mut self) -> Result<bool, HpError> {
        let side = self.grid.side();
        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        let mut min_y = i32::MAX;
        let mut max_y = i32::MIN;
        for &cell in &self.positions {
            min_x = min_x.min(cell.x);
            max_x = max_x.max(cell.x);
            min_y = min_y.min(cell.y);
            max_y = max_y.max(cell.y);
        }

        let mut dx = 0;
        let mut dy = 0;
        if max_x >= side - 2 || min_x <= 0 {
            dx = side / 2 - (min_x + max_x) / 2;
        }
        if max_y >= side - 2 || min_y <= 0 {
            dy = side / 2 - (min_y + max_y) / 2;
        }
        if dx == 0 && dy == 0 {
            return Ok(false);
        }

        for &cell in &self.positions {
            if !self.grid.in_bounds(cell.offset(dx, dy)) {
                return Err(HpError::Lattice(
                    ErrorInfo::new("grid-overflow", "translated cell leaves the grid")
                        .with_context("side", side.to_string())
                        .with_context("dx", dx.to_string())
                        .with_context("dy", dy.to_string()),
                ));
            }
        }
        for &cell in &self.positions {
            self.grid.clear(cell);
        }
        for cell in &mut self.positions {
            *cell = cell.offset(dx, dy);
        }
        for (index, &cell) in self.positions.iter().enumerate() {
            self.grid.set(cell, (index + 1) as u16);
        }
        Ok(true)
    }

    /// Checks the structural invariants: one cell per residue, consecutive
    /// residues adjacent, grid and positions consistent both ways.
    pub fn verify_consistency(&self) -> Result<(), HpError> {
        if self.positions.len() != self.sequence.len() {
            return Err(inconsistency("positions and sequence disagree on length"));
        }
        for (index, &cell) in self.positions.iter().enumerate() {
            if !self.grid.in_bounds(cell) {
                return Err(inconsistency("residue cell outside the grid"));
            }
            if self.grid.occupant(cell) as usize != index + 1 {
                return Err(inconsistency("grid does not map the cell to its residue"));
            }
        }
        if self.grid.occupied_count() != self.positions.len() {
            return Err(inconsistency("grid holds stray occupied cells"));
        }
        for window in self.positions.windows(2) {
            if !window[0].is_adjacent(window[1]) {
                return Err(inconsistency("consecutive residues are not adjacent"));
            }
        }
        Ok(())
    }

    /// Snapshot of the current conformation with the caller's energy.
    pub fn conformation(&self, energy: i32) -> Conformation {
        Conformation {
            positions: self.positions.clone(),
            energy,
        }
    }

    /// Relocates one residue to an empty cell, updating the grid and the
    /// positions array together and journaling the write.
    pub(crate) fn apply_write(&mut self, chain_index: usize, to: Pos, journal: &mut MoveJournal) {
        debug_assert!(self.grid.is_empty(to));
        let index = chain_index - 1;
        let from = self.positions[index];
        self.grid.clear(from);
        self.grid.set(to, chain_index as u16);
        self.positions[index] = to;
        journal.record(chain_index as u16, from, to);
    }
}

fn inconsistency(message: &str) -> HpError {
    HpError::Lattice(ErrorInfo::new("inconsistent-lattice", message))
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.grid.side() {
            for y in 0..self.grid.side() {
                let occupant = self.grid.occupant(Pos::new(x, y));
                if occupant == 0 {
                    write!(f, "  .")?;
                } else {
                    write!(f, "{occupant:>3}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
