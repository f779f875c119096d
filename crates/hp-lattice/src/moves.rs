//! Move kinds, outcomes and the dispatch rule.

use hp_core::rng::RngHandle;
use serde::{Deserialize, Serialize};

use crate::journal::MoveJournal;
use crate::lattice::Lattice;
use crate::{moves_cks, moves_corner, moves_end, moves_pull};

/// The local transformations of the self-avoiding walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Relocation of a terminal residue around its chain neighbour.
    End,
    /// Flip of a residue across the diagonal of its neighbours.
    Corner,
    /// Reflection of the two inner residues of a U-shaped quadruple.
    Crankshaft,
    /// Diagonal pull with chain propagation.
    Pull,
}

impl MoveKind {
    /// Stable label used in reports and acceptance-rate tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::End => "end",
            MoveKind::Corner => "corner",
            MoveKind::Crankshaft => "crankshaft",
            MoveKind::Pull => "pull",
        }
    }
}

/// Result of one move attempt: which kernel ran, and the journal of the
/// writes it performed. An empty journal is the MoveNotApplicable signal
/// consumed by the Metropolis rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    kind: MoveKind,
    journal: MoveJournal,
}

impl MoveOutcome {
    /// Kernel selected by the dispatch rule.
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// True when the attempt left the lattice untouched.
    pub fn is_noop(&self) -> bool {
        self.journal.is_empty()
    }

    /// The journal of writes performed by the attempt.
    pub fn journal(&self) -> &MoveJournal {
        &self.journal
    }
}

/// Selects and runs the kernel for a uniformly chosen chain index:
/// terminal residues take the end move; interior residues pull with
/// probability `pull_probability` and otherwise flip a corner or a
/// crankshaft with equal odds.
pub(crate) fn dispatch(
    lattice: &mut Lattice,
    chain_index: usize,
    pull_probability: f64,
    rng: &mut RngHandle,
) -> MoveOutcome {
    let length = lattice.len();
    let mut journal = MoveJournal::default();
    let kind = if chain_index == 1 || chain_index == length {
        moves_end::attempt_end(lattice, chain_index, rng, &mut journal);
        MoveKind::End
    } else if rng.uniform() < pull_probability {
        moves_pull::attempt_pull(lattice, chain_index, &mut journal);
        MoveKind::Pull
    } else if rng.pick(2) == 0 {
        moves_corner::attempt_corner(lattice, chain_index, &mut journal);
        MoveKind::Corner
    } else {
        moves_cks::attempt_crankshaft(lattice, chain_index, &mut journal);
        MoveKind::Crankshaft
    };
    MoveOutcome { kind, journal }
}
