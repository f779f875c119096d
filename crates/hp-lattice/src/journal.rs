//! Journals of reversible single-residue writes.

use crate::grid::Pos;

/// One residue relocation: chain index, vacated cell, occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueWrite {
    /// 1-based chain index of the moved residue.
    pub chain_index: u16,
    /// Cell the residue vacated.
    pub from: Pos,
    /// Cell the residue now occupies.
    pub to: Pos,
}

/// Ordered record of the writes performed by one move attempt.
///
/// Every write targets a cell that was empty at the time it was applied,
/// so replaying the journal in reverse restores the previous lattice state
/// exactly. An empty journal means the move found no applicable geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveJournal {
    writes: Vec<ResidueWrite>,
}

impl MoveJournal {
    /// True when the attempt left the lattice untouched.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Number of residues relocated by the attempt.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// The recorded writes, in application order.
    pub fn writes(&self) -> &[ResidueWrite] {
        &self.writes
    }

    pub(crate) fn record(&mut self, chain_index: u16, from: Pos, to: Pos) {
        self.writes.push(ResidueWrite {
            chain_index,
            from,
            to,
        });
    }
}
