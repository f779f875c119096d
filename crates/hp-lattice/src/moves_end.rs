//! Terminal residue move: swing a chain end onto a free neighbour of the
//! residue it is bonded to.

use hp_core::rng::RngHandle;

use crate::grid::Pos;
use crate::journal::MoveJournal;
use crate::lattice::Lattice;

/// Attempts the end move at a terminal chain index. The terminal residue
/// jumps to a uniformly chosen empty neighbour of its unique chain
/// neighbour; indices that are not terminal, and anchors with no free
/// neighbour, leave the journal empty.
pub fn attempt_end(
    lattice: &mut Lattice,
    chain_index: usize,
    rng: &mut RngHandle,
    journal: &mut MoveJournal,
) {
    let length = lattice.len();
    let anchor = if chain_index == 1 {
        2
    } else if chain_index == length {
        length - 1
    } else {
        return;
    };

    let around = lattice.position(anchor);
    let open: Vec<Pos> = around
        .neighbours()
        .into_iter()
        .filter(|&cell| lattice.grid().is_empty(cell))
        .collect();
    if open.is_empty() {
        return;
    }
    let target = open[rng.pick(open.len())];
    lattice.apply_write(chain_index, target, journal);
}
