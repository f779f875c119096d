//! Crankshaft move: reflect the two inner residues of a U-shaped
//! four-residue window across its closed end.

use crate::grid::Pos;
use crate::journal::MoveJournal;
use crate::lattice::Lattice;

/// Attempts the crankshaft move at an interior chain index.
///
/// The primary window is the quadruple starting at `k-1`; when that
/// window is absent or not U-shaped, the window starting at `k-2` is
/// tried instead. A U-shaped primary window consumes the attempt even
/// when its target cells are occupied.
pub fn attempt_crankshaft(lattice: &mut Lattice, chain_index: usize, journal: &mut MoveJournal) {
    let length = lattice.len();
    if chain_index <= 1 || chain_index >= length {
        return;
    }
    if chain_index + 2 <= length && is_u(lattice, chain_index - 1) {
        flip_u(lattice, chain_index - 1, journal);
        return;
    }
    if chain_index >= 3 && is_u(lattice, chain_index - 2) {
        flip_u(lattice, chain_index - 2, journal);
    }
}

/// True when the quadruple starting at `start` closes into a U: the four
/// consecutive bonds plus adjacency of the first and last residue.
fn is_u(lattice: &Lattice, start: usize) -> bool {
    let p = lattice.position(start);
    let q = lattice.position(start + 1);
    let r = lattice.position(start + 2);
    let s = lattice.position(start + 3);
    p.is_adjacent(q) && q.is_adjacent(r) && r.is_adjacent(s) && s.is_adjacent(p)
}

/// Reflects the two inner residues across the closed end of the U:
/// Q goes to `2P - Q`, R goes to `2S - R`, iff both cells are empty.
fn flip_u(lattice: &mut Lattice, start: usize, journal: &mut MoveJournal) {
    let p = lattice.position(start);
    let q = lattice.position(start + 1);
    let r = lattice.position(start + 2);
    let s = lattice.position(start + 3);
    let q_target = Pos::new(2 * p.x - q.x, 2 * p.y - q.y);
    let r_target = Pos::new(2 * s.x - r.x, 2 * s.y - r.y);
    if lattice.grid().is_empty(q_target) && lattice.grid().is_empty(r_target) {
        lattice.apply_write(start + 1, q_target, journal);
        lattice.apply_write(start + 2, r_target, journal);
    }
}
