//! Corner flip: move a residue to the opposite corner of the unit square
//! spanned by its chain neighbours.

use crate::grid::Pos;
use crate::journal::MoveJournal;
use crate::lattice::Lattice;

/// Attempts the corner move at an interior chain index.
///
/// With A and C the neighbours of the pivot B, the move requires A and C
/// to span a diagonal; the flipped cell is then the fourth corner
/// `A + C - B` of their unit square, and the move applies iff that cell
/// is empty.
pub fn attempt_corner(lattice: &mut Lattice, chain_index: usize, journal: &mut MoveJournal) {
    if chain_index <= 1 || chain_index >= lattice.len() {
        return;
    }
    let before = lattice.position(chain_index - 1);
    let pivot = lattice.position(chain_index);
    let after = lattice.position(chain_index + 1);
    if !before.is_diagonal(after) {
        return;
    }
    let flipped = Pos::new(before.x + after.x - pivot.x, before.y + after.y - pivot.y);
    if lattice.grid().is_empty(flipped) {
        lattice.apply_write(chain_index, flipped, journal);
    }
}
