//! Canonical conformation hashing.

use sha2::{Digest, Sha256};

use crate::grid::Pos;
use crate::sequence::Sequence;

/// Computes the canonical hash of a conformation.
///
/// Positions are normalised so the bounding box starts at the origin,
/// which makes the hash invariant under the translations recentering
/// applies. The HP string is mixed in so identical geometries of
/// different sequences do not collide.
pub fn conformation_hash(sequence: &Sequence, positions: &[Pos]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sequence.hp_string().as_bytes());
    hasher.update((positions.len() as u64).to_le_bytes());

    let min_x = positions.iter().map(|cell| cell.x).min().unwrap_or(0);
    let min_y = positions.iter().map(|cell| cell.y).min().unwrap_or(0);
    for cell in positions {
        hasher.update((cell.x - min_x).to_le_bytes());
        hasher.update((cell.y - min_y).to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
