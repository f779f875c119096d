//! Deterministic seed derivation for replicas and exchanges.

use hp_core::rng::derive_substream_seed;

/// Seed of the substream owned by one replica walker. The stream covers
/// the replica's lattice initialisation and every proposal it draws.
pub fn replica_seed(master_seed: u64, replica_index: usize) -> u64 {
    derive_substream_seed(master_seed, replica_index as u64)
}

/// Seed of the driver's stream for one exchange decision. Salting the
/// master seed keeps the exchange family disjoint from the replica
/// substreams.
pub fn exchange_seed(master_seed: u64, round: usize, pair_index: usize) -> u64 {
    derive_substream_seed(
        master_seed ^ 0x5A5A_5A5A_5A5A_5A5A,
        (round as u64) << 16 | pair_index as u64,
    )
}
