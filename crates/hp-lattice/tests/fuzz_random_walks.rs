use hp_core::rng::RngHandle;
use hp_lattice::sequence::benchmarks;
use hp_lattice::{Lattice, Sequence};
use proptest::prelude::*;

proptest! {
    #[test]
    fn dispatched_moves_preserve_invariants(seed in any::<u64>(), steps in 1usize..150) {
        let sequence = Sequence::from_hp(benchmarks::SI_1).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        let mut lattice = Lattice::new_random(sequence, &mut rng).unwrap();

        for step in 0..steps {
            let chain_index = rng.pick(lattice.len()) + 1;
            let before = lattice.positions().to_vec();
            let energy_before = lattice.compute_energy();

            let outcome = lattice.propose_move(chain_index, 0.5, &mut rng).unwrap();
            lattice.verify_consistency().unwrap();
            prop_assert!(lattice.compute_energy() <= 0);

            if outcome.is_noop() {
                prop_assert_eq!(lattice.positions(), before.as_slice());
            } else if step % 2 == 0 {
                // Reverse replay must restore the exact prior state.
                lattice.undo_journal(outcome.journal());
                lattice.verify_consistency().unwrap();
                prop_assert_eq!(lattice.positions(), before.as_slice());
                prop_assert_eq!(lattice.compute_energy(), energy_before);
            } else {
                // Keep the move; recentering must not change the energy.
                let energy = lattice.compute_energy();
                lattice.recenter().unwrap();
                lattice.verify_consistency().unwrap();
                prop_assert_eq!(lattice.compute_energy(), energy);
            }
        }
    }

    #[test]
    fn random_initialisation_yields_valid_walks(seed in any::<u64>(), length in 4usize..16) {
        let hp: String = (0..length).map(|i| if i % 3 == 0 { 'H' } else { 'P' }).collect();
        let sequence = Sequence::from_hp(&hp).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        let lattice = Lattice::new_random(sequence, &mut rng).unwrap();
        lattice.verify_consistency().unwrap();
        prop_assert!(lattice.compute_energy() <= 0);
    }
}
