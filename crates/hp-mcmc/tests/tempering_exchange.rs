use hp_core::rng::RngHandle;
use hp_mcmc::tempering;

#[test]
fn ladder_follows_the_arithmetic_progression() {
    let ladder = tempering::build_ladder(160, 220, 5).unwrap();
    assert_eq!(ladder, vec![160.0, 172.0, 184.0, 196.0, 208.0]);

    let ladder = tempering::build_ladder(160, 220, 3).unwrap();
    assert_eq!(ladder, vec![160.0, 180.0, 200.0]);
}

#[test]
fn narrow_ranges_degenerate_to_a_flat_ladder() {
    let ladder = tempering::build_ladder(160, 163, 5).unwrap();
    assert_eq!(ladder, vec![160.0; 5]);
}

#[test]
fn invalid_ladders_are_rejected() {
    for (t_min, t_max, replicas) in [(160, 220, 0), (0, 220, 5), (220, 160, 5), (160, 160, 5)] {
        let err = tempering::build_ladder(t_min, t_max, replicas).unwrap_err();
        assert_eq!(err.info().code, "invalid-parameters");
    }
}

#[test]
fn equal_temperature_pairs_always_swap() {
    let mut rng = RngHandle::from_seed(0xDEADBEEF);
    for (energy_i, energy_j) in [(-3, -3), (-5, -1), (0, -7)] {
        let (accepted, acceptance) =
            tempering::attempt_exchange(energy_i, 160.0, energy_j, 160.0, &mut rng);
        assert!(accepted, "{energy_i} vs {energy_j}");
        assert_eq!(acceptance, 1.0);
    }
}

#[test]
fn beneficial_swaps_are_certain() {
    // The colder replica carries the higher energy; delta is negative.
    let delta = tempering::exchange_delta(-2, 160.0, -5, 220.0);
    assert!(delta < 0.0);

    let mut rng = RngHandle::from_seed(1);
    let (accepted, acceptance) = tempering::attempt_exchange(-2, 160.0, -5, 220.0, &mut rng);
    assert!(accepted);
    assert_eq!(acceptance, 1.0);
}

#[test]
fn adverse_swaps_follow_the_boltzmann_weight() {
    let delta = tempering::exchange_delta(-5, 160.0, -2, 220.0);
    assert!(delta > 0.0);

    let expected = tempering::exchange_acceptance(-5, 160.0, -2, 220.0);
    assert!(expected > 0.0 && expected < 1.0);

    let mut rng = RngHandle::from_seed(2);
    let (_, acceptance) = tempering::attempt_exchange(-5, 160.0, -2, 220.0, &mut rng);
    assert!((acceptance - expected).abs() < 1e-12);
}
