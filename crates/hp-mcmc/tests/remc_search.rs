use hp_lattice::sequence::benchmarks;
use hp_lattice::{conformation_hash, Lattice, Sequence};
use hp_mcmc::{run, RemcSearch, SearchConfig};

#[test]
fn four_h_residues_fold_to_minus_one() {
    let mut config = SearchConfig::new(-1);
    config.replicas = 3;
    config.max_rounds = 50;
    let summary = run(config, Sequence::from_hp("HHHH").unwrap()).unwrap();

    assert!(summary.reached_target);
    assert_eq!(summary.best_energy, -1);
    assert_eq!(summary.best.energy, -1);

    let lattice = Lattice::from_positions(
        Sequence::from_hp("HHHH").unwrap(),
        summary.best.positions.clone(),
    )
    .unwrap();
    assert_eq!(lattice.compute_energy(), -1);
}

#[test]
fn benchmark_sequence_reaches_a_negative_target() {
    let mut config = SearchConfig::new(-4);
    config.max_rounds = 200;
    let summary = run(config, Sequence::from_hp(benchmarks::SI_1).unwrap()).unwrap();

    assert!(summary.reached_target, "best was {}", summary.best_energy);
    assert!(summary.best_energy <= -4);
}

#[test]
fn best_energy_is_monotone_across_rounds() {
    let mut config = SearchConfig::new(-30);
    config.replicas = 4;
    config.iterations = 100;
    config.max_rounds = 10;
    let mut search = RemcSearch::new(config, Sequence::from_hp(benchmarks::SI_1).unwrap()).unwrap();

    let mut last_best = i32::MAX;
    for _ in 0..10 {
        let report = search.round().unwrap();
        assert!(report.best_energy <= last_best);
        last_best = report.best_energy;
    }
    assert_eq!(search.rounds_completed(), 10);
    assert!(!search.reached_target());
}

#[test]
fn exchange_sweeps_preserve_the_set_of_configurations() {
    let mut config = SearchConfig::new(-30);
    config.replicas = 4;
    let mut search = RemcSearch::new(config, Sequence::from_hp(benchmarks::SI_1).unwrap()).unwrap();

    let mut before: Vec<String> = search
        .walkers()
        .iter()
        .map(|walker| conformation_hash(walker.lattice().sequence(), walker.lattice().positions()))
        .collect();
    search.exchange_sweep();
    let mut after: Vec<String> = search
        .walkers()
        .iter()
        .map(|walker| conformation_hash(walker.lattice().sequence(), walker.lattice().positions()))
        .collect();

    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn exchange_pairings_alternate_between_rounds() {
    let mut config = SearchConfig::new(-30);
    config.replicas = 4;
    config.iterations = 10;
    config.max_rounds = 4;
    let mut search = RemcSearch::new(config, Sequence::from_hp(benchmarks::SI_1).unwrap()).unwrap();

    let even_round = search.round().unwrap();
    let lowers: Vec<usize> = even_round.exchanges.iter().map(|e| e.lower).collect();
    assert_eq!(lowers, vec![0, 2]);

    let odd_round = search.round().unwrap();
    let lowers: Vec<usize> = odd_round.exchanges.iter().map(|e| e.lower).collect();
    assert_eq!(lowers, vec![1]);
}

#[test]
fn the_round_cap_bounds_the_search() {
    let mut config = SearchConfig::new(-30);
    config.replicas = 3;
    config.iterations = 50;
    config.max_rounds = 3;
    let summary = run(config, Sequence::from_hp(benchmarks::SI_3).unwrap()).unwrap();

    assert_eq!(summary.rounds_completed, 3);
    assert!(!summary.reached_target);
    assert!(summary.coverage.unique_conformations > 0);
}

#[test]
fn the_default_ladder_steps_from_160_to_208() {
    let config = SearchConfig::new(-1);
    let search = RemcSearch::new(config, Sequence::from_hp("HHHH").unwrap()).unwrap();
    let temps: Vec<f64> = search.walkers().iter().map(|w| w.temperature()).collect();
    assert_eq!(temps, vec![160.0, 172.0, 184.0, 196.0, 208.0]);
}

#[test]
fn invalid_configurations_are_rejected_at_setup() {
    let sequence = Sequence::from_hp("HHHH").unwrap();

    let mut config = SearchConfig::new(-1);
    config.replicas = 0;
    assert_setup_fails(config, &sequence);

    let mut config = SearchConfig::new(-1);
    config.t_min = 220;
    config.t_max = 160;
    assert_setup_fails(config, &sequence);

    let mut config = SearchConfig::new(-1);
    config.pull_probability = 1.5;
    assert_setup_fails(config, &sequence);

    let config = SearchConfig::new(3);
    assert_setup_fails(config, &sequence);

    let mut config = SearchConfig::new(-1);
    config.grid_factor = 1;
    assert_setup_fails(config, &sequence);
}

fn assert_setup_fails(config: SearchConfig, sequence: &Sequence) {
    let err = RemcSearch::new(config, sequence.clone()).unwrap_err();
    assert_eq!(err.info().code, "invalid-parameters");
    assert!(err.is_validation());
}
