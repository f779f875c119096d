use hp_lattice::grid::Pos;
use hp_lattice::{Lattice, Sequence};

fn lattice(hp: &str, cells: &[(i32, i32)]) -> Lattice {
    let sequence = Sequence::from_hp(hp).unwrap();
    let positions = cells.iter().map(|&(x, y)| Pos::new(x, y)).collect();
    Lattice::from_positions(sequence, positions).unwrap()
}

#[test]
fn folded_square_of_h_residues_has_one_contact() {
    let lat = lattice("HHHH", &[(4, 4), (4, 5), (5, 5), (5, 4)]);
    assert_eq!(lat.compute_energy(), -1);
}

#[test]
fn straight_chain_has_no_contacts() {
    let lat = lattice("HHHH", &[(4, 4), (4, 5), (4, 6), (4, 7)]);
    assert_eq!(lat.compute_energy(), 0);
}

#[test]
fn polar_residues_do_not_score() {
    let lat = lattice("HPHP", &[(4, 4), (4, 5), (5, 5), (5, 4)]);
    assert_eq!(lat.compute_energy(), 0);
}

#[test]
fn contacts_skip_chain_neighbours() {
    // Residues 1 and 4 touch across the fold; 4 and 5 touch along the
    // chain and must not count.
    let lat = lattice("HHPHH", &[(4, 4), (4, 5), (5, 5), (5, 4), (6, 4)]);
    assert_eq!(lat.compute_energy(), -1);
}

#[test]
fn recentering_translates_and_is_idempotent() {
    let mut lat = lattice("HHHH", &[(0, 3), (1, 3), (1, 4), (2, 4)]);
    let energy = lat.compute_energy();

    assert!(lat.recenter().unwrap());
    assert_eq!(
        lat.positions(),
        &[
            Pos::new(3, 3),
            Pos::new(4, 3),
            Pos::new(4, 4),
            Pos::new(5, 4)
        ]
    );
    lat.verify_consistency().unwrap();
    assert_eq!(lat.compute_energy(), energy);

    // A second pass finds the chain already centred.
    assert!(!lat.recenter().unwrap());
    assert_eq!(lat.position(1), Pos::new(3, 3));
}

#[test]
fn recentering_handles_the_y_axis() {
    let mut lat = lattice("HHHH", &[(3, 0), (3, 1), (4, 1), (4, 2)]);
    assert!(lat.recenter().unwrap());
    assert_eq!(
        lat.positions(),
        &[
            Pos::new(3, 3),
            Pos::new(3, 4),
            Pos::new(4, 4),
            Pos::new(4, 5)
        ]
    );
    lat.verify_consistency().unwrap();
}

#[test]
fn recentering_keeps_the_initial_snapshot() {
    let mut lat = lattice("HHHH", &[(0, 3), (1, 3), (1, 4), (2, 4)]);
    lat.recenter().unwrap();
    assert_eq!(lat.initial_positions()[0], Pos::new(0, 3));
}

#[test]
fn display_shows_chain_indices() {
    let lat = lattice("HHHH", &[(4, 4), (4, 5), (5, 5), (5, 4)]);
    let rendered = lat.to_string();
    assert!(rendered.contains('1'));
    assert!(rendered.contains('4'));
    assert!(rendered.contains('.'));
}

#[test]
fn hand_built_states_are_validated() {
    let sequence = Sequence::from_hp("HHHH").unwrap();

    let overlap = vec![
        Pos::new(4, 4),
        Pos::new(4, 5),
        Pos::new(4, 4),
        Pos::new(4, 3),
    ];
    let err = Lattice::from_positions(sequence.clone(), overlap).unwrap_err();
    assert_eq!(err.info().code, "cell-collision");

    let broken = vec![
        Pos::new(4, 4),
        Pos::new(4, 5),
        Pos::new(6, 5),
        Pos::new(6, 6),
    ];
    let err = Lattice::from_positions(sequence.clone(), broken).unwrap_err();
    assert_eq!(err.info().code, "chain-broken");

    let outside = vec![
        Pos::new(7, 7),
        Pos::new(7, 8),
        Pos::new(7, 9),
        Pos::new(7, 10),
    ];
    let err = Lattice::from_positions(sequence, outside).unwrap_err();
    assert_eq!(err.info().code, "cell-out-of-bounds");
}
