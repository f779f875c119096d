use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hp_core::rng::RngHandle;
use hp_lattice::sequence::benchmarks;
use hp_lattice::{Lattice, Sequence};

fn bench_propose_undo(c: &mut Criterion) {
    let sequence = Sequence::from_hp(benchmarks::SI_1).unwrap();
    let mut rng = RngHandle::from_seed(7);
    let template = Lattice::new_random(sequence, &mut rng).unwrap();

    c.bench_function("propose_undo_si1", |b| {
        let mut lattice = template.clone();
        let mut rng = RngHandle::from_seed(11);
        let mut chain_index = 0usize;
        b.iter(|| {
            chain_index = chain_index % lattice.len() + 1;
            let outcome = lattice
                .propose_move(black_box(chain_index), 0.5, &mut rng)
                .unwrap();
            lattice.undo_move(&outcome);
        })
    });

    c.bench_function("energy_si1", |b| {
        b.iter(|| black_box(template.compute_energy()))
    });
}

criterion_group!(benches, bench_propose_undo);
criterion_main!(benches);
