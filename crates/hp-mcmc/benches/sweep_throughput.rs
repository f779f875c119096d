use criterion::{criterion_group, criterion_main, Criterion};
use hp_lattice::sequence::benchmarks;
use hp_lattice::Sequence;
use hp_mcmc::{run, SearchConfig};

fn bench_rounds(c: &mut Criterion) {
    let mut config = SearchConfig::new(-100);
    config.replicas = 3;
    config.iterations = 50;
    config.max_rounds = 2;

    c.bench_function("remc_two_rounds_si1", |b| {
        b.iter(|| {
            let sequence = Sequence::from_hp(benchmarks::SI_1).unwrap();
            run(config.clone(), sequence).unwrap()
        })
    });
}

criterion_group!(benches, bench_rounds);
criterion_main!(benches);
