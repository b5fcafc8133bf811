use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use unitfit::{Activation, Network, SampleTable, TrainingConfig, UnitSeeding};

fn run(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let mut group = c.benchmark_group("run");
    for size in [8, 32, 128, 512] {
        let config = TrainingConfig {
            learning_rate: 1e-4,
            unit_count: 8,
            max_iterations: 100,
            max_error: 0.0,
            seeding: UnitSeeding::PerUnit,
            ..TrainingConfig::default()
        };
        let mut network = Network::from_config(config).expect("valid config");
        network.set_network_functions(Activation::TANH);
        let data = SampleTable::sample_function(&mut rng, f64::sin, -3.0..=3.0, size)
            .expect("valid range");
        network.set_data(&data);
        group.bench_with_input(BenchmarkId::new("tanh", size), &size, |b, _| {
            b.iter(|| {
                network.initialize(&mut rng);
                black_box(network.run())
            })
        });
    }
    group.finish();
}

criterion_group!(bench_run, run);
criterion_main!(bench_run);
