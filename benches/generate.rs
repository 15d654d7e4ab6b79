//! Generation and tick throughput.
//!
//! Every variant must stay O(count); these benches catch anything that
//! quietly turns regeneration of a large field into a frame hitch.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gpe::prelude::*;

const COUNT: usize = 100_000;

fn bench_generate(c: &mut Criterion) {
    let config = GalaxyConfig::new().with_count(COUNT).with_seed(1);

    let mut group = c.benchmark_group("generate");
    for variant in [
        Variant::Spiral,
        Variant::Elliptical,
        Variant::QuasarDisk,
        Variant::Heartbeat,
    ] {
        group.bench_function(variant.label(), |b| {
            b.iter(|| generate(black_box(variant), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let config = GalaxyConfig::new().with_count(COUNT).with_seed(1);

    let mut group = c.benchmark_group("tick");
    for variant in [Variant::Spiral, Variant::Elliptical, Variant::QuasarDisk] {
        let mut sim = Simulation::new(variant, config.clone()).unwrap();
        group.bench_function(variant.label(), |b| {
            b.iter(|| sim.tick(black_box(1.0 / 60.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_tick);
criterion_main!(benches);
