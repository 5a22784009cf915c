//! Performance benchmarks for the particle field simulation

use aether_core::{FastrandSource, ParticleField};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

// Helper function to create a seeded field for benchmarks
fn create_test_field(count: usize) -> ParticleField {
    let mut rng = FastrandSource::with_seed(0xAE7);
    ParticleField::new(1280.0, 800.0, count, 100.0, &mut rng)
}

fn bench_field_tick(c: &mut Criterion) {
    c.bench_function("field_tick_60_particles", |b| {
        let mut field = create_test_field(60);
        b.iter(|| {
            field.tick();
            black_box(&field);
        });
    });

    c.bench_function("field_tick_200_particles", |b| {
        let mut field = create_test_field(200);
        b.iter(|| {
            field.tick();
            black_box(&field);
        });
    });
}

fn bench_field_connections(c: &mut Criterion) {
    let field_60 = create_test_field(60);
    let field_200 = create_test_field(200);

    c.bench_function("field_connections_60_particles", |b| {
        b.iter(|| {
            let connections = black_box(&field_60).connections();
            black_box(connections);
        });
    });

    c.bench_function("field_connections_200_particles", |b| {
        b.iter(|| {
            let connections = black_box(&field_200).connections();
            black_box(connections);
        });
    });
}

fn bench_field_frame(c: &mut Criterion) {
    c.bench_function("field_full_frame_60_particles", |b| {
        let mut field = create_test_field(60);
        b.iter(|| {
            field.tick();
            let connections = field.connections();
            black_box(connections);
        });
    });
}

fn bench_field_spawn(c: &mut Criterion) {
    c.bench_function("field_spawn_60_particles", |b| {
        b.iter(|| {
            let field = create_test_field(60);
            black_box(field);
        });
    });
}

criterion_group!(
    benches,
    bench_field_tick,
    bench_field_connections,
    bench_field_frame,
    bench_field_spawn
);
criterion_main!(benches);
