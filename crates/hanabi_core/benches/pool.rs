//! Pool churn benchmarks
//!
//! Run with: `cargo bench --package hanabi_core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hanabi_core::{ParticleBuffer, ParticlePool};

/// A pool with the standard attribute set, fully awake.
fn full_pool(max_particles: usize) -> ParticlePool {
    let mut pool = ParticlePool::new(max_particles);
    for name in ["pos", "vel", "color", "life"] {
        pool.add_buffer(name, 4).unwrap();
    }
    pool.wake(max_particles).unwrap();
    pool
}

fn bench_buffer_swap(c: &mut Criterion) {
    let mut buffer = ParticleBuffer::vec4(16_384);
    c.bench_function("buffer_swap", |b| {
        b.iter(|| {
            buffer.swap(black_box(0), black_box(16_383)).unwrap();
        });
    });
}

fn bench_sleep_wake_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("sleep_wake_churn");

    for count in [1_024usize, 16_384, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut pool = full_pool(count);
            b.iter(|| {
                // Retire from the front (worst case for data movement)
                // and immediately refill.
                pool.sleep(black_box(0)).unwrap();
                pool.wake(1).unwrap();
                black_box(pool.num_alive())
            });
        });
    }

    group.finish();
}

fn bench_sleep_range(c: &mut Criterion) {
    c.bench_function("sleep_range_half", |b| {
        b.iter_batched(
            || full_pool(16_384),
            |mut pool| {
                pool.sleep_range(0, 8_192).unwrap();
                black_box(pool.num_alive())
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_buffer_swap,
    bench_sleep_wake_churn,
    bench_sleep_range
);
criterion_main!(benches);
