use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use svec::{GrowthConfig, SparseVec};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for (name, config) in [
        ("exact", GrowthConfig::exact()),
        ("amortized", GrowthConfig::amortized()),
    ] {
        group.bench_with_input(BenchmarkId::new(name, 10_000), &config, |b, config| {
            b.iter(|| {
                let mut vector = SparseVec::with_allocator(0, *config);
                for value in 0..10_000u32 {
                    vector.push(black_box(value));
                }
                vector
            })
        });
    }

    group.finish();
}

fn bench_random_set(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let indices: Vec<usize> = (0..10_000).map(|_| rng.gen_range(0..100_000)).collect();

    c.bench_function("random_set_10k", |b| {
        b.iter(|| {
            let mut vector = SparseVec::with_allocator(0, GrowthConfig::amortized());
            for (value, &index) in indices.iter().enumerate() {
                vector.set(index, value);
            }
            vector
        })
    });
}

fn bench_compact(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let slots: Vec<Option<u64>> = (0..100_000)
        .map(|i| rng.gen_bool(0.1).then_some(i))
        .collect();
    let template: SparseVec<u64> = slots.into_iter().collect();

    c.bench_function("compact_100k_10pct", |b| {
        b.iter_batched(
            || template.clone(),
            |mut vector| black_box(vector.compact()),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_insert_shift(c: &mut Criterion) {
    c.bench_function("insert_front_1k", |b| {
        b.iter(|| {
            let mut vector = SparseVec::with_allocator(0, GrowthConfig::amortized());
            for value in 0..1_000u32 {
                vector.insert(0, value);
            }
            vector
        })
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_random_set,
    bench_compact,
    bench_insert_shift
);
criterion_main!(benches);
