//! Benchmark: replace_if strategies under criterion.
//!
//! Compares, on the same seeded input:
//! - execution policies: No policy / seq / par / par_unseq
//! - partitioned replace on fresh threads vs on reused K-thread pools

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use replace_bench::{
    generate_data_with, hardware_threads, partitioned_replace_if, pooled_partitioned_replace_if,
    ExecutionPolicy,
};
use replace_par::pool::PoolCache;

const SIZES: [usize; 2] = [100_000, 1_000_000];

fn base(n: usize) -> Vec<i32> {
    generate_data_with(&mut StdRng::seed_from_u64(0x5eed), n, 0..=1000)
}

fn divisible_by_12(x: &i32) -> bool {
    x % 12 == 0
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_policies");
    group.sample_size(30);

    for n in SIZES {
        let data = base(n);
        for policy in ExecutionPolicy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), n), &data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut data| {
                        policy.replace_if(black_box(&mut data), divisible_by_12, 4);
                        data
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_partitioned(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_partitioned");
    group.sample_size(20);

    let hw = hardware_threads();
    let pools = PoolCache::new();
    let data = base(1_000_000);

    let mut ks = vec![1, 2, hw, 2 * hw];
    ks.sort_unstable();
    ks.dedup();

    for k in ks {
        group.bench_with_input(BenchmarkId::new("spawned", k), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut data| {
                    partitioned_replace_if(black_box(&mut data), k, divisible_by_12, 4)
                        .expect("partitioned replace");
                    data
                },
                BatchSize::LargeInput,
            );
        });

        let pool = pools.get_or_build(k).expect("thread pool");
        group.bench_with_input(BenchmarkId::new("pooled", k), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut data| {
                    pooled_partitioned_replace_if(&pool, black_box(&mut data), k, divisible_by_12, 4);
                    data
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(replace_benches, bench_policies, bench_partitioned);
criterion_main!(replace_benches);
