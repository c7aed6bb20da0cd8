use std::hint::black_box;
use std::time::Duration;

use bench::{
    ALL_CASES, CaseKind, apply_large_runtime_config, apply_medium_runtime_config,
    apply_small_runtime_config, generate_case, seeded_rng,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use quicksort::quick_sort;

const BENCH_SIZES: [usize; 4] = [100, 500, 1000, 3000];

fn bench_quicksort(c: &mut Criterion) {
    for &kind in &ALL_CASES {
        let mut group = c.benchmark_group(format!("quicksort/{}", kind.label()));

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, kind, size);
            let base = generate_case(kind, size, &mut seeded_rng(seed_for(kind, size)));

            group.bench_function(BenchmarkId::new("lomuto_iterative", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_clones(&base, iters, |data| quick_sort(data))
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_clones(&base, iters, |data| data.sort_unstable())
                });
            });
        }

        group.finish();
    }
}

/// Times only the sort, not the clone that feeds it.
fn time_clones(base: &[u64], iters: u64, mut sort: impl FnMut(&mut [u64])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = std::time::Instant::now();
        sort(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

// Ordered inputs are quadratic, so they get the longer presets earlier.
fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, kind: CaseKind, size: usize) {
    let cost = match kind {
        CaseKind::Average => size,
        CaseKind::Best | CaseKind::Worst => size * 4,
    };
    if cost <= 1000 {
        apply_small_runtime_config(group);
    } else if cost <= 4000 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

#[inline]
fn seed_for(kind: CaseKind, size: usize) -> u64 {
    let k = match kind {
        CaseKind::Best => 1_u64,
        CaseKind::Worst => 2_u64,
        CaseKind::Average => 3_u64,
    };
    mix_seed(0x5EED_2026 ^ (k << 56) ^ (size as u64))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);
