use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;

pub const DEFAULT_SEED: u64 = 42;

/// Sizes swept by the timing report.
pub const DEFAULT_SIZES: [usize; 6] = [10, 100, 500, 1000, 2000, 3000];

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Input shapes for a last-element-pivot quicksort.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CaseKind {
    /// Already sorted `0..n`.
    Best,
    /// Reverse sorted `n..=1`.
    Worst,
    /// Uniform in `1..=10n`.
    Average,
}

pub const ALL_CASES: [CaseKind; 3] = [CaseKind::Best, CaseKind::Worst, CaseKind::Average];

impl CaseKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Worst => "worst",
            Self::Average => "average",
        }
    }
}

pub fn generate_case<R: Rng + ?Sized>(kind: CaseKind, size: usize, rng: &mut R) -> Vec<u64> {
    match kind {
        CaseKind::Best => (0..size as u64).collect(),
        CaseKind::Worst => (1..=size as u64).rev().collect(),
        CaseKind::Average => random_sequence(rng, size, size as u64 * 10),
    }
}

/// `len` values drawn uniformly from `1..=max`. `max` must be non-zero unless `len` is.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(1..=max)).collect()
}

/// `n log2 n` scaled to sit near measured timings in seconds.
pub fn n_log_n_reference(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    n * n.log2() * 1e-5
}

/// `n²` scaled to sit near measured timings in seconds.
pub fn quadratic_reference(n: usize) -> f64 {
    let n = n as f64;
    n * n * 1e-6
}
