use std::time::{Duration, Instant};

use anyhow::ensure;
use bench::{ALL_CASES, CaseKind, generate_case};
use quicksort::{SortStats, quick_sort_with_stats};
use rand::Rng;
use tracing::debug;

/// One timed sort of a private copy of the input.
#[derive(Clone, Debug)]
pub struct Timing {
    pub elapsed: Duration,
    pub sorted: Vec<u64>,
    pub stats: SortStats,
}

impl Timing {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Sorts a copy of `data`; the input itself is never modified.
pub fn measure(data: &[u64]) -> Timing {
    let mut sorted = data.to_vec();
    let start = Instant::now();
    let stats = quick_sort_with_stats(&mut sorted);
    let elapsed = start.elapsed();
    Timing {
        elapsed,
        sorted,
        stats,
    }
}

/// Like [`measure`], but fails if the output is not ascending.
pub fn measure_verified(label: &str, data: &[u64]) -> anyhow::Result<Timing> {
    let timing = measure(data);
    ensure!(
        timing.sorted.is_sorted(),
        "{label}: output of length {} is not sorted",
        timing.sorted.len()
    );
    Ok(timing)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepRow {
    pub size: usize,
    pub best: f64,
    pub worst: f64,
    pub average: f64,
}

impl SweepRow {
    fn set(&mut self, kind: CaseKind, seconds: f64) {
        match kind {
            CaseKind::Best => self.best = seconds,
            CaseKind::Worst => self.worst = seconds,
            CaseKind::Average => self.average = seconds,
        }
    }
}

/// Times best, worst and average inputs at every size, in that order per size.
pub fn sweep<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> anyhow::Result<Vec<SweepRow>> {
    let mut rows = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let cases = ALL_CASES.map(|kind| (kind, generate_case(kind, size, rng)));

        let mut row = SweepRow {
            size,
            best: 0.0,
            worst: 0.0,
            average: 0.0,
        };
        for (kind, data) in &cases {
            let timing = measure_verified(&format!("{} case, size {size}", kind.label()), data)?;
            debug!(
                size,
                case = kind.label(),
                comparisons = timing.stats.comparisons,
                swaps = timing.stats.swaps,
                max_work_list_len = timing.stats.max_work_list_len,
                "measured"
            );
            row.set(*kind, timing.seconds());
        }
        rows.push(row);
    }
    Ok(rows)
}
