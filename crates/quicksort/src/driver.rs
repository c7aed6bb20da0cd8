use tracing::{debug, trace};

use crate::partition::lomuto;
use crate::{Range, SortError, SortStats};

/// Sorts `data[low..=high]` ascending, in place.
///
/// `high < low` is a degenerate call and leaves `data` untouched. An index past the end of
/// `data` is rejected before any element moves.
pub fn sort<T: Ord>(data: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    sort_with_stats(data, low, high).map(|_| ())
}

/// Same as [`sort`], reporting how much work the sort did.
pub fn sort_with_stats<T: Ord>(
    data: &mut [T],
    low: usize,
    high: usize,
) -> Result<SortStats, SortError> {
    let mut stats = SortStats::default();
    if high < low {
        return Ok(stats);
    }
    if high >= data.len() {
        debug!(index = high, len = data.len(), "rejected out-of-bounds sort range");
        return Err(SortError::BoundsViolation {
            index: high,
            len: data.len(),
        });
    }

    drain(data, Range::new(low, high), &mut stats);
    trace!(low, high, ?stats, "sorted range");
    Ok(stats)
}

/// Sorts the whole slice. Empty and single-element slices are left as they are.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_with_stats(data);
}

pub fn quick_sort_with_stats<T: Ord>(data: &mut [T]) -> SortStats {
    let mut stats = SortStats::default();
    if let Some(high) = data.len().checked_sub(1) {
        drain(data, Range::new(0, high), &mut stats);
    }
    stats
}

/// Pops ranges until none are left. Only ranges of two or more elements are ever pushed.
fn drain<T: Ord>(data: &mut [T], initial: Range, stats: &mut SortStats) {
    if initial.len() < 2 {
        return;
    }

    let mut work_list = vec![initial];
    stats.max_work_list_len = 1;

    while let Some(Range { low, high }) = work_list.pop() {
        let p = lomuto(data, low, high, stats);

        if p > low + 1 {
            work_list.push(Range::new(low, p - 1));
        }
        if p + 1 < high {
            work_list.push(Range::new(p + 1, high));
        }
        stats.max_work_list_len = stats.max_work_list_len.max(work_list.len());
    }
}
