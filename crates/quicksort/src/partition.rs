use tracing::debug;

use crate::{SortError, SortStats};

/// Lomuto partition of `data[low..=high]` around `data[high]`.
///
/// Returns the pivot's final index `p`: everything in `low..p` compares `<=` the pivot and
/// everything in `p + 1..=high` compares `>` it. Equal elements may end up on either side of
/// earlier pivots, so the scheme is not stable.
pub fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> Result<usize, SortError> {
    check_range(data.len(), low, high)?;
    Ok(lomuto(data, low, high, &mut SortStats::default()))
}

pub(crate) fn check_range(len: usize, low: usize, high: usize) -> Result<(), SortError> {
    if low > high {
        debug!(low, high, "rejected inverted range");
        return Err(SortError::InvertedRange { low, high });
    }
    if high >= len {
        debug!(index = high, len, "rejected out-of-bounds range");
        return Err(SortError::BoundsViolation { index: high, len });
    }
    Ok(())
}

/// Caller guarantees `low <= high < data.len()`.
pub(crate) fn lomuto<T: Ord>(
    data: &mut [T],
    low: usize,
    high: usize,
    stats: &mut SortStats,
) -> usize {
    debug_assert!(low <= high && high < data.len());

    // `store` is one past the last slot known to hold an element <= pivot.
    let mut store = low;
    for j in low..high {
        stats.comparisons += 1;
        // The pivot stays at `high` for the whole scan: `store <= j < high`.
        if data[j] <= data[high] {
            data.swap(store, j);
            stats.swaps += 1;
            store += 1;
        }
    }

    data.swap(store, high);
    stats.swaps += 1;
    stats.partitions += 1;
    store
}
