//! In-place quicksort driven by an explicit work-list of index ranges.
//!
//! Partitioning follows the Lomuto scheme with the last element of each range as pivot.
//! The sort is not stable and, with that pivot choice, degrades to *O*(*n*²) comparisons on
//! already sorted or reverse sorted input.
//!
//! ```
//! let mut v = vec![10, 80, 3, 19, 14, 7, 5, 12];
//! quicksort::sort(&mut v, 0, 7).unwrap();
//! assert_eq!(v, [3, 5, 7, 10, 12, 14, 19, 80]);
//! ```

mod driver;
mod error;
mod partition;

pub use driver::{quick_sort, quick_sort_with_stats, sort, sort_with_stats};
pub use error::SortError;
pub use partition::partition;

/// Inclusive index pair `low..=high` still waiting to be sorted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Range {
    pub(crate) low: usize,
    pub(crate) high: usize,
}

impl Range {
    #[inline]
    pub(crate) fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    #[inline]
    pub(crate) fn len(self) -> usize {
        self.high - self.low + 1
    }
}

/// Work counters for a single sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub partitions: u64,
    /// Largest number of ranges pending at once.
    pub max_work_list_len: usize,
}
