/// Errors raised when a caller hands the sorter indices it cannot honor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SortError {
    /// An index lies outside `0..len`.
    #[error("index {index} out of bounds for sequence of length {len}")]
    BoundsViolation { index: usize, len: usize },

    /// `low > high` was passed to the partitioner directly.
    #[error("inverted range: low {low} > high {high}")]
    InvertedRange { low: usize, high: usize },
}
