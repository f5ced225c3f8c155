//! One-pass statistical summaries under an explicit ordering.

mod comparator;
mod summarize;

pub use comparator::{Comparator, OrdComparator};
pub use summarize::Summarize;

/// The result of a [`Summarize`] reduction: element count plus the extreme
/// elements under the chosen ordering.
///
/// Invariant: a count of zero means both extremes are absent; a non-zero
/// count means both are present and `min <= max` under the ordering that
/// produced the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<T> {
    min: Option<T>,
    max: Option<T>,
    count: u64,
}

impl<T> Summary<T> {
    pub(crate) fn from_parts(min: Option<T>, max: Option<T>, count: u64) -> Self {
        debug_assert_eq!(count == 0, min.is_none());
        debug_assert_eq!(count == 0, max.is_none());

        Self { min, max, count }
    }

    /// The least element, or `None` if the input was empty.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// The greatest element, or `None` if the input was empty.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    /// How many elements were summarized.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the summary covers no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Consumes the summary, returning both extremes if any element was seen.
    pub fn into_min_max(self) -> Option<(T, T)> {
        self.min.zip(self.max)
    }
}
