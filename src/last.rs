//! Retrieving the final element of a sequence.

use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

/// A collector that keeps only the most recent item it has seen.
///
/// Its [`Output`](CollectorBase::Output) is `Some(last_item)`, or `None` for
/// an empty input. Merging is right-biased: when two partial states meet,
/// the later partition wins unless it saw nothing at all.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::Last;
///
/// assert_eq!([7, 2, 9].into_iter().collect_with(Last::new()), Some(9));
/// assert_eq!(std::iter::empty::<i32>().collect_with(Last::new()), None);
/// ```
#[derive(Debug, Clone)]
pub struct Last<T> {
    value: Option<T>,
}

impl<T> Last<T> {
    /// Creates an empty collector.
    pub const fn new() -> Self {
        Self { value: None }
    }
}

impl<T> Default for Last<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectorBase for Last<T> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.value
    }
}

impl<T> Collector<T> for Last<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.value = Some(item);
        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        // Only overwrite when the iterator actually yielded something.
        if let Some(last) = items.into_iter().last() {
            self.value = Some(last);
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        items.into_iter().last().or(self.value)
    }
}

impl<T> MergeCollector<T> for Last<T> {
    fn merge(&mut self, later: Self) {
        if later.value.is_some() {
            self.value = later.value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CollectWith;

    #[test]
    fn keeps_the_final_item() {
        assert_eq!([7, 2, 9].into_iter().collect_with(Last::new()), Some(9));
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(std::iter::empty::<i32>().collect_with(Last::new()), None);
    }

    #[test]
    fn collect_many_ignores_an_empty_tail() {
        let mut last = Last::new();
        assert!(last.collect(5).is_continue());
        assert!(last.collect_many(std::iter::empty()).is_continue());
        assert_eq!(last.finish(), Some(5));
    }

    #[test]
    fn merge_is_right_biased() {
        let mut left = Last::new();
        let _ = left.collect_many([1, 2]);
        let mut right = Last::new();
        let _ = right.collect(3);

        left.merge(right);
        assert_eq!(left.finish(), Some(3));
    }

    #[test]
    fn merging_an_empty_partition_keeps_the_left_value() {
        let mut left = Last::new();
        let _ = left.collect(4);

        left.merge(Last::new());
        assert_eq!(left.finish(), Some(4));
    }
}
