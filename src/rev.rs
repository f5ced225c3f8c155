//! Materializing an input sequence in reverse.

use std::iter::Rev;
use std::ops::ControlFlow;
use std::vec;

use crate::collector::{Collector, CollectorBase, MergeCollector};

/// A collector that buffers the whole input and yields it back in exactly
/// reversed arrival order.
///
/// Its [`Output`](CollectorBase::Output) is an iterator over the items, last
/// arrival first. The order is the reverse of arrival, never of any sorted
/// order.
///
/// Every item is held in memory until [`finish()`](CollectorBase::finish),
/// so this collector is unsuitable for unbounded or extremely large inputs.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::Reversed;
///
/// let backwards: Vec<_> = [1, 2, 3]
///     .into_iter()
///     .collect_with(Reversed::new())
///     .collect();
///
/// assert_eq!(backwards, [3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Reversed<T> {
    items: Vec<T>,
}

impl<T> Reversed<T> {
    /// Creates an empty collector.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Reversed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectorBase for Reversed<T> {
    type Output = Rev<vec::IntoIter<T>>;

    fn finish(self) -> Self::Output {
        self.items.into_iter().rev()
    }
}

impl<T> Collector<T> for Reversed<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.items.push(item);
        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.items.extend(items);
        ControlFlow::Continue(())
    }
}

impl<T> MergeCollector<T> for Reversed<T> {
    fn merge(&mut self, mut later: Self) {
        // Restore arrival order now; the single reversal happens in `finish`.
        self.items.append(&mut later.items);
    }
}
