//! Side-effecting consumption of input in fixed-size batches.

use std::fmt::{self, Debug};
use std::mem;
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase};

/// A collector that groups consecutive items into batches of `batch_size`
/// and hands each batch to a callback, in input order.
///
/// Only the final batch may be shorter; a non-empty trailing batch is
/// flushed by [`finish()`](CollectorBase::finish). The
/// [`Output`](CollectorBase::Output) is `()` — the work happens in the
/// callback.
///
/// Batches are built from consecutive items, so this collector only makes
/// sense over a single sequential pass. It implements
/// [`Collector`] but not [`MergeCollector`](crate::MergeCollector), which
/// keeps it out of partitioned reductions at compile time.
///
/// # Panics
///
/// [`ForEachBatch::new`] panics if `batch_size` is zero.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::ForEachBatch;
///
/// let mut batches = Vec::new();
/// ["a", "b", "c", "d", "e"]
///     .into_iter()
///     .collect_with(ForEachBatch::new(2, |batch| batches.push(batch)));
///
/// assert_eq!(batches, [vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
/// ```
pub struct ForEachBatch<T, F> {
    buf: Vec<T>,
    batch_size: usize,
    on_batch: F,
}

impl<T, F> ForEachBatch<T, F>
where
    F: FnMut(Vec<T>),
{
    /// Creates a collector flushing every `batch_size` items into `on_batch`.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn new(batch_size: usize, on_batch: F) -> Self {
        assert!(batch_size > 0, "batch size must be positive");

        Self {
            buf: Vec::with_capacity(batch_size),
            batch_size,
            on_batch,
        }
    }
}

impl<T, F> CollectorBase for ForEachBatch<T, F>
where
    F: FnMut(Vec<T>),
{
    type Output = ();

    /// Flushes the trailing partial batch, if any.
    fn finish(self) -> Self::Output {
        let Self {
            buf, mut on_batch, ..
        } = self;

        if !buf.is_empty() {
            on_batch(buf);
        }
    }
}

impl<T, F> Collector<T> for ForEachBatch<T, F>
where
    F: FnMut(Vec<T>),
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.buf.push(item);
        if self.buf.len() == self.batch_size {
            let full = mem::replace(&mut self.buf, Vec::with_capacity(self.batch_size));
            (self.on_batch)(full);
        }

        ControlFlow::Continue(())
    }
}

impl<T: Debug, F> Debug for ForEachBatch<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEachBatch")
            .field("buffered", &self.buf)
            .field("batch_size", &self.batch_size)
            .field("on_batch", &std::any::type_name::<F>())
            .finish()
    }
}
