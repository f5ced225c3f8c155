use super::Collector;

/// A collector whose partial states can be merged across input partitions.
///
/// This is the contract a fork-join driver relies on: the input is split
/// into partitions, each partition is accumulated by its own collector
/// instance, and the partial states are folded back together with
/// [`merge()`](MergeCollector::merge) before the single final
/// [`finish()`](super::CollectorBase::finish).
///
/// `merge()` takes the absorbed collector by value, so no accumulator is
/// ever shared between two partitions; the merge call is the only point
/// where two states meet.
///
/// Strategies whose output depends on seeing items strictly in arrival
/// order with side effects along the way — [`ForEachBatch`](crate::ForEachBatch)
/// is the one in this crate — deliberately do not implement this trait and
/// are thereby restricted to sequential use at compile time.
pub trait MergeCollector<T>: Collector<T> {
    /// Absorbs the state of `later`, a sibling collector that accumulated a
    /// **later** partition of the same input.
    ///
    /// Merging must be equivalent to having fed `later`'s partition directly
    /// after this collector's own, except where a strategy documents a
    /// looser guarantee (tie-breaking in
    /// [`Summarize`](crate::Summarize), the reported key in
    /// [`ToMap`](crate::ToMap)).
    fn merge(&mut self, later: Self)
    where
        Self: Sized;
}

/// Reduces partitioned input the way a fork-join engine would, sequentially.
///
/// Each partition is accumulated by a fresh collector from `factory`, and the
/// partial states are merged left to right. The partitions must cover the
/// input in order; the result then matches a single sequential pass over the
/// concatenated partitions (up to each strategy's documented merge leeway).
///
/// # Example
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::{Summarize, collect_partitioned};
///
/// let whole = [5, 1, 9, 1, 3].into_iter().collect_with(Summarize::new());
/// let split = collect_partitioned(
///     [vec![5, 1], vec![9, 1, 3]],
///     Summarize::<i32>::new,
/// );
///
/// assert_eq!(split, whole);
/// ```
pub fn collect_partitioned<T, C, P>(partitions: P, mut factory: impl FnMut() -> C) -> C::Output
where
    C: MergeCollector<T>,
    P: IntoIterator,
    P::Item: IntoIterator<Item = T>,
{
    let mut merged = factory();
    for partition in partitions {
        let mut part = factory();
        let _ = part.collect_many(partition);
        merged.merge(part);
    }
    merged.finish()
}
