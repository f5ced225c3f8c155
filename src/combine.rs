//! Running two collectors over the same input in a single pass.

use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

/// Pairs two collectors into one that feeds every item to both.
///
/// The result is the pair of both inner results, computed in one pass: the
/// first collector receives a clone of each item, the second receives the
/// item itself. The combined collector keeps accumulating while either inner
/// collector does, and merges partitioned state side by side when both inner
/// collectors are [`MergeCollector`]s.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::{Summarize, ToLinkedSet, combine};
///
/// let (unique, stats) = [3, 1, 3, 2, 1]
///     .into_iter()
///     .collect_with(combine(ToLinkedSet::new(), Summarize::new()));
///
/// assert_eq!(unique, [3, 1, 2]);
/// assert_eq!(stats.min(), Some(&1));
/// assert_eq!(stats.max(), Some(&3));
/// assert_eq!(stats.count(), 5);
/// ```
pub fn combine<C1, C2>(first: C1, second: C2) -> Combined<C1, C2> {
    Combined { first, second }
}

/// A collector feeding every item to two inner collectors.
///
/// Created by [`combine()`]; see its documentation.
#[derive(Debug, Clone)]
pub struct Combined<C1, C2> {
    first: C1,
    second: C2,
}

impl<C1, C2> CollectorBase for Combined<C1, C2>
where
    C1: CollectorBase,
    C2: CollectorBase,
{
    type Output = (C1::Output, C2::Output);

    fn finish(self) -> Self::Output {
        (self.first.finish(), self.second.finish())
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        match (self.first.break_hint(), self.second.break_hint()) {
            (ControlFlow::Break(()), ControlFlow::Break(())) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

impl<T, C1, C2> Collector<T> for Combined<C1, C2>
where
    T: Clone,
    C1: Collector<T>,
    C2: Collector<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        // A stopped side tolerates further items per the `Collector`
        // contract, so both sides stay driven until both have broken.
        match (
            self.first.collect(item.clone()),
            self.second.collect(item),
        ) {
            (ControlFlow::Break(()), ControlFlow::Break(())) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

impl<T, C1, C2> MergeCollector<T> for Combined<C1, C2>
where
    T: Clone,
    C1: MergeCollector<T>,
    C2: MergeCollector<T>,
{
    fn merge(&mut self, later: Self) {
        self.first.merge(later.first);
        self.second.merge(later.second);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{CollectWith, collect_partitioned};
    use crate::keyed::{ToLinkedSet, ToMap};
    use crate::rev::Reversed;
    use crate::summary::Summarize;

    #[test]
    fn both_sides_match_their_standalone_runs() {
        let input = [5, 1, 9, 1, 3];

        let standalone_set = input.into_iter().collect_with(ToLinkedSet::new());
        let standalone_stats = input.into_iter().collect_with(Summarize::new());

        let (unique, stats) = input
            .into_iter()
            .collect_with(combine(ToLinkedSet::new(), Summarize::new()));

        assert_eq!(unique, standalone_set);
        assert_eq!(stats, standalone_stats);
    }

    #[test]
    fn one_failed_side_does_not_starve_the_other() {
        // `ToMap` stops on the duplicate; the set still sees every item.
        let (map, unique) = [1, 2, 1, 3]
            .into_iter()
            .collect_with(combine(ToMap::new(|n: &i32| *n), ToLinkedSet::new()));

        assert!(map.is_err());
        assert_eq!(unique, [1, 2, 3]);
    }

    #[test]
    fn merges_each_side_independently() {
        let items = [4, 7, 4, 1, 9, 1];
        let sequential = items
            .into_iter()
            .collect_with(combine(Reversed::new(), Summarize::new()));
        let (seq_rev, seq_stats) = (sequential.0.collect::<Vec<_>>(), sequential.1);

        let (rev, stats) = collect_partitioned(
            [vec![4, 7], vec![4, 1, 9, 1]],
            || combine(Reversed::new(), Summarize::new()),
        );

        assert_eq!(rev.collect::<Vec<_>>(), seq_rev);
        assert_eq!(stats, seq_stats);
    }
}
