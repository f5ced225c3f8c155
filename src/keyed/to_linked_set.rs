use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

/// A collector that deduplicates items by equality while preserving the
/// order in which they were first seen.
///
/// Its [`Output`](CollectorBase::Output) is a `Vec<T>` holding each distinct
/// item once, in first-seen order. Each item is stored exactly once; the
/// first-seen rank is tracked alongside it and the output is ordered by that
/// rank when finishing.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::ToLinkedSet;
///
/// let unique = [3, 1, 3, 2, 1].into_iter().collect_with(ToLinkedSet::new());
/// assert_eq!(unique, [3, 1, 2]);
/// ```
pub struct ToLinkedSet<T> {
    ranks: HashMap<T, usize>,
}

impl<T> ToLinkedSet<T> {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            ranks: HashMap::new(),
        }
    }
}

impl<T> Default for ToLinkedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectorBase for ToLinkedSet<T> {
    type Output = Vec<T>;

    fn finish(self) -> Self::Output {
        let mut entries: Vec<_> = self.ranks.into_iter().collect();
        entries.sort_unstable_by_key(|&(_, rank)| rank);
        entries.into_iter().map(|(item, _)| item).collect()
    }
}

impl<T> Collector<T> for ToLinkedSet<T>
where
    T: Eq + Hash,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let next = self.ranks.len();
        self.ranks.entry(item).or_insert(next);
        ControlFlow::Continue(())
    }
}

impl<T> MergeCollector<T> for ToLinkedSet<T>
where
    T: Eq + Hash,
{
    fn merge(&mut self, later: Self) {
        let mut entries: Vec<_> = later.ranks.into_iter().collect();
        entries.sort_unstable_by_key(|&(_, rank)| rank);

        for (item, _) in entries {
            let next = self.ranks.len();
            self.ranks.entry(item).or_insert(next);
        }
    }
}

impl<T> Debug for ToLinkedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToLinkedSet")
            .field("distinct", &self.ranks.len())
            .finish()
    }
}
