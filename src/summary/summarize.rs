use std::fmt::{self, Debug};
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

use super::{Comparator, OrdComparator, Summary};

/// A collector computing count, minimum, and maximum in one pass.
///
/// The ordering is explicit: [`Summarize::new()`] opts in to the natural
/// [`Ord`] of the element type, [`Summarize::by()`] takes a comparison
/// function. Its [`Output`](CollectorBase::Output) is a [`Summary`].
///
/// Ties are broken in favor of the first element seen during a sequential
/// pass (only a strictly lesser item replaces the minimum, only a strictly
/// greater one the maximum). Under partitioned accumulation the aggregate
/// count/min/max values are independent of the partitioning — the merge is
/// associative and commutative — but which of several *equal* extreme
/// elements ends up in the summary depends on the partition boundaries.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::Summarize;
///
/// let stats = [5, 1, 9, 1, 3].into_iter().collect_with(Summarize::new());
///
/// assert_eq!(stats.min(), Some(&1));
/// assert_eq!(stats.max(), Some(&9));
/// assert_eq!(stats.count(), 5);
/// ```
///
/// With an explicit ordering:
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::Summarize;
///
/// let by_len = ["sparrow", "owl", "heron"]
///     .into_iter()
///     .collect_with(Summarize::by(|a: &&str, b: &&str| a.len().cmp(&b.len())));
///
/// assert_eq!(by_len.min(), Some(&"owl"));
/// assert_eq!(by_len.max(), Some(&"sparrow"));
/// ```
#[derive(Clone)]
pub struct Summarize<T, Cmp = OrdComparator> {
    min: Option<T>,
    max: Option<T>,
    count: u64,
    cmp: Cmp,
}

impl<T> Summarize<T>
where
    T: Ord,
{
    /// Creates a collector using `T`'s natural ordering.
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            count: 0,
            cmp: OrdComparator,
        }
    }
}

impl<T> Summarize<T> {
    /// Creates a collector using an explicit comparison function.
    pub const fn by<Cmp>(cmp: Cmp) -> Summarize<T, Cmp>
    where
        Cmp: Comparator<T>,
    {
        Summarize {
            min: None,
            max: None,
            count: 0,
            cmp,
        }
    }
}

impl<T> Default for Summarize<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Cmp> CollectorBase for Summarize<T, Cmp> {
    type Output = Summary<T>;

    fn finish(self) -> Self::Output {
        Summary::from_parts(self.min, self.max, self.count)
    }
}

impl<T, Cmp> Collector<T> for Summarize<T, Cmp>
where
    T: Clone,
    Cmp: Comparator<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.count += 1;

        // Strict comparisons, so the first-seen element wins ties.
        let new_min = match &self.min {
            None => true,
            Some(min) => self.cmp.lt(&item, min),
        };
        if new_min {
            self.min = Some(item.clone());
        }

        let new_max = match &self.max {
            None => true,
            Some(max) => self.cmp.gt(&item, max),
        };
        if new_max {
            self.max = Some(item);
        }

        ControlFlow::Continue(())
    }
}

impl<T, Cmp> MergeCollector<T> for Summarize<T, Cmp>
where
    T: Clone,
    Cmp: Comparator<T>,
{
    /// Count sum, lesser minimum, greater maximum. On equal extremes the
    /// earlier partition's element is kept.
    fn merge(&mut self, later: Self) {
        self.count += later.count;

        self.min = match (self.min.take(), later.min) {
            (Some(mine), Some(theirs)) => {
                Some(if self.cmp.lt(&theirs, &mine) { theirs } else { mine })
            }
            (mine, theirs) => mine.or(theirs),
        };

        self.max = match (self.max.take(), later.max) {
            (Some(mine), Some(theirs)) => {
                Some(if self.cmp.gt(&theirs, &mine) { theirs } else { mine })
            }
            (mine, theirs) => mine.or(theirs),
        };
    }
}

impl<T, Cmp> Debug for Summarize<T, Cmp>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarize")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("count", &self.count)
            .field("cmp", &std::any::type_name::<Cmp>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::collector::{CollectWith, collect_partitioned};

    #[test]
    fn summarizes_in_one_pass() {
        let stats = [5, 1, 9, 1, 3].into_iter().collect_with(Summarize::new());

        assert_eq!(stats.min(), Some(&1));
        assert_eq!(stats.max(), Some(&9));
        assert_eq!(stats.count(), 5);
        assert!(!stats.is_empty());
    }

    #[test]
    fn empty_input_has_no_extremes() {
        let stats = std::iter::empty::<i32>().collect_with(Summarize::new());

        assert!(stats.is_empty());
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.into_min_max(), None);
    }

    #[test]
    fn single_element_is_both_extremes() {
        let stats = std::iter::once(42).collect_with(Summarize::new());
        assert_eq!(stats.into_min_max(), Some((42, 42)));
    }

    #[test]
    fn merge_matches_the_spec_example() {
        let merged = collect_partitioned([vec![5, 1], vec![9, 1, 3]], Summarize::<i32>::new);
        let whole = [5, 1, 9, 1, 3].into_iter().collect_with(Summarize::new());

        assert_eq!(merged, whole);
    }

    #[test]
    fn sequential_ties_keep_the_first_seen() {
        // Compare by key only; the payload tells occurrences apart.
        fn by_key(a: &(i32, u32), b: &(i32, u32)) -> Ordering {
            a.0.cmp(&b.0)
        }

        let stats = [(1, 10), (0, 20), (0, 30), (1, 40)]
            .into_iter()
            .collect_with(Summarize::by(by_key));

        assert_eq!(stats.min(), Some(&(0, 20)));
        assert_eq!(stats.max(), Some(&(1, 10)));
    }

    mod proptests {
        use proptest::collection::vec as propvec;
        use proptest::prelude::*;

        use super::*;
        use crate::test_utils::{check_collect_paths, check_partitioned};

        proptest! {
            #[test]
            fn matches_the_iterator_oracle(items in propvec(any::<i32>(), 0..64)) {
                let stats = items.iter().copied().collect_with(Summarize::new());

                prop_assert_eq!(stats.min(), items.iter().min());
                prop_assert_eq!(stats.max(), items.iter().max());
                prop_assert_eq!(stats.count(), items.len() as u64);
            }

            #[test]
            fn collect_paths_agree(items in propvec(any::<i32>(), 0..64)) {
                check_collect_paths(&items, Summarize::<i32>::new)?;
            }

            #[test]
            fn partitioning_never_changes_the_aggregate(
                items in propvec(any::<i32>(), 0..64),
                cuts in propvec(0usize..64, 0..6),
            ) {
                check_partitioned(&items, &cuts, Summarize::<i32>::new)?;
            }
        }
    }
}
