//! Shared checks for exercising a collector through every driving path.

use std::fmt::Debug;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::collector::{Collector, MergeCollector, collect_partitioned};

/// Asserts that `collect`, `collect_many`, and `collect_then_finish` all
/// produce the same output for the same input.
pub fn check_collect_paths<T, C>(items: &[T], mut factory: impl FnMut() -> C) -> TestCaseResult
where
    T: Clone,
    C: Collector<T, Output: PartialEq + Debug>,
{
    let one_by_one = {
        let mut collector = factory();
        for item in items.iter().cloned() {
            let _ = collector.collect(item);
        }
        collector.finish()
    };

    let mut bulk = factory();
    let _ = bulk.collect_many(items.iter().cloned());
    prop_assert_eq!(
        &bulk.finish(),
        &one_by_one,
        "`collect_many` mismatched `collect`"
    );

    prop_assert_eq!(
        &factory().collect_then_finish(items.iter().cloned()),
        &one_by_one,
        "`collect_then_finish` mismatched `collect`"
    );

    Ok(())
}

/// Asserts that accumulating per partition and merging matches a single
/// sequential pass, for the partitioning described by `cuts`.
pub fn check_partitioned<T, C>(
    items: &[T],
    cuts: &[usize],
    mut factory: impl FnMut() -> C,
) -> TestCaseResult
where
    T: Clone,
    C: MergeCollector<T, Output: PartialEq + Debug>,
{
    let sequential = factory().collect_then_finish(items.iter().cloned());
    let partitioned = collect_partitioned(split_at_cuts(items, cuts), factory);

    prop_assert_eq!(
        partitioned,
        sequential,
        "partitioned merge diverged from the sequential pass"
    );

    Ok(())
}

/// Splits `items` into consecutive partitions at the given cut positions.
///
/// Cuts are clamped to the input length and deduplicated, so any slice of
/// arbitrary indices describes a valid partitioning. Empty partitions are
/// kept: merging an empty accumulator must be a no-op.
pub fn split_at_cuts<T: Clone>(items: &[T], cuts: &[usize]) -> Vec<Vec<T>> {
    let mut bounds: Vec<usize> = cuts.iter().map(|&cut| cut.min(items.len())).collect();
    bounds.push(0);
    bounds.push(items.len());
    bounds.sort_unstable();

    bounds
        .windows(2)
        .map(|pair| items[pair[0]..pair[1]].to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_covers_the_input_in_order() {
        let parts = split_at_cuts(&[1, 2, 3, 4, 5], &[99, 2, 2]);
        let flattened: Vec<_> = parts.iter().flatten().copied().collect();

        assert_eq!(flattened, [1, 2, 3, 4, 5]);
        assert_eq!(parts[0], [1, 2]);
    }
}
