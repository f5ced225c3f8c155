//! Extra collector strategies for iterators.
//!
//! If [`Iterator`] is the producing half of a data pipeline, a
//! [`Collector`] is the consuming half: a reduction strategy that absorbs
//! items one at a time and is then consumed to produce its result. This
//! crate provides a handful of strategies that `std` does not:
//!
//! - [`ToMap`] / [`ToLinkedMap`]: index items by an extracted key, either
//!   strictly (a repeated key is an error) or left-biased with first-seen
//!   key order.
//! - [`ToLinkedSet`]: deduplicate while preserving first-seen order.
//! - [`ForEachBatch`]: hand consecutive items to a callback in fixed-size
//!   batches.
//! - [`combine()`]: run two strategies over the same input in one pass.
//! - [`Reversed`]: replay the input in reverse arrival order.
//! - [`Last`]: the final element, if any.
//! - [`Summarize`]: count, minimum, and maximum under an explicit ordering.
//!
//! # One pass, several answers
//!
//! Computing the distinct values *and* the extremes of a sequence normally
//! takes two passes or a hand-rolled fold. With [`combine()`] it is a single
//! declarative pass:
//!
//! ```
//! use extra_collect::prelude::*;
//! use extra_collect::{Summarize, ToLinkedSet, combine};
//!
//! let (unique, stats) = [3, 1, 3, 2, 1]
//!     .into_iter()
//!     .collect_with(combine(ToLinkedSet::new(), Summarize::new()));
//!
//! assert_eq!(unique, [3, 1, 2]);
//! assert_eq!(stats.min(), Some(&1));
//! assert_eq!(stats.max(), Some(&3));
//! assert_eq!(stats.count(), 5);
//! ```
//!
//! # Fork-join friendliness
//!
//! Every strategy follows the accumulate/merge/finish protocol: an
//! accumulator is created, absorbs items, optionally absorbs sibling
//! accumulators from other input partitions, and is finally consumed. A
//! strategy that survives partitioned accumulation implements
//! [`MergeCollector`]; [`collect_partitioned()`] drives that protocol over
//! pre-partitioned input:
//!
//! ```
//! use extra_collect::prelude::*;
//! use extra_collect::{Summarize, collect_partitioned};
//!
//! let whole = [5, 1, 9, 1, 3].into_iter().collect_with(Summarize::new());
//! let split = collect_partitioned([vec![5, 1], vec![9, 1, 3]], Summarize::<i32>::new);
//!
//! assert_eq!(split, whole);
//! ```
//!
//! [`ForEachBatch`] is the deliberate exception: its callback must observe
//! consecutive batches in input order, so it does not implement
//! [`MergeCollector`] and stays sequential by construction.
//!
//! Separately from the collectors, the [`text`] module hosts the
//! sub-formatter lookup contract: pluggable text formatting strategies keyed
//! by a string modifier and a locale.

pub mod batch;
pub mod collector;
pub mod combine;
pub mod keyed;
pub mod last;
pub mod prelude;
pub mod rev;
pub mod summary;
pub mod text;

#[cfg(test)]
mod test_utils;

pub use batch::ForEachBatch;
pub use collector::{CollectWith, Collector, CollectorBase, MergeCollector, collect_partitioned};
pub use combine::{Combined, combine};
pub use keyed::{DuplicateKeyError, OrderedMap, ToLinkedMap, ToLinkedSet, ToMap};
pub use last::Last;
pub use rev::Reversed;
pub use summary::{Comparator, OrdComparator, Summarize, Summary};
