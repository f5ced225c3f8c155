//! The core collector traits and the drivers that run them.
//!
//! A collector is a reduction strategy: it absorbs items one at a time and,
//! once the input is exhausted, is consumed to produce its final result.
//! Collectors whose intermediate state can be combined across input
//! partitions additionally implement [`MergeCollector`], which is what a
//! fork-join driver needs to reduce partitions independently and merge the
//! partial states pairwise.

mod base;
mod collect;
mod collect_with;
mod merge;

pub use base::CollectorBase;
pub use collect::Collector;
pub use collect_with::CollectWith;
pub use merge::{MergeCollector, collect_partitioned};
