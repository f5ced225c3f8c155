//! Re-exports the traits needed to define and drive collectors.
//!
//! This module is intended to be imported with a wildcard:
//!
//! ```
//! use extra_collect::prelude::*;
//! ```

pub use crate::collector::{CollectWith, Collector, CollectorBase, MergeCollector};
