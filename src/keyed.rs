//! Collectors that index or deduplicate items by a key.
//!
//! - [`ToMap`] builds a [`HashMap`](std::collections::HashMap) keyed by an
//!   extracted key and treats a repeated key as an error.
//! - [`ToLinkedMap`] builds an [`OrderedMap`] instead, keeping the **first**
//!   item seen for each key and the first-seen key order.
//! - [`ToLinkedSet`] deduplicates items by equality, preserving first-seen
//!   order.

mod ordered_map;
mod to_linked_map;
mod to_linked_set;
mod to_map;

pub use ordered_map::OrderedMap;
pub use to_linked_map::ToLinkedMap;
pub use to_linked_set::ToLinkedSet;
pub use to_map::{DuplicateKeyError, ToMap};
