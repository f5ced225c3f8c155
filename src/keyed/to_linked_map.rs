use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

use super::OrderedMap;

/// A collector that indexes items by an extracted key into an
/// [`OrderedMap`], keeping the first item seen for each key.
///
/// Unlike [`ToMap`](crate::ToMap), a repeated key is not an error: the later
/// item is dropped (left-biased merge) and the output preserves the order in
/// which keys were first seen.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::ToLinkedMap;
///
/// let by_initial = ["cherry", "apple", "cranberry"]
///     .into_iter()
///     .collect_with(ToLinkedMap::new(|s: &&str| s.as_bytes()[0]));
///
/// // "cranberry" lost to "cherry"; key order is first-seen.
/// assert_eq!(by_initial.get(&b'c'), Some(&"cherry"));
/// assert_eq!(by_initial.keys().collect::<Vec<_>>(), [&b'c', &b'a']);
/// ```
pub struct ToLinkedMap<K, T, F> {
    map: OrderedMap<K, T>,
    key_of: F,
}

impl<K, T, F> ToLinkedMap<K, T, F> {
    /// Creates a collector extracting each item's key with `key_of`.
    pub fn new(key_of: F) -> Self
    where
        F: FnMut(&T) -> K,
    {
        Self {
            map: OrderedMap::new(),
            key_of,
        }
    }
}

impl<K, T, F> CollectorBase for ToLinkedMap<K, T, F> {
    type Output = OrderedMap<K, T>;

    fn finish(self) -> Self::Output {
        self.map
    }
}

impl<K, T, F> Collector<T> for ToLinkedMap<K, T, F>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let key = (self.key_of)(&item);
        self.map.insert_first(key, item);
        ControlFlow::Continue(())
    }
}

impl<K, T, F> MergeCollector<T> for ToLinkedMap<K, T, F>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    fn merge(&mut self, later: Self) {
        // The later partition's entries come out in their own first-seen
        // order; re-inserting keeps the overall order and the left bias.
        for (key, item) in later.map {
            self.map.insert_first(key, item);
        }
    }
}

impl<K, T, F> Debug for ToLinkedMap<K, T, F>
where
    K: Debug,
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToLinkedMap")
            .field("map", &self.map)
            .field("key_of", &std::any::type_name::<F>())
            .finish()
    }
}
