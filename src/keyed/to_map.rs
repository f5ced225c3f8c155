use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::collector::{Collector, CollectorBase, MergeCollector};

/// A collector that indexes items by an extracted key into a
/// [`HashMap`], failing on the first repeated key.
///
/// Its [`Output`](CollectorBase::Output) is
/// `Result<HashMap<K, T>, DuplicateKeyError<K>>`. There is no silent
/// overwrite: the moment two items map to the same key, accumulation stops
/// and [`finish()`](CollectorBase::finish) reports the offending key. Use
/// [`ToLinkedMap`](crate::ToLinkedMap) when duplicates should be tolerated.
///
/// # Examples
///
/// ```
/// use extra_collect::prelude::*;
/// use extra_collect::ToMap;
///
/// let by_len = ["a", "bb", "ccc"]
///     .into_iter()
///     .collect_with(ToMap::new(|s: &&str| s.len()))
///     .unwrap();
///
/// assert_eq!(by_len[&2], "bb");
///
/// let clash = ["a", "b"]
///     .into_iter()
///     .collect_with(ToMap::new(|s: &&str| s.len()));
///
/// assert_eq!(clash.unwrap_err().into_key(), 1);
/// ```
pub struct ToMap<K, T, F> {
    map: HashMap<K, T>,
    dup: Option<K>,
    key_of: F,
}

impl<K, T, F> ToMap<K, T, F> {
    /// Creates a collector extracting each item's key with `key_of`.
    pub fn new(key_of: F) -> Self
    where
        F: FnMut(&T) -> K,
    {
        Self {
            map: HashMap::new(),
            dup: None,
            key_of,
        }
    }
}

impl<K, T, F> CollectorBase for ToMap<K, T, F> {
    type Output = Result<HashMap<K, T>, DuplicateKeyError<K>>;

    fn finish(self) -> Self::Output {
        match self.dup {
            Some(key) => Err(DuplicateKeyError { key }),
            None => Ok(self.map),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.dup.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<K, T, F> Collector<T> for ToMap<K, T, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.dup.is_some() {
            return ControlFlow::Break(());
        }

        let key = (self.key_of)(&item);
        if self.map.contains_key(&key) {
            self.dup = Some(key);
            ControlFlow::Break(())
        } else {
            self.map.insert(key, item);
            ControlFlow::Continue(())
        }
    }
}

impl<K, T, F> MergeCollector<T> for ToMap<K, T, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    /// A failure recorded on either side wins, the earlier partition's
    /// first. When the conflict only arises while merging, which of the
    /// clashing keys gets reported is unspecified.
    fn merge(&mut self, later: Self) {
        if self.dup.is_some() {
            return;
        }

        for (key, item) in later.map {
            if self.map.contains_key(&key) {
                self.dup = Some(key);
                return;
            }
            self.map.insert(key, item);
        }

        self.dup = later.dup;
    }
}

impl<K, T, F> Debug for ToMap<K, T, F>
where
    K: Debug,
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToMap")
            .field("map", &self.map)
            .field("dup", &self.dup)
            .field("key_of", &std::any::type_name::<F>())
            .finish()
    }
}

/// Two items mapped to the same key in a [`ToMap`] reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError<K> {
    key: K,
}

impl<K> DuplicateKeyError<K> {
    /// The key that appeared more than once.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error, returning the clashing key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key: {:?}", self.key)
    }
}

impl<K: Debug> Error for DuplicateKeyError<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CollectWith;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct User {
        id: u32,
        name: &'static str,
    }

    fn users() -> Vec<User> {
        vec![
            User { id: 7, name: "ada" },
            User { id: 2, name: "bob" },
            User { id: 5, name: "eve" },
        ]
    }

    #[test]
    fn unique_keys_build_the_full_map() {
        let map = users()
            .into_iter()
            .collect_with(ToMap::new(|u: &User| u.id))
            .unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map[&2].name, "bob");
        assert_eq!(map[&7].name, "ada");
    }

    #[test]
    fn repeated_key_reports_the_offender() {
        let mut input = users();
        input.push(User { id: 2, name: "mallory" });

        let err = input
            .into_iter()
            .collect_with(ToMap::new(|u: &User| u.id))
            .unwrap_err();

        assert_eq!(err.key(), &2);
        assert_eq!(err.to_string(), "duplicate key: 2");
    }

    #[test]
    fn stops_accumulating_after_the_clash() {
        let mut collector = ToMap::new(|n: &i32| *n % 2);

        assert!(collector.collect(1).is_continue());
        assert!(collector.collect(2).is_continue());
        assert!(collector.collect(3).is_break());
        assert!(collector.break_hint().is_break());
        // Items after the break are ignored, not absorbed.
        assert!(collector.collect(4).is_break());

        assert!(collector.finish().is_err());
    }

    fn identity_key(n: &i32) -> i32 {
        *n
    }

    #[test]
    fn merge_detects_cross_partition_duplicates() {
        let mut left = ToMap::new(identity_key);
        let _ = left.collect_many([1, 2]);
        let mut right = ToMap::new(identity_key);
        let _ = right.collect_many([3, 2]);

        left.merge(right);
        assert!(left.finish().is_err());
    }

    #[test]
    fn merge_of_disjoint_partitions_succeeds() {
        let mut left = ToMap::new(identity_key);
        let _ = left.collect_many([1, 2]);
        let mut right = ToMap::new(identity_key);
        let _ = right.collect_many([3, 4]);

        left.merge(right);
        let map = left.finish().unwrap();
        assert_eq!(map.len(), 4);
    }
}
