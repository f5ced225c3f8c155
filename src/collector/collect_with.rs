use super::Collector;

/// Drives a collector with the items of an iterator.
///
/// Blanket-implemented for every [`Iterator`]; this is the sequential
/// "reduce a sequence" engine of the crate.
pub trait CollectWith: Iterator {
    /// Feeds every item into `collector` and returns its finished output.
    ///
    /// # Example
    ///
    /// ```
    /// use extra_collect::prelude::*;
    /// use extra_collect::Last;
    ///
    /// assert_eq!([7, 2, 9].into_iter().collect_with(Last::new()), Some(9));
    /// ```
    #[inline]
    fn collect_with<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Self::Item>,
    {
        collector.collect_then_finish(self)
    }
}

impl<I: Iterator> CollectWith for I {}
