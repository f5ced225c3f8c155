use std::ops::ControlFlow;

use super::CollectorBase;

/// A reduction strategy over items of type `T`.
///
/// Implementors only need [`collect()`](Collector::collect); the bulk methods
/// have default implementations and exist so that strategies with a cheaper
/// bulk path (for example [`Last`](crate::Last), which only cares about the
/// final item) can override them.
///
/// # Contract
///
/// After [`collect()`](Collector::collect) or
/// [`collect_many()`](Collector::collect_many) has returned [`Break(())`],
/// the collector will not absorb further items. Feeding it anyway is
/// permitted and harmless for every collector in this crate — extra items
/// are ignored — which is what lets [`Combined`](crate::Combined) keep
/// driving one side after the other has stopped.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use extra_collect::prelude::*;
///
/// /// Counts items without storing them.
/// #[derive(Default)]
/// struct Count(u64);
///
/// impl CollectorBase for Count {
///     type Output = u64;
///
///     fn finish(self) -> u64 {
///         self.0
///     }
/// }
///
/// impl<T> Collector<T> for Count {
///     fn collect(&mut self, _item: T) -> ControlFlow<()> {
///         self.0 += 1;
///         ControlFlow::Continue(())
///     }
/// }
///
/// assert_eq!(["a", "b", "c"].into_iter().collect_with(Count::default()), 3);
/// ```
///
/// [`Break(())`]: ControlFlow::Break
pub trait Collector<T>: CollectorBase {
    /// Absorbs one item, returning whether the collector keeps accumulating.
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Absorbs every item the iterator yields, stopping early if the
    /// collector signals a break.
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Absorbs every item, then finishes.
    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        let _ = self.collect_many(items);
        self.finish()
    }
}
