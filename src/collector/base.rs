use std::ops::ControlFlow;

/// The finishing half of every collector.
///
/// This trait is split off from [`Collector`](super::Collector) so that the
/// output type and the finishing step do not depend on the item type, and so
/// that a collector can be used as a trait object without naming its
/// [`Output`](CollectorBase::Output).
///
/// A collector moves through three phases: freshly constructed, accumulating
/// (any number of [`collect()`](super::Collector::collect) or
/// [`merge()`](super::MergeCollector::merge) calls), and finished.
/// [`finish()`](CollectorBase::finish) takes `self` by value, so the type
/// system guarantees a finished collector is never touched again.
pub trait CollectorBase {
    /// The result this collector yields via [`finish()`](CollectorBase::finish).
    ///
    /// This associated type does not appear in trait objects.
    type Output
    where
        Self: Sized;

    /// Consumes the collector and returns the accumulated result.
    fn finish(self) -> Self::Output
    where
        Self: Sized;

    /// Hint whether the collector is guaranteed to have stopped accumulating.
    ///
    /// [`Break(())`] means no further item will be absorbed and the caller
    /// may as well call [`finish()`](CollectorBase::finish) right away.
    /// [`Continue(())`] carries no guarantee either way, and is what the
    /// default implementation returns.
    ///
    /// [`Break(())`]: ControlFlow::Break
    /// [`Continue(())`]: ControlFlow::Continue
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
