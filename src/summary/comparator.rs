use std::cmp::Ordering;

/// A total ordering acting as an `FnMut(&T, &T) -> Ordering`.
///
/// [`Summarize`](crate::Summarize) is parameterized over this trait so the
/// ordering is always an explicit choice: either a comparison function, or
/// the deliberate opt-in to `T`'s natural order via [`OrdComparator`].
pub trait Comparator<T> {
    fn cmp(&mut self, a: &T, b: &T) -> Ordering;

    fn lt(&mut self, a: &T, b: &T) -> bool {
        self.cmp(a, b).is_lt()
    }

    fn gt(&mut self, a: &T, b: &T) -> bool {
        self.cmp(a, b).is_gt()
    }
}

/// The natural ordering of a type implementing [`Ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdComparator;

impl<T> Comparator<T> for OrdComparator
where
    T: Ord,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn gt(&mut self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
