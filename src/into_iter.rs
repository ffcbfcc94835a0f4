//! Owning iterator for `SegmentedList`.

use allocator_api2::alloc::{Allocator, Global};

use crate::SegmentedList;

/// An owning iterator over elements of a `SegmentedList`.
///
/// This struct is created by the `into_iter` method on `SegmentedList`
/// (provided by the [`IntoIterator`] trait). Elements are taken from either
/// end; segments are released once the list runs dry.
pub struct IntoIter<T, const N: usize, A: Allocator + Clone = Global> {
    list: SegmentedList<T, N, A>,
}

impl<T, const N: usize, A: Allocator + Clone> IntoIter<T, N, A> {
    #[inline]
    pub(crate) fn new(list: SegmentedList<T, N, A>) -> Self {
        Self { list }
    }

    /// Returns the elements not yet yielded as a list.
    pub fn into_remaining(self) -> SegmentedList<T, N, A> {
        self.list
    }
}

impl<T, const N: usize, A: Allocator + Clone> Iterator for IntoIter<T, N, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len();
        (remaining, Some(remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.list.len()
    }
}

impl<T, const N: usize, A: Allocator + Clone> DoubleEndedIterator for IntoIter<T, N, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T, const N: usize, A: Allocator + Clone> ExactSizeIterator for IntoIter<T, N, A> {}

impl<T, const N: usize, A: Allocator + Clone> std::iter::FusedIterator for IntoIter<T, N, A> {}

impl<T: Clone, const N: usize, A: Allocator + Clone> Clone for IntoIter<T, N, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: std::fmt::Debug, const N: usize, A: Allocator + Clone> std::fmt::Debug
    for IntoIter<T, N, A>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::SegmentedList;

    #[test]
    fn test_both_ends() {
        let list: SegmentedList<i32, 3> = (0..10).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 10);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(9));
        assert_eq!(iter.next_back(), Some(8));
        assert_eq!(iter.len(), 7);

        let rest = iter.into_remaining();
        assert_eq!(rest.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
        rest.validate().unwrap();
    }

    #[test]
    fn test_rev() {
        let list: SegmentedList<i32, 4> = (0..9).collect();
        let reversed: Vec<i32> = list.into_iter().rev().collect();
        assert_eq!(reversed, (0..9).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_drop_unconsumed() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let list: SegmentedList<Rc<()>, 2> = (0..5).map(|_| tracker.clone()).collect();
        let mut iter = list.into_iter();
        drop(iter.next());
        assert_eq!(Rc::strong_count(&tracker), 5);
        drop(iter);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_debug() {
        let list: SegmentedList<i32, 2> = (1..=3).collect();
        let mut iter = list.into_iter();
        iter.next();
        assert_eq!(format!("{iter:?}"), "IntoIter([2, 3])");
    }
}
