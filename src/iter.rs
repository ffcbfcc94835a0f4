//! Iterator implementations for `SegmentedList`.

use std::marker::PhantomData;

use allocator_api2::alloc::Allocator;

use crate::segment::{Segment, SegmentId};
use crate::SegmentedList;

/// An iterator over references to elements of a `SegmentedList`.
pub struct Iter<'a, T, const N: usize, A: Allocator + Clone> {
    list: &'a SegmentedList<T, N, A>,
    /// Segment to continue with once `current` is exhausted
    next_segment: Option<SegmentId>,
    /// Remaining live elements of the current segment
    current: std::slice::Iter<'a, T>,
    /// Elements not yet yielded
    remaining: usize,
}

impl<'a, T, const N: usize, A: Allocator + Clone> Iter<'a, T, N, A> {
    pub(crate) fn new(list: &'a SegmentedList<T, N, A>) -> Self {
        Self {
            list,
            next_segment: list.head_id(),
            current: Default::default(),
            remaining: list.len(),
        }
    }

    #[cold]
    fn next_segment(&mut self) -> Option<&'a T> {
        while let Some(id) = self.next_segment {
            let segment = self.list.segment(id);
            self.next_segment = segment.next;
            self.current = segment.as_slice().iter();
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
        }
        None
    }
}

impl<'a, T, const N: usize, A: Allocator + Clone> Iterator for Iter<'a, T, N, A> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.current.next() {
            self.remaining -= 1;
            return Some(item);
        }
        self.next_segment()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize, A: Allocator + Clone> ExactSizeIterator for Iter<'_, T, N, A> {}

impl<T, const N: usize, A: Allocator + Clone> std::iter::FusedIterator for Iter<'_, T, N, A> {}

impl<T, const N: usize, A: Allocator + Clone> Clone for Iter<'_, T, N, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            next_segment: self.next_segment,
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to elements of a `SegmentedList`.
pub struct IterMut<'a, T, const N: usize, A: Allocator + Clone> {
    /// Base of the list's segment arena
    slots: *mut Option<Segment<T, N, A>>,
    next_segment: Option<SegmentId>,
    current: std::slice::IterMut<'a, T>,
    remaining: usize,
    _marker: PhantomData<&'a mut SegmentedList<T, N, A>>,
}

impl<'a, T, const N: usize, A: Allocator + Clone> IterMut<'a, T, N, A> {
    pub(crate) fn new(list: &'a mut SegmentedList<T, N, A>) -> Self {
        Self {
            slots: list.slots.as_mut_ptr(),
            next_segment: list.head,
            current: Default::default(),
            remaining: list.len,
            _marker: PhantomData,
        }
    }

    #[cold]
    fn next_segment(&mut self) -> Option<&'a mut T> {
        while let Some(id) = self.next_segment {
            // Each linked segment is visited once, so the borrows never overlap
            let slot = unsafe { &mut *self.slots.add(id.index()) };
            let segment = slot.as_mut()?;
            self.next_segment = segment.next;
            self.current = segment.as_mut_slice().iter_mut();
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
        }
        None
    }
}

impl<'a, T, const N: usize, A: Allocator + Clone> Iterator for IterMut<'a, T, N, A> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.current.next() {
            self.remaining -= 1;
            return Some(item);
        }
        self.next_segment()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize, A: Allocator + Clone> ExactSizeIterator for IterMut<'_, T, N, A> {}

impl<T, const N: usize, A: Allocator + Clone> std::iter::FusedIterator for IterMut<'_, T, N, A> {}

// Safety: IterMut yields exclusive references
unsafe impl<T: Send, const N: usize, A: Allocator + Clone + Send> Send for IterMut<'_, T, N, A> {}
unsafe impl<T: Sync, const N: usize, A: Allocator + Clone + Sync> Sync for IterMut<'_, T, N, A> {}

#[cfg(test)]
mod tests {
    use crate::SegmentedList;

    #[test]
    fn test_iter_skips_empty_segments() {
        let mut list: SegmentedList<i32, 2> = (0..8).collect();
        list.erase(2).unwrap();
        list.erase(2).unwrap();
        assert_eq!(list.segment_lens(), vec![2, 0, 2, 2]);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.len(), 5);
        let rest: Vec<i32> = iter.copied().collect();
        assert_eq!(rest, vec![1, 4, 5, 6, 7]);
    }

    #[test]
    fn test_iter_fused() {
        let list: SegmentedList<i32, 2> = (0..3).collect();
        let mut iter = list.iter();
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_mut_follows_chain_order() {
        let mut list: SegmentedList<i32, 2> = SegmentedList::new();
        // Prepending splits the head, so arena order differs from chain order
        for i in (0..9).rev() {
            list.push_front(i).unwrap();
        }
        let mut iter = list.iter_mut();
        assert_eq!(iter.len(), 9);
        for (expected, item) in (0..9).zip(&mut iter) {
            assert_eq!(*item, expected);
            *item += 100;
        }
        assert_eq!(iter.next(), None);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            (100..109).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_iter_mut_after_released_slots() {
        let mut list: SegmentedList<i32, 2> = (0..10).collect();
        for index in [2, 2, 4, 4] {
            list.erase(index).unwrap();
        }
        // Releases the emptied middle segments and leaves free arena slots
        list.compact();
        list.push_front(-1).unwrap();
        list.push_back(10).unwrap();

        let mut iter = list.iter_mut();
        assert_eq!(iter.len(), 8);
        for item in &mut iter {
            *item *= 2;
        }
        assert_eq!(iter.len(), 0);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![-2, 0, 2, 8, 10, 16, 18, 20]
        );
        list.validate().unwrap();
    }
}
