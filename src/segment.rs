//! A single node of the segment chain.
//!
//! A `Segment` keeps its live elements in the contiguous prefix `[0, len)` of
//! a `RawSegment` buffer and carries the handles of its neighbours. All
//! element movement inside and between segments goes through this module.

use allocator_api2::alloc::{Allocator, Global};
use std::ptr;

use crate::error::Result;
use crate::raw_segment::RawSegment;

/// Handle of a segment slot in the list's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct SegmentId(usize);

impl SegmentId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the slot in the arena.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

pub(crate) struct Segment<T, const N: usize, A: Allocator = Global> {
    buf: RawSegment<T, N, A>,
    /// Number of initialized slots, always a prefix of `buf`
    len: usize,
    pub(crate) prev: Option<SegmentId>,
    pub(crate) next: Option<SegmentId>,
}

impl<T, const N: usize, A: Allocator> Segment<T, N, A> {
    /// Allocates an empty, unlinked segment.
    pub(crate) fn try_new_in(alloc: A) -> Result<Self> {
        Ok(Self {
            buf: RawSegment::try_new_in(alloc)?,
            len: 0,
            prev: None,
            next: None,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Appends `value` after the last live element.
    ///
    /// The segment must not be full.
    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < N, "push into a full segment");
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
    }

    /// Places `value` at `offset`, shifting the suffix one slot toward the end.
    ///
    /// The segment must not be full and `offset <= len`.
    pub(crate) fn insert(&mut self, offset: usize, value: T) {
        assert!(self.len < N, "insert into a full segment");
        assert!(offset <= self.len, "insert offset out of range");
        unsafe {
            let at = self.buf.slot(offset);
            ptr::copy(at, at.add(1), self.len - offset);
            at.write(value);
        }
        self.len += 1;
    }

    /// Removes the element at `offset`, shifting the suffix one slot toward
    /// the front.
    pub(crate) fn remove(&mut self, offset: usize) -> T {
        assert!(offset < self.len, "remove offset out of range");
        unsafe {
            let at = self.buf.slot(offset);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - offset - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the last live element.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { self.buf.slot(self.len).read() })
    }

    /// Moves the elements at `at..len` to the front of the empty segment
    /// `dst`, preserving their order.
    pub(crate) fn split_off_into(&mut self, at: usize, dst: &mut Self) {
        assert!(at <= self.len, "split point out of range");
        assert!(dst.is_empty(), "split target must be empty");
        let moved = self.len - at;
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(at), dst.buf.ptr(), moved);
        }
        self.len = at;
        dst.len = moved;
    }

    /// Moves the first `count` live elements of `self` to the back of `dst`
    /// and closes the gap they leave.
    pub(crate) fn move_front_into(&mut self, count: usize, dst: &mut Self) {
        assert!(count <= self.len, "not enough elements to move");
        assert!(dst.len + count <= N, "move would overflow the target segment");
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr(), dst.buf.slot(dst.len), count);
            ptr::copy(self.buf.slot(count), self.buf.ptr(), self.len - count);
        }
        self.len -= count;
        dst.len += count;
    }

    /// Drops every live element, keeping the buffer and the links.
    pub(crate) fn truncate_all(&mut self) {
        let len = self.len;
        // Reset len BEFORE dropping to prevent double-free if drop panics
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), len));
        }
    }
}

impl<T, const N: usize, A: Allocator> Drop for Segment<T, N, A> {
    fn drop(&mut self) {
        self.truncate_all();
        // RawSegment will be dropped automatically and free the memory
    }
}
