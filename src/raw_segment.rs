//! Raw buffer management for a single list segment.
//!
//! This module handles the low-level allocation of one segment's storage,
//! similar to how `RawVec` works for `Vec` in the standard library.

use allocator_api2::alloc::{Allocator, Global};
use std::alloc::Layout;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// Fixed-capacity buffer of `N` slots, without element management.
///
/// It owns the allocation but does not track which slots are initialized
/// and never drops elements. `Segment` is responsible for that.
pub(crate) struct RawSegment<T, const N: usize, A: Allocator = Global> {
    /// Start of the `N`-slot buffer (dangling for ZSTs)
    ptr: NonNull<T>,
    /// Allocator the buffer is returned to
    alloc: A,
    /// Marker for type ownership
    _marker: PhantomData<T>,
}

impl<T, const N: usize, A: Allocator> RawSegment<T, N, A> {
    /// Whether T is a zero-sized type
    const IS_ZST: bool = std::mem::size_of::<T>() == 0;

    const NONZERO_CAPACITY: () = assert!(N > 0, "segment capacity must be at least 1");

    /// Layout of one segment's buffer.
    #[inline]
    pub(crate) fn layout() -> Result<Layout> {
        Layout::array::<T>(N).map_err(|_| Error::out_of_memory())
    }

    /// Allocates a buffer of `N` slots from `alloc`.
    ///
    /// Returns a `NoMemory` error if the allocator refuses the request.
    pub(crate) fn try_new_in(alloc: A) -> Result<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                alloc,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout()?;
        let ptr = alloc
            .allocate(layout)
            .map_err(|_| Error::alloc_error(layout))?;

        Ok(Self {
            ptr: ptr.cast(),
            alloc,
            _marker: PhantomData,
        })
    }

    /// Returns a pointer to the first slot.
    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be at most `N`.
    #[inline]
    pub(crate) unsafe fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset <= N);
        self.ptr.as_ptr().add(offset)
    }
}

impl<T, const N: usize, A: Allocator> Drop for RawSegment<T, N, A> {
    fn drop(&mut self) {
        // Only frees memory. Segment drops its live elements first.
        if Self::IS_ZST {
            return;
        }
        if let Ok(layout) = Self::layout() {
            unsafe {
                self.alloc.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}

// Safety: RawSegment owns its allocation and T determines thread safety
unsafe impl<T: Send, const N: usize, A: Allocator + Send> Send for RawSegment<T, N, A> {}
unsafe impl<T: Sync, const N: usize, A: Allocator + Sync> Sync for RawSegment<T, N, A> {}
