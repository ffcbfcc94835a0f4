//! Textual dump of a list's segment structure.

use allocator_api2::alloc::Allocator;
use std::fmt;

use crate::SegmentedList;

/// Prints each segment's live count followed by its elements.
///
/// Every element line carries its global index, so the output shows both the
/// logical sequence and where the segment boundaries fall:
///
/// ```text
/// segment 0 (count 2)
/// 0 -> a
/// 1 -> b
/// ---
/// ```
///
/// Created by [`SegmentedList::dump`].
pub struct Dump<'a, T, const N: usize, A: Allocator + Clone> {
    list: &'a SegmentedList<T, N, A>,
}

impl<'a, T, const N: usize, A: Allocator + Clone> Dump<'a, T, N, A> {
    pub(crate) fn new(list: &'a SegmentedList<T, N, A>) -> Self {
        Self { list }
    }
}

impl<T: fmt::Display, const N: usize, A: Allocator + Clone> fmt::Display for Dump<'_, T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut index = 0;
        let mut cursor = self.list.head_id();
        let mut position = 0;
        while let Some(id) = cursor {
            let segment = self.list.segment(id);
            writeln!(f, "segment {position} (count {})", segment.len())?;
            for value in segment.as_slice() {
                writeln!(f, "{index} -> {value}")?;
                index += 1;
            }
            writeln!(f, "---")?;
            cursor = segment.next;
            position += 1;
        }
        Ok(())
    }
}
