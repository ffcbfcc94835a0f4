//! A segmented list: an indexable sequence stored as a doubly linked chain of
//! fixed-capacity array segments.
//!
//! Inserting or erasing near the middle only shifts elements inside one
//! segment instead of the whole sequence, while indexing walks segments rather
//! than individual elements.
//!
//! # Example
//!
//! ```
//! use segmented_list::SegmentedList;
//!
//! let mut list: SegmentedList<i32, 4> = SegmentedList::new();
//! for i in 1..=9 {
//!     list.push_back(i).unwrap();
//! }
//! assert_eq!(list.segment_lens(), vec![4, 4, 1]);
//!
//! // Erasing leaves a hole in the middle segment...
//! assert_eq!(list.erase(5).unwrap(), 6);
//! assert_eq!(list.segment_lens(), vec![4, 3, 1]);
//!
//! // ...which compaction reclaims.
//! list.compact();
//! assert_eq!(list.segment_lens(), vec![4, 4]);
//! assert_eq!(*list.at(5).unwrap(), 7);
//! ```

mod convert;
mod dump;
mod error;
mod into_iter;
mod iter;
mod raw_segment;
mod segment;

use allocator_api2::alloc::{Allocator, Global};
pub use convert::{convert, convert_with};
pub use dump::Dump;
pub use error::{Error, ErrorKind, Result};
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};

use log::{debug, trace};
use segment::{Segment, SegmentId};
use std::ops::{Index, IndexMut};

/// Segment capacity used when none is given.
pub const DEFAULT_SEGMENT_CAPACITY: usize = 16;

/// An indexable sequence stored in a chain of segments of `N` slots each.
///
/// # Memory Layout
///
/// Every segment owns a buffer of exactly `N` slots and keeps its live
/// elements in a contiguous prefix of it. Segments are linked in both
/// directions; the list owns every linked segment.
///
/// - A full segment that must accept another element is split in two.
/// - Erasing never merges segments. Use [`compact`](Self::compact) to
///   repack elements into the fewest segments.
/// - When the last element is removed all segments are released.
///
/// `N` must be at least 1; `SegmentedList<T, 0>` fails to compile as soon as
/// it allocates.
pub struct SegmentedList<
    T,
    const N: usize = { DEFAULT_SEGMENT_CAPACITY },
    A: Allocator + Clone = Global,
> {
    /// Arena of segment slots; `None` marks a released slot
    slots: Vec<Option<Segment<T, N, A>>>,
    /// Released slots available for reuse
    free: Vec<SegmentId>,
    head: Option<SegmentId>,
    tail: Option<SegmentId>,
    /// First segment holding an element; `None` iff the list is empty
    front: Option<SegmentId>,
    /// Last segment holding an element; `None` iff the list is empty
    back: Option<SegmentId>,
    /// Number of live elements across all segments
    len: usize,
    /// Number of linked segments
    segment_count: usize,
    alloc: A,
}

impl<T, const N: usize> SegmentedList<T, N> {
    /// Creates a new empty `SegmentedList`.
    ///
    /// Does not allocate until elements are pushed.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_list::SegmentedList;
    /// let list: SegmentedList<i32> = SegmentedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

// Core implementation
impl<T, const N: usize, A: Allocator + Clone> SegmentedList<T, N, A> {
    /// Creates a new empty `SegmentedList` whose segments come from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            front: None,
            back: None,
            len: 0,
            segment_count: 0,
            alloc,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in each segment.
    #[inline]
    pub const fn segment_capacity(&self) -> usize {
        N
    }

    /// Returns the number of segments currently linked.
    #[inline]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the live element count of every segment, head to tail.
    ///
    /// Segments left empty by erasures are included.
    pub fn segment_lens(&self) -> Vec<usize> {
        self.segment_ids().map(|id| self.segment(id).len()).collect()
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Inserting at `len()` appends and inserting at 0 prepends. A full
    /// target segment is split in two, so only one segment is shifted.
    ///
    /// # Errors
    ///
    /// `BadIndex` if `index > len()`, `NoMemory` if a new segment could not
    /// be allocated. The list is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_list::SegmentedList;
    /// let mut list: SegmentedList<i32, 4> = [1, 2, 3, 4].into_iter().collect();
    /// list.insert(2, 99).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 99, 3, 4]);
    /// assert_eq!(list.segment_lens(), vec![2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index == self.len {
            return self.push_back(value);
        }
        if index > self.len {
            return Err(Error::bad_index(index, self.len));
        }
        if index == 0 {
            return self.push_front(value);
        }

        let (id, offset) = self.locate(index)?;
        if self.segment(id).is_full() {
            self.insert_split(id, offset, value)?;
        } else {
            self.segment_mut(id).insert(offset, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends an element to the back of the list.
    ///
    /// The value goes into the segment holding the last element while it
    /// has room, then into the empty segment after it left by earlier pops.
    /// Past the tail a fresh tail segment is linked, so a run of appends
    /// fills segments completely.
    ///
    /// # Errors
    ///
    /// `NoMemory` if a new segment could not be allocated.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        let target = match self.back {
            Some(back) if !self.segment(back).is_full() => back,
            Some(back) => {
                let next = self.segment(back).next;
                match next {
                    Some(next) => next,
                    None => self.link_after(Some(back))?,
                }
            }
            None => self.link_after(self.tail)?,
        };
        self.segment_mut(target).push(value);
        self.back = Some(target);
        self.front.get_or_insert(target);
        self.len += 1;
        Ok(())
    }

    /// Prepends an element to the front of the list.
    ///
    /// The value goes into the segment holding the first element while it
    /// has room, then into the empty segment before it. A full head segment
    /// is split first; the value goes into the half that stays at the head.
    ///
    /// # Errors
    ///
    /// `NoMemory` if a new segment could not be allocated.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        match self.front {
            Some(front) if !self.segment(front).is_full() => {
                self.segment_mut(front).insert(0, value);
            }
            Some(front) => {
                let prev = self.segment(front).prev;
                match prev {
                    Some(prev) => {
                        self.segment_mut(prev).push(value);
                        self.front = Some(prev);
                    }
                    None => self.insert_split(front, 0, value)?,
                }
            }
            None => {
                let id = self.link_after(self.tail)?;
                self.segment_mut(id).push(value);
                self.front = Some(id);
                self.back = Some(id);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// Segments are never merged here, they may be left sparse or empty.
    ///
    /// # Errors
    ///
    /// `BadIndex` if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::bad_index(index, self.len));
        }
        if index + 1 == self.len {
            return self.pop_back();
        }
        if index == 0 {
            return self.pop_front();
        }

        let (id, offset) = self.locate(index)?;
        let value = self.segment_mut(id).remove(offset);
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// The segment it came from stays linked even when left empty.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let id = self.back.ok_or_else(|| Error::bad_index(0, self.len))?;
        let segment = self.segment_mut(id);
        let value = segment
            .pop()
            .ok_or_else(|| Error::data_error("last occupied segment has no elements"))?;
        let emptied = segment.is_empty();
        if emptied && self.len > 1 {
            self.back = self.occupied_before(id);
        }
        self.after_removal();
        Ok(value)
    }

    /// Removes and returns the first element.
    ///
    /// The segment it came from stays linked even when left empty.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let id = self.front.ok_or_else(|| Error::bad_index(0, self.len))?;
        let segment = self.segment_mut(id);
        if segment.is_empty() {
            return Err(Error::data_error("first occupied segment has no elements"));
        }
        let value = segment.remove(0);
        let emptied = segment.is_empty();
        if emptied && self.len > 1 {
            self.front = self.occupied_after(id);
        }
        self.after_removal();
        Ok(value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// `BadIndex` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let (id, offset) = self.locate(index)?;
        Ok(&self.segment(id).as_slice()[offset])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// `BadIndex` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let (id, offset) = self.locate(index)?;
        Ok(&mut self.segment_mut(id).as_mut_slice()[offset])
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index).ok()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn first(&self) -> Result<&T> {
        match self.front {
            Some(id) => Ok(&self.segment(id).as_slice()[0]),
            None => Err(Error::bad_index(0, self.len)),
        }
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn first_mut(&mut self) -> Result<&mut T> {
        match self.front {
            Some(id) => Ok(&mut self.segment_mut(id).as_mut_slice()[0]),
            None => Err(Error::bad_index(0, self.len)),
        }
    }

    /// Returns a reference to the last element.
    ///
    /// Trailing segments emptied by erasures are skipped.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn last(&self) -> Result<&T> {
        match self.back {
            Some(id) => {
                let slice = self.segment(id).as_slice();
                Ok(&slice[slice.len() - 1])
            }
            None => Err(Error::bad_index(0, self.len)),
        }
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// `BadIndex` if the list is empty.
    pub fn last_mut(&mut self) -> Result<&mut T> {
        match self.back {
            Some(id) => {
                let slice = self.segment_mut(id).as_mut_slice();
                let last = slice.len() - 1;
                Ok(&mut slice[last])
            }
            None => Err(Error::bad_index(0, self.len)),
        }
    }

    /// Returns the index of the first element equal to `value`, or `len()`
    /// if there is none.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_list::SegmentedList;
    /// let list: SegmentedList<i32, 2> = [5, 6, 7, 6].into_iter().collect();
    /// assert_eq!(list.find(&6), 1);
    /// assert_eq!(list.find(&42), list.len());
    /// ```
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value).unwrap_or(self.len)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value) < self.len
    }

    /// Removes all elements and releases every segment.
    pub fn clear(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        let released = self.segment_count;
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.front = None;
        self.back = None;
        self.len = 0;
        self.segment_count = 0;
        if released > 0 {
            trace!("cleared list, released {released} segments");
        }
        // Elements are dropped after the list is already consistent
        drop(slots);
    }

    /// Packs the elements into the fewest possible segments and releases the
    /// segments left empty.
    ///
    /// Afterwards there are `ceil(len / N)` segments and only the last may
    /// be partially filled. Length and element order are unchanged. On an
    /// empty list this is the same as [`clear`](Self::clear).
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_list::SegmentedList;
    /// let mut list: SegmentedList<i32, 4> = (0..12).collect();
    /// for _ in 0..3 {
    ///     list.erase(1).unwrap();
    /// }
    /// assert_eq!(list.segment_lens(), vec![1, 4, 4]);
    /// list.compact();
    /// assert_eq!(list.segment_lens(), vec![4, 4, 1]);
    /// ```
    pub fn compact(&mut self) {
        let Some(head) = self.head else {
            return;
        };
        if self.len == 0 {
            self.clear();
            return;
        }

        let before = self.segment_count;
        let mut write = head;
        let mut read = self.segment(head).next;

        while let Some(r) = read {
            if r == write {
                read = self.segment(r).next;
                continue;
            }
            let available = self.segment(r).len();
            if available == 0 {
                read = self.segment(r).next;
                continue;
            }
            let room = N - self.segment(write).len();
            if room == 0 {
                // `read` lies after `write`, so there is always a next one
                match self.segment(write).next {
                    Some(next) => write = next,
                    None => break,
                }
                continue;
            }
            let (dst, src) = self.segment_pair_mut(write, r);
            src.move_front_into(room.min(available), dst);
        }

        let mut cursor = self.segment_mut(write).next.take();
        while let Some(id) = cursor {
            cursor = self.segment(id).next;
            debug_assert!(self.segment(id).is_empty());
            self.release(id);
        }
        self.tail = Some(write);
        self.front = self.head;
        self.back = Some(write);

        debug!(
            "compacted {} elements from {} into {} segments",
            self.len, before, self.segment_count
        );
    }

    /// Replaces the contents of `self` with converted copies of `source`'s
    /// elements.
    ///
    /// The new contents are built before the old ones are dropped, so on
    /// error `self` is unchanged.
    ///
    /// # Errors
    ///
    /// `NoMemory` if a segment could not be allocated.
    pub fn assign_from<S, const M: usize, B>(&mut self, source: &SegmentedList<S, M, B>) -> Result<()>
    where
        S: Clone,
        T: From<S>,
        B: Allocator + Clone,
    {
        let fresh = convert::convert_with_in(source, self.alloc.clone(), |x| T::from(x.clone()))?;
        *self = fresh;
        Ok(())
    }

    /// Returns a deep copy of the list, packed into the fewest segments.
    ///
    /// # Errors
    ///
    /// `NoMemory` if a segment could not be allocated.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        convert::convert_with_in(self, self.alloc.clone(), T::clone)
    }

    /// Checks the structural invariants of the segment chain.
    ///
    /// # Errors
    ///
    /// `DataError` naming the first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        if self.head.is_none() != self.tail.is_none() {
            return Err(Error::data_error("head and tail disagree on emptiness"));
        }
        if self.head.is_none() != (self.len == 0) {
            return Err(Error::data_error("empty chain does not match length"));
        }

        let mut total = 0;
        let mut linked = 0;
        let mut first_occupied = None;
        let mut last_occupied = None;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let Some(Some(segment)) = self.slots.get(id.index()) else {
                return Err(Error::data_error("chain links a released segment"));
            };
            linked += 1;
            if linked > self.slots.len() {
                return Err(Error::data_error("segment chain contains a cycle"));
            }
            if segment.prev != prev {
                return Err(Error::data_error("backward link mismatch"));
            }
            if segment.len() > N {
                return Err(Error::data_error("segment exceeds its capacity"));
            }
            total += segment.len();
            if !segment.is_empty() {
                first_occupied.get_or_insert(id);
                last_occupied = Some(id);
            }
            prev = Some(id);
            cursor = segment.next;
        }

        if prev != self.tail {
            return Err(Error::data_error("tail is not the last linked segment"));
        }
        if total != self.len {
            return Err(Error::data_error("length mismatch"));
        }
        if linked != self.segment_count {
            return Err(Error::data_error("segment count mismatch"));
        }
        if first_occupied != self.front || last_occupied != self.back {
            return Err(Error::data_error("end segments do not hold the end elements"));
        }
        Ok(())
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N, A> {
        Iter::new(self)
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N, A> {
        IterMut::new(self)
    }

    /// Returns a value that prints every segment's count and elements.
    ///
    /// ```
    /// use segmented_list::SegmentedList;
    /// let list: SegmentedList<i32, 2> = (1..=3).collect();
    /// assert_eq!(
    ///     list.dump().to_string(),
    ///     "segment 0 (count 2)\n0 -> 1\n1 -> 2\n---\nsegment 1 (count 1)\n2 -> 3\n---\n"
    /// );
    /// ```
    #[inline]
    pub fn dump(&self) -> Dump<'_, T, N, A> {
        Dump::new(self)
    }
}

// Chain management
impl<T, const N: usize, A: Allocator + Clone> SegmentedList<T, N, A> {
    #[inline]
    pub(crate) fn head_id(&self) -> Option<SegmentId> {
        self.head
    }

    pub(crate) fn segment(&self, id: SegmentId) -> &Segment<T, N, A> {
        match &self.slots[id.index()] {
            Some(segment) => segment,
            None => unreachable!("segment {id:?} was released while still linked"),
        }
    }

    fn segment_mut(&mut self, id: SegmentId) -> &mut Segment<T, N, A> {
        match &mut self.slots[id.index()] {
            Some(segment) => segment,
            None => unreachable!("segment {id:?} was released while still linked"),
        }
    }

    /// Borrows two distinct segments mutably at once.
    fn segment_pair_mut(
        &mut self,
        a: SegmentId,
        b: SegmentId,
    ) -> (&mut Segment<T, N, A>, &mut Segment<T, N, A>) {
        assert_ne!(a, b, "segment pair must be distinct");
        let (first, second) = if a.index() < b.index() {
            let (lo, hi) = self.slots.split_at_mut(b.index());
            (&mut lo[a.index()], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(a.index());
            (&mut hi[0], &mut lo[b.index()])
        };
        match (first, second) {
            (Some(x), Some(y)) => (x, y),
            _ => unreachable!("segment pair contains a released slot"),
        }
    }

    /// Walks the chain from head to tail.
    fn segment_ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        std::iter::successors(self.head, move |&id| self.segment(id).next)
    }

    /// Nearest segment after `id` that holds an element.
    fn occupied_after(&self, id: SegmentId) -> Option<SegmentId> {
        std::iter::successors(self.segment(id).next, |&id| self.segment(id).next)
            .find(|&id| !self.segment(id).is_empty())
    }

    /// Nearest segment before `id` that holds an element.
    fn occupied_before(&self, id: SegmentId) -> Option<SegmentId> {
        std::iter::successors(self.segment(id).prev, |&id| self.segment(id).prev)
            .find(|&id| !self.segment(id).is_empty())
    }

    /// Maps a global index to its segment and the offset inside it.
    fn locate(&self, index: usize) -> Result<(SegmentId, usize)> {
        if index >= self.len {
            return Err(Error::bad_index(index, self.len));
        }
        let mut remaining = index;
        for id in self.segment_ids() {
            let count = self.segment(id).len();
            if remaining < count {
                return Ok((id, remaining));
            }
            remaining -= count;
        }
        Err(Error::data_error("index within length but past the last segment"))
    }

    /// Allocates an empty segment and links it after `prev`, or as the only
    /// segment when `prev` is `None`.
    ///
    /// Nothing is modified unless both the buffer and its arena slot could
    /// be obtained.
    fn link_after(&mut self, prev: Option<SegmentId>) -> Result<SegmentId> {
        if self.free.is_empty() {
            self.slots
                .try_reserve(1)
                .map_err(|_| Error::out_of_memory())?;
        }
        let mut segment = Segment::try_new_in(self.alloc.clone())?;

        let next = match prev {
            Some(p) => self.segment(p).next,
            None => None,
        };
        segment.prev = prev;
        segment.next = next;

        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(segment);
                id
            }
            None => {
                self.slots.push(Some(segment));
                SegmentId::new(self.slots.len() - 1)
            }
        };

        match prev {
            Some(p) => self.segment_mut(p).next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(n) => self.segment_mut(n).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.segment_count += 1;
        trace!("linked segment {} after {:?}", id.index(), prev.map(SegmentId::index));
        Ok(id)
    }

    /// Inserts into the full segment `id` by splitting it.
    ///
    /// The `N + 1` elements are divided so that `id` keeps the smaller half
    /// and the new segment after it receives the larger half.
    fn insert_split(&mut self, id: SegmentId, offset: usize, value: T) -> Result<()> {
        let keep = (N + 1) / 2;
        let new_id = self.link_after(Some(id))?;
        let (left, right) = self.segment_pair_mut(id, new_id);
        if offset < keep {
            left.split_off_into(keep - 1, right);
            left.insert(offset, value);
        } else {
            left.split_off_into(keep, right);
            right.insert(offset - keep, value);
        }
        trace!(
            "split segment {} into {} + {}",
            id.index(),
            left.len(),
            right.len()
        );
        if self.back == Some(id) {
            self.back = Some(new_id);
        }
        Ok(())
    }

    /// Unlinks `id` and returns its slot to the free list.
    ///
    /// A slot that is already free is left alone.
    fn release(&mut self, id: SegmentId) {
        let Some(segment) = self.slots.get_mut(id.index()).and_then(Option::take) else {
            return;
        };
        match segment.prev {
            Some(p) => self.segment_mut(p).next = segment.next,
            None => self.head = segment.next,
        }
        match segment.next {
            Some(n) => self.segment_mut(n).prev = segment.prev,
            None => self.tail = segment.prev,
        }
        self.free.push(id);
        self.segment_count -= 1;
        trace!("released segment {}", id.index());
    }

    /// Bookkeeping shared by the removal paths.
    fn after_removal(&mut self) {
        self.len -= 1;
        if self.len == 0 {
            self.clear();
        }
    }
}

#[cold]
#[inline(never)]
fn allocation_panic(err: Error) -> ! {
    panic!("{err}")
}

// Trait implementations
impl<T: Clone, const N: usize, A: Allocator + Clone> Clone for SegmentedList<T, N, A> {
    /// Clones the list into the fewest possible segments.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| allocation_panic(err))
    }
}

impl<T, U, const N: usize, const M: usize, A, B> PartialEq<SegmentedList<U, M, B>>
    for SegmentedList<T, N, A>
where
    T: PartialEq<U>,
    A: Allocator + Clone,
    B: Allocator + Clone,
{
    /// Compares the element sequences; segment boundaries are ignored.
    fn eq(&self, other: &SegmentedList<U, M, B>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize, A: Allocator + Clone> Eq for SegmentedList<T, N, A> {}

impl<T: std::hash::Hash, const N: usize, A: Allocator + Clone> std::hash::Hash
    for SegmentedList<T, N, A>
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: std::fmt::Debug, const N: usize, A: Allocator + Clone> std::fmt::Debug
    for SegmentedList<T, N, A>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Default for SegmentedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, A: Allocator + Clone> Index<usize> for SegmentedList<T, N, A> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, A: Allocator + Clone> IndexMut<usize> for SegmentedList<T, N, A> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, A: Allocator + Clone> Extend<T> for SegmentedList<T, N, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push_back(item) {
                allocation_panic(err);
            }
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize, A: Allocator + Clone> Extend<&'a T>
    for SegmentedList<T, N, A>
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> FromIterator<T> for SegmentedList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize, A: Allocator + Clone> IntoIterator for SegmentedList<T, N, A> {
    type Item = T;
    type IntoIter = IntoIter<T, N, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize, A: Allocator + Clone> IntoIterator for &'a SegmentedList<T, N, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize, A: Allocator + Clone> IntoIterator
    for &'a mut SegmentedList<T, N, A>
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
