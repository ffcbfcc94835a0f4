//! Copies between lists of different segment capacities or element types.
//!
//! A copy is built by appending the source elements in order, so the result
//! is always packed into the fewest segments, whatever the source's layout.

use allocator_api2::alloc::{Allocator, Global};

use crate::error::Result;
use crate::SegmentedList;

/// Copies `source` into a new list, converting each element with `From`.
///
/// # Errors
///
/// `NoMemory` if a segment could not be allocated.
///
/// # Example
///
/// ```
/// use segmented_list::{convert, SegmentedList};
///
/// let small: SegmentedList<u8, 2> = (1..=5).collect();
/// let wide: SegmentedList<u64, 4> = convert(&small).unwrap();
/// assert_eq!(wide.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(wide.segment_lens(), vec![4, 1]);
/// ```
pub fn convert<S, T, const M: usize, const N: usize, B>(
    source: &SegmentedList<S, M, B>,
) -> Result<SegmentedList<T, N>>
where
    S: Clone,
    T: From<S>,
    B: Allocator + Clone,
{
    convert_with_in(source, Global, |x| T::from(x.clone()))
}

/// Copies `source` into a new list, converting each element with `f`.
///
/// Use this for explicit casts that have no `From` impl.
///
/// # Errors
///
/// `NoMemory` if a segment could not be allocated.
///
/// # Example
///
/// ```
/// use segmented_list::{convert_with, SegmentedList};
///
/// let floats: SegmentedList<f64, 4> = [1.9, -2.5, 3.0].into_iter().collect();
/// let ints: SegmentedList<i32, 2> = convert_with(&floats, |&x| x as i32).unwrap();
/// assert_eq!(ints.iter().copied().collect::<Vec<_>>(), vec![1, -2, 3]);
/// ```
pub fn convert_with<S, T, const M: usize, const N: usize, B, F>(
    source: &SegmentedList<S, M, B>,
    f: F,
) -> Result<SegmentedList<T, N>>
where
    B: Allocator + Clone,
    F: FnMut(&S) -> T,
{
    convert_with_in(source, Global, f)
}

pub(crate) fn convert_with_in<S, T, const M: usize, const N: usize, A, B, F>(
    source: &SegmentedList<S, M, B>,
    alloc: A,
    mut f: F,
) -> Result<SegmentedList<T, N, A>>
where
    A: Allocator + Clone,
    B: Allocator + Clone,
    F: FnMut(&S) -> T,
{
    let mut target = SegmentedList::new_in(alloc);
    for item in source {
        target.push_back(f(item))?;
    }
    Ok(target)
}
