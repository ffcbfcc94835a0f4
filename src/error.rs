//! Error types for `SegmentedList` operations.

use std::alloc::Layout;

/// A specialized `Result` type for `SegmentedList` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The category of an [`Error`].
///
/// Each kind has a stable numeric code, see [`ErrorKind::code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Allocating a segment (or room to track one) failed.
    NoMemory,
    /// An index was outside the range accepted by the operation.
    BadIndex,
    /// The segment chain is structurally inconsistent.
    DataError,
}

impl ErrorKind {
    /// Returns the machine-checkable code of this kind.
    ///
    /// ```
    /// use segmented_list::ErrorKind;
    /// assert_eq!(ErrorKind::NoMemory.code(), 0);
    /// assert_eq!(ErrorKind::BadIndex.code(), 1);
    /// assert_eq!(ErrorKind::DataError.code(), 2);
    /// ```
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::NoMemory => 0,
            ErrorKind::BadIndex => 1,
            ErrorKind::DataError => 2,
        }
    }
}

/// The error type for fallible `SegmentedList` operations.
///
/// A failed operation leaves the list exactly as it was before the call.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Error {
    repr: Repr,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Repr {
    /// Memory allocation failed.
    NoMemory { layout: Option<Layout> },
    /// `index` was not accepted for a list of `len` elements.
    BadIndex { index: usize, len: usize },
    /// An internal bookkeeping check failed.
    DataError { reason: &'static str },
}

impl Error {
    pub(crate) fn alloc_error(layout: Layout) -> Self {
        Self {
            repr: Repr::NoMemory {
                layout: Some(layout),
            },
        }
    }

    pub(crate) fn out_of_memory() -> Self {
        Self {
            repr: Repr::NoMemory { layout: None },
        }
    }

    pub(crate) fn bad_index(index: usize, len: usize) -> Self {
        Self {
            repr: Repr::BadIndex { index, len },
        }
    }

    pub(crate) fn data_error(reason: &'static str) -> Self {
        Self {
            repr: Repr::DataError { reason },
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::NoMemory { .. } => ErrorKind::NoMemory,
            Repr::BadIndex { .. } => ErrorKind::BadIndex,
            Repr::DataError { .. } => ErrorKind::DataError,
        }
    }

    /// Returns the numeric code of this error's kind.
    #[inline]
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::NoMemory {
                layout: Some(layout),
            } => {
                write!(f, "segment allocation of {} bytes failed", layout.size())
            }
            Repr::NoMemory { layout: None } => {
                write!(f, "memory allocation failed")
            }
            Repr::BadIndex { index, len } => {
                write!(f, "subscript {index} is out of range for length {len}")
            }
            Repr::DataError { reason } => write!(f, "data error: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
