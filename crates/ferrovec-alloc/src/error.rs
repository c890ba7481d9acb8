//! Allocation error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors that can occur while acquiring storage.
///
/// This is the only failure a ferrovec container ever reports. It is raised
/// at the point of the failing allocation and propagated unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The global allocator could not satisfy the request.
    OutOfMemory {
        /// Layout of the request that failed.
        layout: Layout,
    },
    /// The requested element count does not fit in a valid layout, or
    /// computing the next capacity overflowed `usize`.
    CapacityOverflow {
        /// Number of elements that was asked for, saturated at `usize::MAX`.
        requested: usize,
    },
}

impl AllocError {
    /// Abort the current operation the way the standard collections do.
    ///
    /// `OutOfMemory` is forwarded to [`std::alloc::handle_alloc_error`];
    /// `CapacityOverflow` panics with `"capacity overflow"`.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        match self {
            Self::OutOfMemory { layout } => std::alloc::handle_alloc_error(layout),
            Self::CapacityOverflow { .. } => panic!("capacity overflow"),
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { layout } => {
                write!(
                    f,
                    "out of memory: failed to allocate {} bytes (align {})",
                    layout.size(),
                    layout.align()
                )
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements requested")
            }
        }
    }
}

impl Error for AllocError {}
