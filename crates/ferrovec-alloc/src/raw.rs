//! Stateless typed wrapper over the global allocator.
//!
//! [`RawAllocator`] translates "storage for `n` values of `T`" into a
//! [`Layout`] and forwards it to [`std::alloc`]. It keeps no state between
//! calls and never constructs or drops a `T`.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::AllocError;

/// Raw allocate/deallocate pair for arrays of `T`.
///
/// All functions are associated; the type only carries the element type.
/// Requests that need no memory (`n == 0`, or a zero-sized `T`) never reach
/// the global allocator and yield a dangling, well-aligned pointer.
pub struct RawAllocator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> RawAllocator<T> {
    /// Layout of an array of `n` values of `T`.
    ///
    /// Fails with [`AllocError::CapacityOverflow`] when the byte size would
    /// exceed `isize::MAX`.
    pub fn layout(n: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow { requested: n })
    }

    /// Allocate uninitialized storage for exactly `n` values of `T`.
    ///
    /// The returned memory is not initialized. Failure propagates to the
    /// caller; nothing is retried.
    pub fn allocate(n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Self::layout(n)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: `layout` has a non-zero size, checked above.
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => {
                tracing::trace!(elements = n, bytes = layout.size(), "allocated block");
                Ok(ptr)
            }
            None => {
                tracing::warn!(
                    elements = n,
                    bytes = layout.size(),
                    align = layout.align(),
                    "allocation failed"
                );
                Err(AllocError::OutOfMemory { layout })
            }
        }
    }

    /// Release storage previously returned by [`allocate`](Self::allocate).
    ///
    /// The empty case (`n == 0` or zero-sized `T`) is a no-op. No element
    /// destructors are run.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `RawAllocator::<T>::allocate(n)` with
    /// the same `n`, and must not have been deallocated already.
    pub unsafe fn deallocate(ptr: NonNull<T>, n: usize) {
        // `allocate(n)` succeeded, so the layout is valid.
        let Ok(layout) = Self::layout(n) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }

        tracing::trace!(elements = n, bytes = layout.size(), "released block");
        // SAFETY: the caller guarantees `ptr` came from `alloc` with this
        // exact layout and is still live.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}
