//! Single-owner storage blocks.
//!
//! An [`OwnedBlock`] owns one allocation of `capacity` uninitialized slots
//! and returns it to [`RawAllocator`] when dropped. It knows nothing about
//! which slots hold live values: callers must drop their elements before
//! the block goes away, or deliberately relocate them elsewhere.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::AllocError;
use crate::raw::RawAllocator;

/// Exclusively owned, contiguous, uninitialized storage for `T`.
///
/// The empty block (capacity 0) holds no allocation and is free to create
/// and drop. Blocks are never shared and never cloned.
pub struct OwnedBlock<T> {
    ptr: NonNull<T>,
    capacity: usize,
    /// Marks logical ownership of `T` storage for variance and auto traits.
    _marker: PhantomData<T>,
}

// SAFETY: the block is uniquely owned storage; sending it moves the only
// handle to the memory, exactly like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for OwnedBlock<T> {}
// SAFETY: shared access only hands out `*const T`; reads through it are
// governed by the owner's `&self` borrow.
unsafe impl<T: Sync> Sync for OwnedBlock<T> {}

impl<T> OwnedBlock<T> {
    /// The empty block. No allocation is made.
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a block with room for exactly `capacity` values.
    ///
    /// `capacity == 0` yields [`OwnedBlock::empty`].
    pub fn allocate(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let ptr = RawAllocator::<T>::allocate(capacity)?;
        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of slots in the block.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this is the empty block.
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Pointer to slot 0.
    ///
    /// Dangling (but aligned) when the block is empty or `T` is zero-sized.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot 0.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchange storage with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the storage out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }
}

impl<T> Default for OwnedBlock<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for OwnedBlock<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `RawAllocator::<T>::allocate(capacity)` or
        // is the dangling empty pointer with capacity 0, which deallocate
        // treats as a no-op. The block is dropped exactly once.
        unsafe { RawAllocator::<T>::deallocate(self.ptr, self.capacity) };
    }
}

impl<T> fmt::Debug for OwnedBlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBlock")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
