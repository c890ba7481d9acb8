//! The growable array.
//!
//! [`DynArray`] owns one [`OwnedBlock`] and tracks how many of its leading
//! slots hold live values. Everything else in the crate exists to keep that
//! single invariant true across growth, cloning, moving, and unwinding.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use ferrovec_alloc::{AllocError, OwnedBlock};

use crate::config::GrowthConfig;
use crate::transfer;

/// A contiguous, growable array of `T`.
///
/// Slots `0..len` of the block hold live values; slots `len..capacity` are
/// uninitialized. An empty array holds no allocation at all.
///
/// Appending to a full array grows it geometrically (see [`GrowthConfig`]),
/// which relocates every element and invalidates all previously obtained
/// references. The borrow checker enforces that rule.
///
/// `DynArray<T>` is `Send`/`Sync` exactly when `T` is.
pub struct DynArray<T> {
    block: OwnedBlock<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// An empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            block: OwnedBlock::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots available without reallocating.
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the contents out, leaving `self` empty and reusable.
    ///
    /// No element is touched and nothing is allocated.
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }

    /// Replace the contents of `self` with those of `source`.
    ///
    /// Everything `self` held is dropped and its block released; `source`
    /// is left empty. Never fails.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Append `value`, growing if the array is full.
    ///
    /// Pass `value.clone()` to append a copy, or use
    /// [`push_cloned`](Self::push_cloned).
    ///
    /// # Panics
    ///
    /// Aborts via [`AllocError::raise`] if growth fails.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            err.raise();
        }
    }

    /// Append `value`, reporting growth failure instead of aborting.
    ///
    /// On failure the array is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        self.try_emplace_with(move || value)
    }

    /// Append a clone of `value`.
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.emplace_with(|| value.clone());
    }

    /// Construct a new element from `args` directly in the next slot.
    ///
    /// `args` is forwarded to `T`'s `From` conversion after any growth, so
    /// `DynArray::<String>::emplace("text")` builds the `String` in place.
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        if let Err(err) = self.try_emplace(args) {
            err.raise();
        }
    }

    /// Fallible form of [`emplace`](Self::emplace).
    pub fn try_emplace<A>(&mut self, args: A) -> Result<(), AllocError>
    where
        T: From<A>,
    {
        self.try_emplace_with(move || T::from(args))
    }

    /// Construct a new element with `make` directly in the next slot.
    pub fn emplace_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        if let Err(err) = self.try_emplace_with(make) {
            err.raise();
        }
    }

    /// Fallible form of [`emplace_with`](Self::emplace_with).
    ///
    /// Growth happens before `make` runs. If growth fails, `make` is never
    /// called and the array is unchanged. If `make` panics, the length is
    /// not incremented and the slot stays uninitialized.
    pub fn try_emplace_with<F>(&mut self, make: F) -> Result<(), AllocError>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity() {
            self.grow()?;
        }
        // SAFETY: `len < capacity` after the check above, so the slot is
        // inside the block and uninitialized.
        unsafe { self.block.as_mut_ptr().add(self.len).write(make()) };
        self.len += 1;
        Ok(())
    }

    /// Reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`, so the slot is live.
        unsafe { &*self.block.as_ptr().add(index) }
    }

    /// Mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`, so the slot is live.
        unsafe { &mut *self.block.as_mut_ptr().add(index) }
    }

    /// Allocate the next block, relocate into it, and release the old one.
    ///
    /// The new block is fully acquired before anything is moved, so a
    /// failure leaves the array untouched.
    fn grow(&mut self) -> Result<(), AllocError> {
        let new_capacity = GrowthConfig::next_capacity(self.capacity())?;
        let mut new_block = OwnedBlock::allocate(new_capacity)?;

        // SAFETY: the old block holds `len` live values, the new one has
        // `new_capacity > len` free slots, and they are distinct allocations.
        unsafe { transfer::relocate(self.block.as_ptr(), new_block.as_mut_ptr(), self.len) };
        self.block.swap(&mut new_block);

        tracing::debug!(
            from = new_block.capacity(),
            to = new_capacity,
            len = self.len,
            "grew dynamic array"
        );
        // `new_block` now holds the vacated storage; dropping it only frees.
        Ok(())
    }

    /// Drop every live element, keeping the block.
    fn destroy_elements(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: slots `0..len` were live; `len` is already zero so a
        // panicking destructor cannot cause a second drop.
        unsafe { transfer::drop_run(self.block.as_mut_ptr(), len) };
    }

    fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are live and the pointer is non-null and
        // aligned even when the block is empty.
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }
}

impl<T: Clone> DynArray<T> {
    /// Copy-construct, reporting allocation failure.
    ///
    /// The result has `len == capacity == self.len()`. An empty source
    /// produces an empty array without allocating. If an element's `clone`
    /// panics, the clones made so far are dropped and the new block is
    /// released before the panic propagates.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        if self.len == 0 {
            return Ok(Self::new());
        }
        let mut block = OwnedBlock::allocate(self.len)?;
        // SAFETY: `block` has exactly `self.len` fresh slots.
        unsafe { transfer::clone_into(self.as_slice(), block.as_mut_ptr()) };
        Ok(Self {
            block,
            len: self.len,
        })
    }

    /// Copy-assign from `source`, reporting allocation failure.
    ///
    /// If the current block is too small, `source` is cloned into a fresh
    /// block which is then swapped in; on failure `self` is unchanged.
    /// Otherwise the current elements are dropped and `source` is cloned
    /// into the existing block. A panicking `clone` on that path leaves the
    /// elements cloned so far in place.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        if self.capacity() < source.len {
            let mut fresh = source.try_clone()?;
            mem::swap(self, &mut fresh);
            return Ok(());
        }

        self.destroy_elements();
        let dst = self.block.as_mut_ptr();
        for item in source.as_slice() {
            // SAFETY: `len < source.len <= capacity` and the slot was
            // emptied by `destroy_elements`.
            unsafe { dst.add(self.len).write(item.clone()) };
            self.len += 1;
        }
        Ok(())
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(array) => array,
            Err(err) => err.raise(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            err.raise();
        }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.destroy_elements();
        // The block releases its storage when the field is dropped.
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        // SAFETY: checked above.
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        // SAFETY: checked above.
        unsafe { self.get_unchecked_mut(index) }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
