//! A growable, exclusively owned buffer of [`Thing`]s.
//!
//! [`ThingVector`] doubles its buffer when full and halves it once fewer than a
//! quarter of the slots are live (see [`policy`]). Each resize allocates a
//! fresh buffer, moves the live things across and frees the old one.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

pub mod error;
pub mod policy;
pub mod stats;
pub mod thing;

pub use error::VectorError;
pub use thing::Thing;

pub struct ThingVector {
    ptr: NonNull<Thing>,
    cap: usize,
    len: usize,
    reallocations: usize,
    _marker: PhantomData<Thing>,
}

// SAFETY: the buffer is owned exclusively by this value and Thing is Send.
unsafe impl Send for ThingVector {}
// SAFETY: shared references only hand out &Thing, and Thing is Sync.
unsafe impl Sync for ThingVector {}

impl ThingVector {
    /// Create an empty container. Nothing is allocated.
    pub fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            reallocations: 0,
            _marker: PhantomData,
        }
    }

    /// Create an empty container with room for `capacity` things.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` slots exceed the maximum allocation size.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }
        let ptr = match allocate(capacity) {
            Ok(ptr) => ptr,
            Err(err) => panic!("{err}"),
        };
        Self {
            ptr,
            cap: capacity,
            len: 0,
            reallocations: 0,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Number of times the buffer has been replaced.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Append `thing`, growing the buffer if it is full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow, like `Vec::push`.
    pub fn push(&mut self, thing: Thing) {
        if let Err(err) = self.try_push(thing) {
            panic!("{err}");
        }
    }

    /// Append `thing`, reporting capacity overflow instead of panicking.
    ///
    /// On error the container is unchanged and `thing` is dropped.
    pub fn try_push(&mut self, thing: Thing) -> Result<(), VectorError> {
        if self.len == self.cap {
            let new_cap = policy::grown_capacity(self.cap).ok_or(VectorError::CapacityOverflow {
                requested: self.cap.saturating_mul(policy::GROWTH_FACTOR),
            })?;
            self.reallocate(new_cap)?;
        }

        unsafe {
            // SAFETY: len < cap, so the slot is inside the allocation and unused.
            ptr::write(self.ptr.as_ptr().add(self.len), thing);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last thing, shrinking the buffer once it is
    /// less than a quarter full.
    pub fn pop(&mut self) -> Result<Thing, VectorError> {
        if self.len == 0 {
            return Err(VectorError::EmptyContainer);
        }

        self.len -= 1;
        let thing = unsafe {
            // SAFETY: the slot at the old len - 1 held a live thing and is now
            // outside [0, len), so it will not be read or dropped again.
            ptr::read(self.ptr.as_ptr().add(self.len))
        };

        if let Some(target) = policy::shrunk_capacity(self.len, self.cap) {
            log::debug!(
                "shrinking thing buffer: {} live in {} slots",
                self.len,
                self.cap
            );
            if let Err(err) = self.reallocate(target) {
                log::warn!("keeping {} slots after failed shrink: {err}", self.cap);
            }
        }
        Ok(thing)
    }

    /// First thing.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty. Use [`at`](Self::at) for a checked
    /// lookup.
    pub fn front(&self) -> &Thing {
        &self[0]
    }

    pub fn front_mut(&mut self) -> &mut Thing {
        &mut self[0]
    }

    /// Last thing.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    pub fn back(&self) -> &Thing {
        let last = self.last_index();
        &self[last]
    }

    pub fn back_mut(&mut self) -> &mut Thing {
        let last = self.last_index();
        &mut self[last]
    }

    /// Checked access to the thing at `index`.
    pub fn at(&self, index: usize) -> Result<&Thing, VectorError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Thing, VectorError> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Access the thing at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> &Thing {
        debug_assert!(index < self.len, "unchecked index {index} >= len {}", self.len);
        &*self.ptr.as_ptr().add(index)
    }

    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Thing {
        debug_assert!(index < self.len, "unchecked index {index} >= len {}", self.len);
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Pointer to the first live thing, or null when empty.
    pub fn begin(&self) -> *const Thing {
        if self.len == 0 {
            ptr::null()
        } else {
            self.ptr.as_ptr()
        }
    }

    /// Pointer one past the last live thing, or null when empty.
    pub fn end(&self) -> *const Thing {
        if self.len == 0 {
            ptr::null()
        } else {
            // SAFETY: one past the last live slot is within or at the end of
            // the allocation.
            unsafe { self.ptr.as_ptr().add(self.len) }
        }
    }

    /// The live things `[begin, end)` as a slice.
    pub fn as_slice(&self) -> &[Thing] {
        // SAFETY: [0, len) is initialised, and ptr is non-null and aligned
        // even when dangling.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Thing] {
        // SAFETY: as for as_slice, and &mut self guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn last_index(&self) -> usize {
        match self.len.checked_sub(1) {
            Some(last) => last,
            None => panic!("back() called on an empty ThingVector"),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), VectorError> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Move the live things into a fresh buffer of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) -> Result<(), VectorError> {
        assert!(
            new_cap >= self.len,
            "reallocating to {new_cap} slots would lose {} live things",
            self.len
        );
        if new_cap == self.cap {
            return Ok(());
        }

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            allocate(new_cap)?
        };

        unsafe {
            // SAFETY: both buffers hold at least len slots and are distinct
            // allocations. The old slots are logically moved-from and freed
            // without being dropped.
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            release(self.ptr, self.cap);
        }

        log::trace!(
            "reallocated thing buffer: {} -> {} slots ({} live)",
            self.cap,
            new_cap,
            self.len
        );
        self.ptr = new_ptr;
        self.cap = new_cap;
        self.reallocations += 1;
        Ok(())
    }
}

fn allocate(capacity: usize) -> Result<NonNull<Thing>, VectorError> {
    debug_assert!(capacity > 0);
    let layout = Layout::array::<Thing>(capacity)
        .map_err(|_| VectorError::CapacityOverflow { requested: capacity })?;

    // SAFETY: capacity > 0 and Thing is not zero-sized, so the layout is non-empty.
    let raw = unsafe { alloc(layout) };
    match NonNull::new(raw.cast::<Thing>()) {
        Some(ptr) => {
            stats::record_alloc(capacity);
            Ok(ptr)
        }
        None => handle_alloc_error(layout),
    }
}

/// Free a buffer obtained from [`allocate`]. A zero capacity is a no-op.
///
/// # Safety
///
/// `ptr` must come from `allocate(capacity)` and must not be used afterwards.
unsafe fn release(ptr: NonNull<Thing>, capacity: usize) {
    if capacity == 0 {
        return;
    }
    // SAFETY: this exact layout was validated by Layout::array in allocate.
    let layout = Layout::from_size_align_unchecked(
        mem::size_of::<Thing>() * capacity,
        mem::align_of::<Thing>(),
    );
    dealloc(ptr.as_ptr().cast::<u8>(), layout);
}

impl Drop for ThingVector {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: [0, len) are live and dropped exactly once here.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            release(self.ptr, self.cap);
        }
    }
}

impl Index<usize> for ThingVector {
    type Output = Thing;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &Thing {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for ThingVector {
    fn index_mut(&mut self, index: usize) -> &mut Thing {
        &mut self.as_mut_slice()[index]
    }
}

impl Default for ThingVector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThingVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.as_slice().iter().map(Thing::value))
            .finish()
    }
}

#[cfg(test)]
mod tests;
