//! Sparse vector engine
//!
//! [`SparseVec`] is an index-addressable buffer of slots where any slot may be
//! empty. Writes past the end grow the buffer instead of failing, reads past
//! the end return `None`, and the logical size only changes through explicit
//! growth or [`SparseVec::resize`].
//!
//! Operations that may need more slots come in two flavours: `try_*` reports
//! allocation failure as a [`SparseError`], the plain form treats it as fatal
//! and aborts the process after logging.

use std::fmt;

use svec_core::{
    count_based, grow_target, pair_grow_target, shift_span, Result, SlotAllocator, SparseError,
    SparseSequence,
};
use tracing::{debug, error};

use crate::cursor::Cursor;
use crate::growth::GrowthConfig;

/// Abort after an unrecoverable slot allocation failure
#[cold]
pub(crate) fn fatal(err: SparseError) -> ! {
    error!(%err, "unrecoverable slot buffer failure, aborting");
    std::process::abort()
}

/// Auto-growing vector of optional slots
///
/// The size is the number of slots, empty or not. Slots hold `T` directly;
/// to store borrowed elements instantiate with a reference or shared pointer
/// type, in which case dropping a slot never touches the referent.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>, A: Default"
        )
    )
)]
pub struct SparseVec<T, A: SlotAllocator = GrowthConfig> {
    slots: Vec<Option<T>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    allocator: A,
}

impl<T> SparseVec<T> {
    /// Create a vector of `size` empty slots with the default growth policy
    pub fn new(size: usize) -> Self {
        Self::with_allocator(size, GrowthConfig::default())
    }
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T, A: SlotAllocator> SparseVec<T, A> {
    /// Create a vector of `size` empty slots backed by `allocator`
    pub fn with_allocator(size: usize, allocator: A) -> Self {
        Self::try_with_allocator(size, allocator).unwrap_or_else(|err| fatal(err))
    }

    /// Fallible form of [`SparseVec::with_allocator`]
    pub fn try_with_allocator(size: usize, allocator: A) -> Result<Self> {
        let mut vector = Self {
            slots: Vec::new(),
            allocator,
        };
        vector.try_resize(size)?;
        Ok(vector)
    }

    /// Number of slots, empty ones included
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the vector has no slots at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a value
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The allocator backing this vector
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Raw view of every slot
    ///
    /// Unlike [`SparseVec::get`] this distinguishes an empty slot
    /// (`Some(&None)` via `.get(i)`) from an index past the end (`None`).
    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Resize to exactly `size` slots
    ///
    /// New slots are empty; slots past `size` are dropped. Resizing to the
    /// current size is a no-op.
    pub fn try_resize(&mut self, size: usize) -> Result<()> {
        let len = self.slots.len();
        if size == len {
            return Ok(());
        }

        if size > len {
            self.allocator.allocate_or_grow(&mut self.slots, size)?;
            self.slots.resize_with(size, || None);
        } else {
            self.allocator.allocate_or_grow(&mut self.slots, size)?;
            self.slots.truncate(size);
            self.allocator.release(&mut self.slots);
        }
        Ok(())
    }

    /// Infallible form of [`SparseVec::try_resize`]
    pub fn resize(&mut self, size: usize) {
        self.try_resize(size).unwrap_or_else(|err| fatal(err))
    }

    fn grow_to(&mut self, target: Option<usize>) -> Result<()> {
        if let Some(size) = target {
            debug!(from = self.slots.len(), to = size, "growing to reach index");
            self.try_resize(size)?;
        }
        Ok(())
    }

    /// Raw slot at `index`, `None` only past the end
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&Option<T>> {
        self.slots.get(index)
    }

    /// Value at `index`
    ///
    /// Returns `None` both for an empty slot and for an index past the end.
    /// Callers that need to tell them apart use [`SparseVec::slot`].
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable value at `index`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Value of the first slot
    pub fn first(&self) -> Option<&T> {
        self.slots.first()?.as_ref()
    }

    /// Value of the last slot
    pub fn last(&self) -> Option<&T> {
        self.slots.last()?.as_ref()
    }

    /// Store `item` at `index`, growing to `index + 1` slots if needed
    ///
    /// Returns the value previously held by the slot.
    pub fn try_set(&mut self, index: usize, item: T) -> Result<Option<T>> {
        let target = grow_target(self.slots.len(), index)?;
        self.grow_to(target)?;
        Ok(self.slots[index].replace(item))
    }

    /// Infallible form of [`SparseVec::try_set`]
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        self.try_set(index, item).unwrap_or_else(|err| fatal(err))
    }

    /// Empty the slot at `index`, returning its value
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Insert `item` at `index` without overwriting a live value
    ///
    /// - past the end: grow and assign, like [`SparseVec::try_set`]
    /// - empty slot: fill it, nothing moves
    /// - occupied slot: shift `[index, len)` right by one first; the vector
    ///   grows by one slot when the last slot is occupied so no value falls
    ///   off the end
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.slots.len();
        if index >= len {
            self.try_set(index, item)?;
            return Ok(());
        }

        if self.slots[index].is_none() {
            self.slots[index] = Some(item);
            return Ok(());
        }

        if self.slots[len - 1].is_some() {
            self.try_resize(count_based(len)?)?;
        }

        // The last slot is empty now; rotating carries it round to `index`.
        self.slots[index..].rotate_right(1);
        self.slots[index] = Some(item);
        Ok(())
    }

    /// Infallible form of [`SparseVec::try_insert`]
    pub fn insert(&mut self, index: usize, item: T) {
        self.try_insert(index, item).unwrap_or_else(|err| fatal(err))
    }

    /// Shift the suffix starting at `index` left by `count` slots
    ///
    /// Values in `[index, index + count)` are dropped and the vacated tail
    /// becomes empty. The size never changes; an `index` past the end is a
    /// no-op.
    pub fn remove(&mut self, index: usize, count: usize) {
        let len = self.slots.len();
        let Some(span) = shift_span(index, count, len) else {
            return;
        };

        let shifted = span.len();
        self.slots[index..].rotate_left(shifted);
        self.slots[len - shifted..].fill_with(|| None);
    }

    /// Store `item` right after the highest occupied slot
    ///
    /// Trailing empty slots are reused rather than skipped. Returns the index
    /// written.
    pub fn try_push(&mut self, item: T) -> Result<usize> {
        let index = match self.slots.iter().rposition(Option::is_some) {
            Some(last) => last + 1,
            None => 0,
        };
        self.try_set(index, item)?;
        Ok(index)
    }

    /// Infallible form of [`SparseVec::try_push`]
    pub fn push(&mut self, item: T) -> usize {
        self.try_push(item).unwrap_or_else(|err| fatal(err))
    }

    /// Take the last slot's value and shrink by one slot
    pub fn pop(&mut self) -> Option<T> {
        let len = self.slots.len();
        if len == 0 {
            return None;
        }

        let value = self.slots[len - 1].take();
        self.resize(len - 1);
        value
    }

    /// Take the first slot's value, shift the rest left and shrink by one slot
    pub fn shift(&mut self) -> Option<T> {
        let len = self.slots.len();
        if len == 0 {
            return None;
        }

        let value = self.slots[0].take();
        self.remove(0, 1);
        self.resize(len - 1);
        value
    }

    /// Move the value at `origin` to `destination`
    ///
    /// Grows to reach `destination` if needed. Whatever `destination` held is
    /// dropped and `origin` is left empty. No-op when `origin` is past the end
    /// or equals `destination`.
    pub fn try_move_slot(&mut self, origin: usize, destination: usize) -> Result<()> {
        if origin >= self.slots.len() || origin == destination {
            return Ok(());
        }

        let target = grow_target(self.slots.len(), destination)?;
        self.grow_to(target)?;

        let value = self.slots[origin].take();
        self.slots[destination] = value;
        Ok(())
    }

    /// Infallible form of [`SparseVec::try_move_slot`]
    pub fn move_slot(&mut self, origin: usize, destination: usize) {
        self.try_move_slot(origin, destination).unwrap_or_else(|err| fatal(err))
    }

    /// Exchange two slots, growing to reach the higher index if needed
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<()> {
        let target = pair_grow_target(self.slots.len(), a, b)?;
        self.grow_to(target)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Infallible form of [`SparseVec::try_swap`]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.try_swap(a, b).unwrap_or_else(|err| fatal(err))
    }

    /// Gather occupied slots at the front, keeping their order
    ///
    /// Returns the number of occupied slots. The size is unchanged; pass the
    /// result to [`SparseVec::resize`] (or call
    /// [`SparseVec::shrink_to_occupied`]) to drop the empty tail.
    pub fn compact(&mut self) -> usize {
        let mut write = 0;
        for read in 0..self.slots.len() {
            if self.slots[read].is_some() {
                self.slots.swap(write, read);
                write += 1;
            }
        }

        debug!(size = self.slots.len(), occupied = write, "compacted slots");
        write
    }

    /// Compact, then shrink to the occupied slots
    pub fn try_shrink_to_occupied(&mut self) -> Result<usize> {
        let occupied = self.compact();
        self.try_resize(occupied)?;
        Ok(occupied)
    }

    /// Infallible form of [`SparseVec::try_shrink_to_occupied`]
    pub fn shrink_to_occupied(&mut self) -> usize {
        self.try_shrink_to_occupied().unwrap_or_else(|err| fatal(err))
    }

    /// Reverse slot order in place
    pub fn reverse(&mut self) {
        self.slots.reverse();
    }

    /// Empty every slot, keeping the size
    pub fn clean(&mut self) {
        self.slots.fill_with(|| None);
    }

    /// Cursor over every slot, empty ones included
    ///
    /// The cursor borrows the vector, so it cannot be resized while the
    /// cursor is alive.
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor::new(&self.slots)
    }
}

impl<T, A: SlotAllocator> SparseSequence for SparseVec<T, A> {
    type Element = T;

    fn get_slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn occupied(&self) -> usize {
        SparseVec::occupied(self)
    }
}

impl<'a, T, A: SlotAllocator> IntoIterator for &'a SparseVec<T, A> {
    type Item = Option<&'a T>;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<Option<T>> for SparseVec<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
            allocator: GrowthConfig::default(),
        }
    }
}

impl<T: PartialEq, A: SlotAllocator> PartialEq for SparseVec<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq, A: SlotAllocator> Eq for SparseVec<T, A> {}

impl<T: fmt::Debug, A: SlotAllocator> fmt::Debug for SparseVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.slots).finish()
    }
}
