//! Slot bounds and growth arithmetic
//!
//! These helpers decide whether an index lies inside a buffer of `size` slots
//! and, if not, how many slots the buffer needs to reach it.

use core::ops::Range;

use crate::SparseError;

/// Convert a 0-based index into the slot count that makes it addressable
pub const fn count_based(index: usize) -> Result<usize, SparseError> {
    match index.checked_add(1) {
        Some(count) => Ok(count),
        None => Err(SparseError::IndexOverflow),
    }
}

/// Slot count required to address `index`, or `None` if it is already in range
pub const fn grow_target(size: usize, index: usize) -> Result<Option<usize>, SparseError> {
    if index < size {
        return Ok(None);
    }

    match count_based(index) {
        Ok(count) => Ok(Some(count)),
        Err(err) => Err(err),
    }
}

/// Slot count required to address both `a` and `b`, or `None` if both fit
pub const fn pair_grow_target(
    size: usize,
    a: usize,
    b: usize,
) -> Result<Option<usize>, SparseError> {
    let highest = if a > b { a } else { b };
    grow_target(size, highest)
}

/// Range affected by a left shift of `count` starting at `index`
///
/// Returns `None` when `index` is past the end (nothing to shift). The count
/// is clamped so the range never extends past `size`.
pub const fn shift_span(index: usize, count: usize, size: usize) -> Option<Range<usize>> {
    if index >= size {
        return None;
    }

    let available = size - index;
    let count = if count < available { count } else { available };
    Some(index..index + count)
}

/// Row-major linear index of (`row`, `col`) in a grid with `cols` columns
pub const fn linear_index(row: usize, col: usize, cols: usize) -> Result<usize, SparseError> {
    let base = match row.checked_mul(cols) {
        Some(base) => base,
        None => return Err(SparseError::IndexOverflow),
    };

    match base.checked_add(col) {
        Some(index) => Ok(index),
        None => Err(SparseError::IndexOverflow),
    }
}

/// Validate that `slots` slots of `T` fit in the address space
///
/// Returns the buffer size in bytes. Allocations are capped at `isize::MAX`
/// bytes, so anything above that can never succeed.
pub const fn validate_slot_bytes<T>(slots: usize) -> Result<usize, SparseError> {
    let slot_size = core::mem::size_of::<T>();

    let bytes = match slots.checked_mul(slot_size) {
        Some(bytes) => bytes,
        None => return Err(SparseError::CapacityOverflow),
    };

    if bytes > isize::MAX as usize {
        return Err(SparseError::CapacityOverflow);
    }

    Ok(bytes)
}
