//! Slot buffer allocation seam

use alloc::vec::Vec;

use crate::error::Result;

/// Allocate-or-grow primitive behind every sparse vector resize
///
/// Implementations decide whether `slots` may hold `size` slots and make room
/// for them, or report why they cannot. They only manage capacity: the caller
/// owns the slot contents and performs the actual length change after a
/// successful call, for growth and shrink alike. A failed call must leave
/// `slots` untouched.
pub trait SlotAllocator {
    /// Prepare `slots` for a length of `size`
    fn allocate_or_grow<T>(&self, slots: &mut Vec<Option<T>>, size: usize) -> Result<()>;

    /// Hand back spare capacity after the caller shrank `slots`
    fn release<T>(&self, slots: &mut Vec<Option<T>>) {
        let _ = slots;
    }
}
