//! Forward-only cursor over sparse vector slots

use std::iter::FusedIterator;

/// Cursor yielding every slot of a [`SparseVec`](crate::SparseVec) in order
///
/// Empty slots are yielded as `Some(None)`; `None` means the cursor has
/// reached the end. The cursor holds a shared borrow of the vector, so the
/// vector cannot be resized underneath it.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    slots: &'a [Option<T>],
    cursor: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self { slots, cursor: 0 }
    }

    /// Index of the last yielded slot
    ///
    /// Reads 0 before the first call to `next`.
    pub fn cursor(&self) -> usize {
        self.cursor.saturating_sub(1)
    }

    /// Rewind to the first slot
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.cursor)?;
        self.cursor += 1;
        Some(slot.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {
    fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.cursor)
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}
