//! Positional sequence abstraction shared by the vector and the list

/// Index-addressable sequence whose positions may be empty
pub trait SparseSequence {
    /// The element type stored in this sequence
    type Element;

    /// Get the element at `index`
    ///
    /// Returns `None` for an empty slot and for an index past the end.
    fn get_slot(&self, index: usize) -> Option<&Self::Element>;

    /// Number of addressable positions, empty ones included
    fn size(&self) -> usize;

    /// Number of positions holding a value
    fn occupied(&self) -> usize;

    /// Fraction of positions holding a value, `0.0` for an empty sequence
    fn density(&self) -> f64 {
        match self.size() {
            0 => 0.0,
            size => self.occupied() as f64 / size as f64,
        }
    }
}
