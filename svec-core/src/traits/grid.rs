//! Two-dimensional view over a sparse slot buffer
//!
//! Row-major grids address a flat sequence through `row * cols + col`; this
//! trait is the format-agnostic read side of such a grid.

/// Core sparse grid trait for layout-agnostic access
pub trait SparseGrid {
    /// The element type stored in this grid
    type Element;

    /// Get the element at the specified cell
    ///
    /// Returns `None` if the cell is empty or if the position is out of
    /// bounds. The two cases are deliberately indistinguishable.
    fn get_element(&self, row: usize, col: usize) -> Option<&Self::Element>;

    /// Get grid dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of occupied cells
    fn nnz(&self) -> usize;
}
