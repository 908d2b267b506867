//! Row-major matrix layered over a sparse vector
//!
//! A [`Matrix`] owns one [`SparseVec`] of `rows * cols` slots and maps each
//! cell to `row * cols + col`. Out-of-bounds coordinates are ignored on write
//! and read as empty.

use svec_core::{linear_index, Result, SlotAllocator, SparseError, SparseGrid};
use tracing::debug;

use crate::growth::GrowthConfig;
use crate::vector::{fatal, SparseVec};

/// Row-major matrix of optional cells
///
/// Deserializing checks that `cells` holds exactly `rows * cols` slots.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
pub struct Matrix<T, A: SlotAllocator = GrowthConfig> {
    rows: usize,
    cols: usize,
    cells: SparseVec<T, A>,
}

impl<T> Matrix<T> {
    /// Create an empty `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_allocator(rows, cols, GrowthConfig::default())
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(SparseError::IndexOverflow)
}

impl<T, A: SlotAllocator> Matrix<T, A> {
    /// Create an empty matrix backed by `allocator`
    pub fn with_allocator(rows: usize, cols: usize, allocator: A) -> Self {
        Self::try_with_allocator(rows, cols, allocator).unwrap_or_else(|err| fatal(err))
    }

    /// Fallible form of [`Matrix::with_allocator`]
    pub fn try_with_allocator(rows: usize, cols: usize, allocator: A) -> Result<Self> {
        let size = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: SparseVec::try_with_allocator(size, allocator)?,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Backing vector
    pub fn cells(&self) -> &SparseVec<T, A> {
        &self.cells
    }

    /// Change the dimensions
    ///
    /// The backing vector is resized linearly: cells keep their linear index,
    /// not their (row, col) position, when the column count changes.
    pub fn try_resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let size = cell_count(rows, cols)?;
        debug!(rows, cols, "resizing matrix");
        self.cells.try_resize(size)?;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Infallible form of [`Matrix::try_resize`]
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.try_resize(rows, cols).unwrap_or_else(|err| fatal(err))
    }

    /// Linear index of (`row`, `col`), without a bounds check
    pub fn idx(&self, row: usize, col: usize) -> Result<usize> {
        linear_index(row, col, self.cols)
    }

    /// Row of a linear index, `None` for a matrix without columns
    pub fn row(&self, index: usize) -> Option<usize> {
        index.checked_div(self.cols)
    }

    /// Column of a linear index, `None` for a matrix without columns
    pub fn col(&self, index: usize) -> Option<usize> {
        index.checked_rem(self.cols)
    }

    fn cell(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Store `item` at (`row`, `col`), returning the previous value
    ///
    /// Out-of-bounds coordinates are ignored and hand `item` back.
    pub fn set(&mut self, row: usize, col: usize, item: T) -> Option<T> {
        match self.cell(row, col) {
            // In bounds the slot exists, so this never grows
            Some(index) => self.cells.set(index, item),
            None => Some(item),
        }
    }

    /// Value at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(self.cell(row, col)?)
    }

    /// Mutable value at (`row`, `col`)
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let index = self.cell(row, col)?;
        self.cells.get_mut(index)
    }

    /// Remove the cell at (`row`, `col`)
    ///
    /// Delegates to a one-slot vector remove, so every later cell in linear
    /// order moves back by one and the last cell becomes empty.
    pub fn remove(&mut self, row: usize, col: usize) {
        if let Some(index) = self.cell(row, col) {
            self.cells.remove(index, 1);
        }
    }

    /// Remove `row`, moving later rows up and emptying the last row
    pub fn remove_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        self.cells.remove(row * self.cols, self.cols);
    }

    /// Occupied cells of `row` as (col, value) pairs
    pub fn row_view(&self, row: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        let start = if row < self.rows { row * self.cols } else { 0 };
        let len = if row < self.rows { self.cols } else { 0 };

        self.cells
            .as_slots()
            .get(start..start + len)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter_map(|(col, slot)| slot.as_ref().map(|value| (col, value)))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, A> serde::Deserialize<'de> for Matrix<T, A>
where
    T: serde::Deserialize<'de>,
    A: SlotAllocator + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        #[serde(bound(deserialize = "T: serde::Deserialize<'de>, A: Default"))]
        struct Fields<T, A: SlotAllocator> {
            rows: usize,
            cols: usize,
            cells: SparseVec<T, A>,
        }

        let Fields { rows, cols, cells } =
            <Fields<T, A> as serde::Deserialize>::deserialize(deserializer)?;
        let expected = cell_count(rows, cols).map_err(D::Error::custom)?;
        if cells.len() != expected {
            return Err(D::Error::custom(format!(
                "{rows}x{cols} matrix needs {expected} cells, found {}",
                cells.len()
            )));
        }

        Ok(Self { rows, cols, cells })
    }
}

impl<T, A: SlotAllocator> SparseGrid for Matrix<T, A> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<&T> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.cells.occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: usize, cols: usize) -> Matrix<usize> {
        let mut matrix = Matrix::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                matrix.set(row, col, row * 10 + col);
            }
        }
        matrix
    }

    #[test]
    fn test_create() {
        let matrix: Matrix<u8> = Matrix::new(3, 4);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 4);
        assert_eq!(matrix.cells().len(), 12);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_set_get() {
        let mut matrix = Matrix::new(2, 3);
        assert_eq!(matrix.set(1, 2, 'x'), None);
        assert_eq!(matrix.get(1, 2), Some(&'x'));
        assert_eq!(matrix.cells().get(5), Some(&'x'));

        // Out of bounds is ignored
        assert_eq!(matrix.set(2, 0, 'y'), Some('y'));
        assert_eq!(matrix.set(0, 3, 'z'), Some('z'));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.cells().len(), 6);
    }

    #[test]
    fn test_index_mapping() {
        let matrix: Matrix<u8> = Matrix::new(3, 4);
        assert_eq!(matrix.idx(2, 1), Ok(9));
        assert_eq!(matrix.row(9), Some(2));
        assert_eq!(matrix.col(9), Some(1));
        assert_eq!(
            matrix.idx(usize::MAX, 1),
            Err(SparseError::IndexOverflow)
        );

        let empty: Matrix<u8> = Matrix::new(3, 0);
        assert_eq!(empty.row(1), None);
        assert_eq!(empty.col(1), None);
    }

    #[test]
    fn test_remove_cell_shifts_linear() {
        let mut matrix = filled(2, 2);
        matrix.remove(0, 1);

        assert_eq!(matrix.get(0, 0), Some(&0));
        assert_eq!(matrix.get(0, 1), Some(&10));
        assert_eq!(matrix.get(1, 0), Some(&11));
        assert_eq!(matrix.get(1, 1), None);

        // Out of bounds is a no-op
        matrix.remove(5, 0);
        assert_eq!(matrix.nnz(), 3);
    }

    #[test]
    fn test_remove_row() {
        let mut matrix = filled(3, 2);
        matrix.remove_row(0);

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.get(0, 0), Some(&10));
        assert_eq!(matrix.get(0, 1), Some(&11));
        assert_eq!(matrix.get(1, 0), Some(&20));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(2, 1), None);

        matrix.remove_row(3);
        assert_eq!(matrix.nnz(), 4);
    }

    #[test]
    fn test_resize_is_linear() {
        let mut matrix = filled(2, 2);
        matrix.resize(2, 3);

        assert_eq!(matrix.dimensions(), (2, 3));
        assert_eq!(matrix.cells().len(), 6);
        // Linear slot 2 (formerly (1, 0)) now reads as (0, 2)
        assert_eq!(matrix.get(0, 2), Some(&10));

        matrix.resize(1, 1);
        assert_eq!(matrix.cells().len(), 1);
        assert_eq!(matrix.get(0, 0), Some(&0));
    }

    #[test]
    fn test_clone_is_independent() {
        let matrix = filled(2, 2);
        let mut copy = matrix.clone();
        copy.set(0, 0, 99);

        assert_eq!(matrix.get(0, 0), Some(&0));
        assert_eq!(copy.get(0, 0), Some(&99));
        assert_eq!(copy.dimensions(), matrix.dimensions());
    }

    #[test]
    fn test_row_view() {
        let mut matrix = Matrix::new(2, 3);
        matrix.set(1, 0, 'a');
        matrix.set(1, 2, 'c');

        let row: Vec<_> = matrix.row_view(1).collect();
        assert_eq!(row, vec![(0, &'a'), (2, &'c')]);
        assert_eq!(matrix.row_view(0).count(), 0);
        assert_eq!(matrix.row_view(7).count(), 0);
    }

    #[test]
    fn test_row_view_on_short_backing() {
        let mut matrix: Matrix<u8> = Matrix::new(3, 2);
        matrix.cells = [None, Some(1)].into_iter().collect();

        assert_eq!(matrix.row_view(0).collect::<Vec<_>>(), vec![(1, &1)]);
        assert_eq!(matrix.row_view(1).count(), 0);
        assert_eq!(matrix.row_view(2).count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_cell_count() {
        let mut matrix = Matrix::new(2, 2);
        matrix.set(1, 0, 7u32);

        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":2,"cells":[null,null,7,null]}"#);
        let parsed: Matrix<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, matrix);
        assert_eq!(parsed.row_view(1).collect::<Vec<_>>(), vec![(0, &7)]);

        let short =
            serde_json::from_str::<Matrix<u32>>(r#"{"rows":3,"cols":2,"cells":[null,1]}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("3x2 matrix needs 6 cells, found 2"), "{err}");

        let overflow = format!(r#"{{"rows":{},"cols":2,"cells":[]}}"#, usize::MAX);
        assert!(serde_json::from_str::<Matrix<u32>>(&overflow).is_err());
    }

    #[test]
    fn test_grid_trait() {
        fn density<G: SparseGrid>(grid: &G) -> f64 {
            let (rows, cols) = grid.dimensions();
            grid.nnz() as f64 / (rows * cols) as f64
        }

        let mut matrix = Matrix::new(2, 2);
        matrix.set(0, 1, 5u32);
        assert_eq!(matrix.get_element(0, 1), Some(&5));
        assert_eq!(density(&matrix), 0.25);
    }

    #[test]
    fn test_dimension_overflow() {
        let result: Result<Matrix<u8>> =
            Matrix::try_with_allocator(usize::MAX, 2, GrowthConfig::default());
        assert_eq!(result.err(), Some(SparseError::IndexOverflow));
    }
}
