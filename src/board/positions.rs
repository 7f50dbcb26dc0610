//! Cell addressing on the 9x9 grid.
use std::fmt;

/// One of the 81 positions on the board, numbered `0..81` from left to
/// right, top to bottom.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..81`.
    pub fn new(index: u8) -> Self {
        Self::new_checked(index).unwrap()
    }

    /// Constructs a new `Cell`. Returns `None`, if the index is not in the range of `0..81`.
    pub fn new_checked(index: u8) -> Option<Self> {
        if index < 81 {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Constructs the cell at the given row and column, each in `0..9`.
    ///
    /// # Panic
    /// Panics, if `row` or `col` is out of range.
    pub fn from_coords(row: u8, col: u8) -> Self {
        assert!(row < 9);
        assert!(col < 9);
        Cell(row * 9 + col)
    }

    /// Returns the cell number contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell number as a `usize` for indexing.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row index from `0..=8`, topmost row is `0`.
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from `0..=8`, leftmost column is `0`.
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Index of the 3x3 box from `0..=8`, numbered from left to right, top to bottom.
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row(), self.col())
    }
}

pub(crate) fn row_cells(row: u8) -> impl Iterator<Item = Cell> {
    debug_assert!(row < 9);
    (0..9).map(move |col| Cell::from_coords(row, col))
}

pub(crate) fn col_cells(col: u8) -> impl Iterator<Item = Cell> {
    debug_assert!(col < 9);
    (0..9).map(move |row| Cell::from_coords(row, col))
}

pub(crate) fn block_cells(block: u8) -> impl Iterator<Item = Cell> {
    debug_assert!(block < 9);
    let corner_row = block / 3 * 3;
    let corner_col = block % 3 * 3;
    (0..9).map(move |i| Cell::from_coords(corner_row + i / 3, corner_col + i % 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates() {
        let cell = Cell::new(40);
        assert_eq!(cell.row(), 4);
        assert_eq!(cell.col(), 4);
        assert_eq!(cell.block(), 4);

        let corner = Cell::from_coords(8, 8);
        assert_eq!(corner.get(), 80);
        assert_eq!(corner.block(), 8);

        assert_eq!(Cell::new_checked(81), None);
    }

    #[test]
    fn houses_contain_their_cells() {
        for cell in Cell::all() {
            assert!(row_cells(cell.row()).any(|c| c == cell));
            assert!(col_cells(cell.col()).any(|c| c == cell));
            assert!(block_cells(cell.block()).any(|c| c == cell));
        }
    }
}
