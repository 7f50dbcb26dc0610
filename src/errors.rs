//! Errors for board construction and cell writes
use crate::board::{Cell, Digit};

#[cfg(doc)]
use crate::Board;

/// Error for [`Board::from_grid`]: the supplied grid is not 9x9.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("grid should be 9x9, found {rows} rows and {cols} columns")]
pub struct ShapeError {
    /// Number of rows supplied.
    pub rows: usize,
    /// Width of the first row with the wrong length, or 9 if only the row count is off.
    pub cols: usize,
}

/// Error for [`Board::from_grid`]: the grid breaks a sudoku constraint.
///
/// Either a value lies outside `1..=9` or a digit repeats within a row,
/// column or 3x3 box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("grid contains a value outside 1..=9 or a repeated digit within a row, column or box")]
pub struct InvalidBoardError(pub(crate) ());

/// Error for [`Board::from_grid`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GridError {
    /// Grid dimensions are not 9x9
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Grid contents violate a structural invariant
    #[error(transparent)]
    Invalid(#[from] InvalidBoardError),
}

/// Error for [`Board::set`]: the target cell is already filled.
///
/// Overwriting is deliberately not allowed; a cell must be [`cleared`](Board::clear)
/// before it can hold a new digit. The solver never runs into this, so seeing
/// it during a solve indicates a bug, not an unsolvable puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} already contains {digit}")]
pub struct OccupiedCellError {
    /// The cell the write was aimed at.
    pub cell: Cell,
    /// The digit already occupying it.
    pub digit: Digit,
}
