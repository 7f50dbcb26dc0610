//! Errors that may be encountered when reading a board from a string
use crate::errors::InvalidBoardError;

/// An invalid entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// A structure representing an error caused when parsing a sudoku line
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Fewer than 81 cells supplied. Returns the number of cells found.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
    /// The parsed grid breaks a sudoku constraint
    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoardError),
}
