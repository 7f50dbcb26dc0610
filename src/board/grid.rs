use std::fmt;

use crate::bitset::DigitSet;
use crate::board::{block_cells, col_cells, row_cells, Cell, Digit};
use crate::errors::{GridError, InvalidBoardError, OccupiedCellError, ShapeError};
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::solver;

/// A 9x9 sudoku board. Each of its 81 cells is either empty or holds a digit.
///
/// Because cells store [`Digit`]s, out-of-range values are unrepresentable;
/// the remaining structural invariants (no repeated digit within a row,
/// column or box) are checked once at construction and queryable through
/// [`is_valid`](Board::is_valid) afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board([Option<Digit>; 81]);

impl Board {
    /// Creates a board with all cells empty.
    pub fn new() -> Board {
        Board([None; 81])
    }

    /// Builds a board from a caller-supplied grid of rows.
    ///
    /// The grid must be 9x9 ([`ShapeError`] otherwise) and must satisfy the
    /// sudoku constraints: every value in `1..=9` and no digit repeated
    /// within a row, column or box ([`InvalidBoardError`] otherwise).
    /// `None` marks an empty cell; `Some(0)` is rejected as out of range,
    /// not treated as empty.
    pub fn from_grid(rows: &[Vec<Option<u8>>]) -> Result<Board, GridError> {
        if rows.len() != 9 {
            return Err(ShapeError {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            }
            .into());
        }
        if let Some(row) = rows.iter().find(|row| row.len() != 9) {
            return Err(ShapeError {
                rows: rows.len(),
                cols: row.len(),
            }
            .into());
        }

        let mut board = Board::new();
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if let Some(num) = value {
                    let digit = Digit::new_checked(num).ok_or(InvalidBoardError(()))?;
                    board.0[i * 9 + j] = Some(digit);
                }
            }
        }
        if !board.is_valid() {
            return Err(InvalidBoardError(()).into());
        }
        Ok(board)
    }

    /// Creates a board from an 81 character line, reading cells from left to
    /// right, top to bottom. Accepted are the digits `1..=9` and `'0'`, `'.'`
    /// or `'_'` for empty cells. Leading and trailing whitespace is ignored.
    ///
    /// The parsed grid must satisfy the sudoku constraints, like in
    /// [`from_grid`](Board::from_grid).
    pub fn from_str_line(s: &str) -> Result<Board, LineParseError> {
        let mut board = Board::new();
        let mut cell: u8 = 0;
        for ch in s.trim().chars() {
            if cell == 81 {
                return Err(LineParseError::TooManyCells);
            }
            match ch {
                '1'..='9' => board.0[cell as usize] = Some(Digit::new(ch as u8 - b'0')),
                '0' | '.' | '_' => (),
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell, ch })),
            }
            cell += 1;
        }
        if cell < 81 {
            return Err(LineParseError::NotEnoughCells(cell));
        }
        if !board.is_valid() {
            return Err(InvalidBoardError(()).into());
        }
        Ok(board)
    }

    /// Returns the content of a cell.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        self.0[cell.as_index()]
    }

    /// Enters a digit into an empty cell.
    ///
    /// Fails without touching the board if the cell is already filled;
    /// overwriting requires an explicit [`clear`](Board::clear) first.
    /// No constraint check is performed, so the write may make the board
    /// invalid. [`is_valid`](Board::is_valid) will report that.
    pub fn set(&mut self, cell: Cell, digit: Digit) -> Result<(), OccupiedCellError> {
        match self.0[cell.as_index()] {
            Some(occupant) => Err(OccupiedCellError {
                cell,
                digit: occupant,
            }),
            None => {
                self.0[cell.as_index()] = Some(digit);
                Ok(())
            }
        }
    }

    /// Marks a cell empty. Does nothing if it already is.
    pub fn clear(&mut self, cell: Cell) {
        self.0[cell.as_index()] = None;
    }

    // Write for the solver, which picks its cells from `first_empty_cell`
    // and therefore never hits an occupied one.
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(self.0[cell.as_index()].is_none());
        self.0[cell.as_index()] = Some(digit);
    }

    /// Checks that no digit repeats within any row.
    pub fn rows_valid(&self) -> bool {
        (0..9).all(|row| self.house_valid(row_cells(row)))
    }

    /// Checks that no digit repeats within any column.
    pub fn cols_valid(&self) -> bool {
        (0..9).all(|col| self.house_valid(col_cells(col)))
    }

    /// Checks that no digit repeats within any 3x3 box.
    pub fn blocks_valid(&self) -> bool {
        (0..9).all(|block| self.house_valid(block_cells(block)))
    }

    fn house_valid(&self, cells: impl Iterator<Item = Cell>) -> bool {
        let mut seen = DigitSet::NONE;
        for cell in cells {
            if let Some(digit) = self.get(cell) {
                if seen.contains(digit) {
                    return false;
                }
                seen.insert(digit);
            }
        }
        true
    }

    /// Checks all structural invariants: row, column and box uniqueness.
    /// Value range needs no check, a [`Digit`] is in range by construction.
    pub fn is_valid(&self) -> bool {
        self.rows_valid() && self.cols_valid() && self.blocks_valid()
    }

    /// Checks if every cell is filled.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Checks if the board is solved, i.e. full and valid.
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_valid()
    }

    /// Returns the first empty cell in row-major order, or `None` on a full board.
    pub fn first_empty_cell(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.get(cell).is_none())
    }

    /// Returns the digits not yet present in the cell's row, column or box.
    ///
    /// This is the elimination primitive: an empty cell whose candidate set
    /// has shrunk to a single digit must hold that digit. A filled cell lies
    /// in its own row, column and box, so querying one excludes its own
    /// digit too; the solver only ever queries empty cells.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        let mut candidates = DigitSet::ALL;
        let peers = row_cells(cell.row())
            .chain(col_cells(cell.col()))
            .chain(block_cells(cell.block()));
        for peer in peers {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns an iterator over all cell contents, going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().copied()
    }

    /// Fills every cell that has exactly one candidate left, rescanning until
    /// a full pass fills nothing more. Returns `true` if the board ended up
    /// solved.
    ///
    /// This pass only ever writes digits proven by elimination, so it never
    /// guesses and never needs to undo. `false` is not an error, it just
    /// means the rest of the puzzle requires search.
    pub fn solve_by_elimination(&mut self) -> bool {
        solver::solve_by_elimination(self)
    }

    /// Tries to complete the board by exhaustive backtracking search.
    /// Returns `true` and leaves the board solved if a solution exists.
    ///
    /// The search is deterministic: cells are tried in row-major order and
    /// digits in ascending order, so of several solutions it always finds
    /// the lexicographically first. If the board is invalid or no solution
    /// exists, it returns `false` and the board is left as it was.
    pub fn solve_by_backtracking(&mut self) -> bool {
        solver::solve_by_backtracking(self)
    }

    /// Tries to solve the board: an elimination pre-pass, then backtracking
    /// for whatever is left. Returns `true` if the board ended up solved.
    ///
    /// On failure the digits filled in by elimination are kept; they are
    /// forced and hold in any completion of the original board.
    pub fn solve(&mut self) -> bool {
        solver::solve(self)
    }

    /// Converts the board to an 81 character line, with `'.'` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|cell| match cell {
                Some(digit) => (b'0' + digit.get()) as char,
                None => '.',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row(), cell.col()) {
                (_, 3) | (_, 6) => write!(f, " ")?,    // separate boxes in a row
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate bands of boxes
                (_, 0) if cell.get() != 0 => writeln!(f)?,
                _ => (),
            }
            match self.get(cell) {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Board;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
            let line = String::deserialize(deserializer)?;
            Board::from_str_line(&line).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_roundtrip() {
        let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let board = Board::from_str_line(line).unwrap();
        assert_eq!(board.to_str_line(), line);
    }

    #[test]
    fn display_block_format() {
        let board = Board::from_str_line(
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        )
        .unwrap();
        let expected = "\
534 678 912
672 195 348
198 342 567

859 761 423
426 853 791
713 924 856

961 537 284
287 419 635
345 286 179";
        assert_eq!(format!("{}", board), expected);
    }
}
