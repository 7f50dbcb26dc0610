#![warn(missing_docs)]
//! A 9x9 sudoku board and solver
//!
//! ## Overview
//!
//! This library represents a classic 9x9 sudoku and solves it with two
//! complementary passes: an elimination pass that fills every cell with a
//! single remaining candidate (a "naked single") and an exhaustive
//! backtracking search for everything elimination cannot decide.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Board;
//!
//! let puzzle = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! let mut board = Board::from_str_line(puzzle).unwrap();
//! if board.solve() {
//!     println!("{}", board);
//!     assert!(board.to_str_line().starts_with("534678912"));
//! }
//! ```

mod bitset;
mod board;
mod solver;

pub mod errors;
pub mod parse_errors;

pub use crate::bitset::{DigitSet, Empty};
pub use crate::board::{Board, Cell, Digit};
