//! The two solving passes: candidate elimination and backtracking search.
//!
//! Elimination is the cheap pass. Every digit on the board excludes itself
//! from the empty cells of its row, column and box; an empty cell left with
//! one single candidate must hold that candidate. Filling such cells
//! uncovers new ones, so the board is rescanned until a whole pass yields
//! nothing (the fixed point) or no empty cell remains. Easy puzzles finish
//! right here.
//!
//! Whatever elimination cannot decide is handed to a depth-first search:
//! take the first empty cell, try its candidates in ascending order, recurse,
//! and clear the cell again when a guess leads nowhere. Running out of
//! candidates for a cell means an earlier guess was wrong and the caller
//! backtracks; running out at the top level means the puzzle has no solution
//! at all, which is reported as `false`, not as an error.

use crate::board::{Board, Cell};

pub(crate) fn solve_by_elimination(board: &mut Board) -> bool {
    loop {
        if board.is_full() {
            return true;
        }
        let mut progress = false;
        for cell in Cell::all() {
            if board.get(cell).is_some() {
                continue;
            }
            if let Ok(Some(digit)) = board.candidates(cell).unique() {
                board.place(cell, digit);
                progress = true;
            }
        }
        if !progress {
            // stuck before completion, hand over to the search
            return board.is_full();
        }
    }
}

pub(crate) fn solve_by_backtracking(board: &mut Board) -> bool {
    // The search keeps validity as an invariant by only ever placing
    // candidates, so the starting board must be checked once up front.
    board.is_valid() && backtrack(board)
}

pub(crate) fn solve(board: &mut Board) -> bool {
    if !board.is_valid() {
        return false;
    }
    solve_by_elimination(board) || backtrack(board)
}

fn backtrack(board: &mut Board) -> bool {
    let cell = match board.first_empty_cell() {
        Some(cell) => cell,
        // no empty cell left, the board is solved
        None => return true,
    };

    for digit in board.candidates(cell) {
        board.place(cell, digit);
        if backtrack(board) {
            return true;
        }
        board.clear(cell);
    }

    // all candidates exhausted, a guess further up must change
    false
}
