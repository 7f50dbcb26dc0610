//! Types for cells, digits and the board itself
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::positions::{block_cells, col_cells, row_cells};

pub use self::{digit::Digit, grid::Board, positions::Cell};
