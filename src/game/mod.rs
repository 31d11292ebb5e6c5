//! Core Connect Four board logic: grid representation with in-place
//! place/undo, line-of-four and open-three detection.

mod board;
mod player;

pub use board::{Board, Cell, LegalActions, CENTER_COL, COLS, DIRECTIONS, ROWS};
pub use player::Player;
