//! Game rules for freestyle Gomoku
//!
//! This module implements the win condition (five or more in a row).
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::winning_line_at;

use crate::board::{Board, Pos};

/// A move is legal on any empty on-board cell
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}
