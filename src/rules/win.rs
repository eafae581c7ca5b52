//! Win condition checking
//!
//! Five or more stones in a row along any of the four line directions wins.
//! Overlines count.

use crate::board::{Board, Player, Pos, Stone};
use crate::eval::DIRECTIONS;

/// Stones of `stone` contiguous with `pos` along `dir`, in line order
fn line_through(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> Vec<Pos> {
    if board.get(pos) != Ok(stone) {
        return Vec::new();
    }

    let mut line = vec![pos];

    // Extend in negative direction first
    let (mut r, mut c) = (i32::from(pos.row) - dr, i32::from(pos.col) - dc);
    while let Some(prev) = board.pos_at(r, c) {
        if board.get(prev) != Ok(stone) {
            break;
        }
        line.insert(0, prev);
        r -= dr;
        c -= dc;
    }

    // Extend in positive direction
    let (mut r, mut c) = (i32::from(pos.row) + dr, i32::from(pos.col) + dc);
    while let Some(next) = board.pos_at(r, c) {
        if board.get(next) != Ok(stone) {
            break;
        }
        line.push(next);
        r += dr;
        c += dc;
    }

    line
}

/// Find the positions of a 5-in-a-row through `pos`, if any
pub fn winning_line_at(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    DIRECTIONS
        .iter()
        .map(|&dir| line_through(board, pos, dir, player.stone()))
        .find(|line| line.len() >= 5)
}
