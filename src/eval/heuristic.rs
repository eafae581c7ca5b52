//! Candidate scoring
//!
//! A candidate is scored by simulating a stone on it and reading the runs it
//! would sit in along the four line directions:
//! - offense: the patterns the mover would create
//! - defense: the patterns the opponent would create on the same cell
//!
//! `total = offense + k * defense` with `k < 1`, so completing an own line beats
//! blocking an equally strong opposing line, while blocking an opponent five
//! still beats anything short of winning (the five weight dominates).

use crate::board::{Board, Player, Pos, Stone};
use crate::error::{EngineError, Result};

use super::patterns::{LinePattern, Openness, PatternKind};

/// Direction vectors for line checking (4 directions)
/// Each direction only needs to be checked once (we scan both ways from the cell)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Steps walked each way from the candidate
const SCAN_REACH: i32 = 4;

/// Default weight of the opponent's patterns relative to our own
pub const DEFAULT_DEFENSE_WEIGHT: f64 = 0.9;
/// Lowest defense weight at which blocking an opponent five still dominates
pub const MIN_DEFENSE_WEIGHT: f64 = 0.1;
/// Exclusive upper bound: defense must weigh less than offense
pub const MAX_DEFENSE_WEIGHT: f64 = 1.0;

/// Score of a single candidate for the side to move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveScore {
    /// Summed pattern weights for the mover
    pub offense: i64,
    /// Summed pattern weights the opponent would get on this cell
    pub defense: i64,
    /// `offense + k * defense`
    pub total: f64,
    /// Playing here completes five for the mover
    pub wins: bool,
    /// Playing here denies the opponent a five
    pub blocks: bool,
}

/// Classify the run through `pos` along one direction.
///
/// `board` must already hold `player`'s stone at `pos`.
#[must_use]
pub fn scan_line(board: &Board, pos: Pos, dir: (i32, i32), player: Player) -> LinePattern {
    let (forward, forward_open) = walk(board, pos, dir, player);
    let (backward, backward_open) = walk(board, pos, (-dir.0, -dir.1), player);
    LinePattern::new(
        1 + forward + backward,
        Openness::from_ends(backward_open, forward_open),
    )
}

/// Count `player` stones stepping away from `pos` (up to `SCAN_REACH`),
/// and whether the cell ending the run is empty
fn walk(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player) -> (u8, bool) {
    let own = player.stone();
    let mut count = 0u8;
    let mut r = i32::from(pos.row);
    let mut c = i32::from(pos.col);

    for _ in 0..SCAN_REACH {
        r += dr;
        c += dc;
        let Some(next) = board.pos_at(r, c) else {
            // Board edge blocks
            return (count, false);
        };
        match board.get(next) {
            Ok(s) if s == own => count += 1,
            Ok(Stone::Empty) => return (count, true),
            // Opponent stone blocks
            _ => return (count, false),
        }
    }

    // Run already spans five with the candidate; the far end no longer matters
    (count, false)
}

/// Line patterns `player` would form by playing `pos`, one per direction
pub fn line_patterns(board: &Board, pos: Pos, player: Player) -> Result<[LinePattern; 4]> {
    if board.get(pos)? != Stone::Empty {
        return Err(EngineError::InvalidCell {
            row: pos.row,
            col: pos.col,
        });
    }
    let simulated = board.with_stone(pos, player)?;
    Ok(DIRECTIONS.map(|dir| scan_line(&simulated, pos, dir, player)))
}

/// Sum of pattern weights `player` would get by playing `pos`
pub fn offense_score(board: &Board, pos: Pos, player: Player) -> Result<i64> {
    Ok(line_patterns(board, pos, player)?
        .iter()
        .map(|p| p.weight())
        .sum())
}

/// Score `pos` for `player`, weighting the opponent's view by `defense_weight`
pub fn evaluate(board: &Board, pos: Pos, player: Player, defense_weight: f64) -> Result<MoveScore> {
    let mine = line_patterns(board, pos, player)?;
    let theirs = line_patterns(board, pos, player.opponent())?;

    let offense: i64 = mine.iter().map(|p| p.weight()).sum();
    let defense: i64 = theirs.iter().map(|p| p.weight()).sum();

    #[allow(clippy::cast_precision_loss)]
    let total = offense as f64 + defense_weight * defense as f64;

    Ok(MoveScore {
        offense,
        defense,
        total,
        wins: mine.iter().any(|p| p.kind() == PatternKind::Five),
        blocks: theirs.iter().any(|p| p.kind() == PatternKind::Five),
    })
}
