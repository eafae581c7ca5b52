//! Move selection integrating candidate generation and scoring
//!
//! The engine is a single pass over the candidates with this priority:
//!
//! 1. **Immediate win**: the first candidate (row-major) that completes five
//!    for the mover is returned as soon as it is scored
//! 2. **Block**: a candidate denying the opponent a five outranks every
//!    non-blocking candidate through the weight table
//! 3. **Heuristic**: otherwise the highest `offense + k * defense` wins, ties
//!    going to the earliest candidate
//!
//! Each call works on its own board snapshot and the engine only holds
//! immutable configuration, so one engine can serve concurrent callers.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Player, Pos, Stone};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::default();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.select_move_with_stats(&board, Player::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Player, Pos};
use crate::error::{EngineError, Result};
use crate::eval::{evaluate, MoveScore, DEFAULT_DEFENSE_WEIGHT, MAX_DEFENSE_WEIGHT, MIN_DEFENSE_WEIGHT};
use crate::search::{candidates, DEFAULT_RADIUS};

/// Largest neighbourhood radius accepted by the configuration
pub const MAX_RADIUS: u8 = 4;

/// Tunable engine parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Chebyshev radius around existing stones for candidate generation
    pub radius: u8,
    /// Weight of the opponent's patterns relative to the mover's
    pub defense_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            defense_weight: DEFAULT_DEFENSE_WEIGHT,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_RADIUS).contains(&self.radius) {
            return Err(EngineError::InvalidConfig(format!(
                "radius {} is outside 1..={MAX_RADIUS}",
                self.radius
            )));
        }
        // Written so that NaN fails too
        if !(self.defense_weight >= MIN_DEFENSE_WEIGHT && self.defense_weight < MAX_DEFENSE_WEIGHT) {
            return Err(EngineError::InvalidConfig(format!(
                "defense weight {} is outside [{MIN_DEFENSE_WEIGHT}, {MAX_DEFENSE_WEIGHT})",
                self.defense_weight
            )));
        }
        Ok(())
    }
}

/// Which rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Empty board: center point
    Opening,
    /// Completes five for the mover
    ImmediateWin,
    /// Denies the opponent an immediate five
    Block,
    /// Highest heuristic score
    Heuristic,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Score of the chosen candidate
    pub score: MoveScore,
    pub search_type: SearchType,
    /// Number of candidates scored before the decision
    pub candidates: usize,
    pub time_us: u64,
}

/// A scored candidate, as returned by [`AIEngine::rank_moves`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMove {
    pub pos: Pos,
    pub score: MoveScore,
}

/// Heuristic move selector
#[derive(Debug, Clone, Copy, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom radius and defense weight
    pub fn with_config(radius: u8, defense_weight: f64) -> Result<Self> {
        Self::from_config(EngineConfig {
            radius,
            defense_weight,
        })
    }

    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `player` on `board`
    pub fn select_move(&self, board: &Board, player: Player) -> Result<Pos> {
        self.select_move_with_stats(board, player)
            .map(|result| result.best_move)
    }

    /// Best move for `player` on `board`, with the rule that chose it
    pub fn select_move_with_stats(&self, board: &Board, player: Player) -> Result<MoveResult> {
        let start = Instant::now();

        if board.is_full() {
            debug!(size = board.size(), "board is full");
            return Err(EngineError::NoLegalMove);
        }

        let mut best: Option<(Pos, MoveScore)> = None;
        let mut scored = 0usize;

        for pos in candidates(board, self.config.radius) {
            let score = evaluate(board, pos, player, self.config.defense_weight)?;
            scored += 1;
            trace!(row = pos.row, col = pos.col, total = score.total, "scored candidate");

            if score.wins {
                return Ok(self.finish(pos, score, SearchType::ImmediateWin, scored, start));
            }

            // Strict comparison keeps the earliest candidate on ties
            if best.map_or(true, |(_, b)| score.total > b.total) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(EngineError::NoLegalMove)?;
        let search_type = if board.is_board_empty() {
            SearchType::Opening
        } else if score.blocks {
            SearchType::Block
        } else {
            SearchType::Heuristic
        };

        Ok(self.finish(pos, score, search_type, scored, start))
    }

    fn finish(
        &self,
        pos: Pos,
        score: MoveScore,
        search_type: SearchType,
        candidates: usize,
        start: Instant,
    ) -> MoveResult {
        let time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(
            row = pos.row,
            col = pos.col,
            ?search_type,
            total = score.total,
            candidates,
            time_us,
            "selected move"
        );
        MoveResult {
            best_move: pos,
            score,
            search_type,
            candidates,
            time_us,
        }
    }

    /// Every candidate with its score, best first, at most `limit` entries.
    ///
    /// Equal scores keep candidate (row-major) order, so the first entry is
    /// the move [`AIEngine::select_move`] returns.
    pub fn rank_moves(&self, board: &Board, player: Player, limit: usize) -> Result<Vec<RankedMove>> {
        if board.is_full() {
            return Err(EngineError::NoLegalMove);
        }

        let mut ranked = candidates(board, self.config.radius)
            .map(|pos| {
                evaluate(board, pos, player, self.config.defense_weight)
                    .map(|score| RankedMove { pos, score })
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable sort: ties stay in candidate order
        ranked.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
        ranked.truncate(limit);
        Ok(ranked)
    }
}

/// Best move for `player` with the default configuration
pub fn select_best_move(board: &Board, player: Player) -> Result<Pos> {
    AIEngine::new().select_move(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
    use quickcheck::{quickcheck, Arbitrary, Gen};

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::default();
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_empty_board_center() {
        let engine = AIEngine::new();
        let result = engine.select_move_with_stats(&Board::default(), Player::Black).unwrap();
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.candidates, 1);

        let small = Board::new(9).unwrap();
        assert_eq!(select_best_move(&small, Player::White), Ok(Pos::new(4, 4)));
    }

    #[test]
    fn test_immediate_win_open_four() {
        let board = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        let result = AIEngine::new()
            .select_move_with_stats(&board, Player::Black)
            .unwrap();
        assert!(
            result.best_move == Pos::new(7, 3) || result.best_move == Pos::new(7, 8),
            "got {:?}",
            result.best_move
        );
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert!(result.score.wins);
    }

    #[test]
    fn test_immediate_win_first_in_row_major_order() {
        let board = board_with(&[
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
        ]);
        assert_eq!(select_best_move(&board, Player::Black), Ok(Pos::new(7, 3)));
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides have an open four; the mover should finish its own
        let board = board_with(&[
            (3, 4, Stone::White),
            (3, 5, Stone::White),
            (3, 6, Stone::White),
            (3, 7, Stone::White),
            (9, 4, Stone::Black),
            (9, 5, Stone::Black),
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let result = AIEngine::new()
            .select_move_with_stats(&board, Player::Black)
            .unwrap();
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.best_move.row, 9);
    }

    #[test]
    fn test_block_opponent_open_four() {
        let board = board_with(&[
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (10, 10, Stone::Black),
        ]);
        let result = AIEngine::new()
            .select_move_with_stats(&board, Player::Black)
            .unwrap();
        assert!(
            result.best_move == Pos::new(7, 3) || result.best_move == Pos::new(7, 8),
            "got {:?}",
            result.best_move
        );
        assert_eq!(result.search_type, SearchType::Block);
        assert!(result.score.blocks);
    }

    #[test]
    fn test_block_closed_four_single_cell() {
        let board = board_with(&[
            (7, 3, Stone::Black),
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            // Black has a strong open three elsewhere that must not win out
            (2, 2, Stone::Black),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
        ]);
        assert_eq!(select_best_move(&board, Player::Black), Ok(Pos::new(7, 8)));
    }

    #[test]
    fn test_block_with_minimum_defense_weight() {
        let board = board_with(&[
            (7, 3, Stone::Black),
            (7, 4, Stone::White),
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (2, 2, Stone::Black),
            (2, 3, Stone::Black),
            (2, 4, Stone::Black),
        ]);
        let engine = AIEngine::with_config(2, MIN_DEFENSE_WEIGHT).unwrap();
        assert_eq!(engine.select_move(&board, Player::Black), Ok(Pos::new(7, 8)));
    }

    #[test]
    fn test_tie_break_row_major() {
        // All eight neighbours of a lone stone score the same; the first wins
        let board = board_with(&[(7, 7, Stone::Black)]);
        assert_eq!(select_best_move(&board, Player::White), Ok(Pos::new(6, 6)));
    }

    #[test]
    fn test_full_board_no_legal_move() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5 {
            for c in 0..5 {
                let stone = if (r + c) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(Pos::new(r, c), stone);
            }
        }
        assert_eq!(select_best_move(&board, Player::Black), Err(EngineError::NoLegalMove));
        assert_eq!(
            AIEngine::new().rank_moves(&board, Player::White, 5),
            Err(EngineError::NoLegalMove)
        );
    }

    #[test]
    fn test_last_empty_cell() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5 {
            for c in 0..5 {
                board.place_stone(Pos::new(r, c), if r < 3 { Stone::Black } else { Stone::White });
            }
        }
        board.remove_stone(Pos::new(4, 1));
        assert_eq!(select_best_move(&board, Player::White), Ok(Pos::new(4, 1)));
    }

    #[test]
    fn test_rank_moves_matches_selection() {
        let board = board_with(&[
            (7, 7, Stone::Black),
            (7, 8, Stone::White),
            (8, 7, Stone::Black),
            (6, 9, Stone::White),
        ]);
        let engine = AIEngine::new();
        let ranked = engine.rank_moves(&board, Player::Black, 5).unwrap();
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].pos, engine.select_move(&board, Player::Black).unwrap());
        for pair in ranked.windows(2) {
            assert!(pair[0].score.total >= pair[1].score.total);
        }
    }

    #[test]
    fn test_rank_moves_limit_larger_than_candidates() {
        let board = Board::default();
        let ranked = AIEngine::new().rank_moves(&board, Player::Black, 10).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].pos, Pos::new(7, 7));
    }

    #[test]
    fn test_config_validation() {
        assert!(AIEngine::with_config(2, 0.9).is_ok());
        assert!(AIEngine::with_config(1, MIN_DEFENSE_WEIGHT).is_ok());
        assert!(matches!(AIEngine::with_config(0, 0.9), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(AIEngine::with_config(5, 0.9), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(AIEngine::with_config(2, 1.0), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(AIEngine::with_config(2, 0.05), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(AIEngine::with_config(2, f64::NAN), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"radius": 3}"#).unwrap();
        assert_eq!(config.radius, 3);
        assert_eq!(config.defense_weight, DEFAULT_DEFENSE_WEIGHT);
        assert!(serde_json::from_str::<EngineConfig>(r#"{"depth": 3}"#).is_err());
    }

    #[test]
    fn test_larger_radius_sees_more_candidates() {
        let board = board_with(&[(7, 7, Stone::Black), (8, 8, Stone::White)]);
        let narrow = AIEngine::with_config(1, 0.9)
            .unwrap()
            .select_move_with_stats(&board, Player::Black)
            .unwrap();
        let wide = AIEngine::with_config(3, 0.9)
            .unwrap()
            .select_move_with_stats(&board, Player::Black)
            .unwrap();
        assert!(wide.candidates > narrow.candidates);
    }

    /// Random position on a random legal board size
    #[derive(Debug, Clone)]
    struct RandomPosition {
        board: Board,
        player: Player,
    }

    impl Arbitrary for RandomPosition {
        fn arbitrary(g: &mut Gen) -> Self {
            let size = MIN_BOARD_SIZE + usize::arbitrary(g) % (MAX_BOARD_SIZE - MIN_BOARD_SIZE + 1);
            let mut board = Board::new(size).unwrap();
            let fill_percent = u8::arbitrary(g) % 101;
            for r in 0..size as u8 {
                for c in 0..size as u8 {
                    if u8::arbitrary(g) % 100 < fill_percent {
                        let stone = if bool::arbitrary(g) { Stone::Black } else { Stone::White };
                        board.place_stone(Pos::new(r, c), stone);
                    }
                }
            }
            let player = if bool::arbitrary(g) { Player::Black } else { Player::White };
            RandomPosition { board, player }
        }
    }

    quickcheck! {
        fn prop_deterministic(input: RandomPosition) -> bool {
            select_best_move(&input.board, input.player) == select_best_move(&input.board, input.player)
        }

        fn prop_move_is_legal(input: RandomPosition) -> bool {
            match select_best_move(&input.board, input.player) {
                Ok(pos) => {
                    usize::from(pos.row) < input.board.size()
                        && usize::from(pos.col) < input.board.size()
                        && input.board.is_empty(pos)
                }
                Err(EngineError::NoLegalMove) => input.board.is_full(),
                Err(_) => false,
            }
        }

        fn prop_board_untouched(input: RandomPosition) -> bool {
            let before = input.board;
            let _ = AIEngine::new().rank_moves(&input.board, input.player, usize::MAX);
            let _ = select_best_move(&input.board, input.player);
            input.board == before
        }

        fn prop_takes_available_win(input: RandomPosition) -> bool {
            let board = input.board;
            let Ok(pos) = select_best_move(&board, input.player) else {
                return board.is_full();
            };
            let any_win = crate::search::candidates(&board, DEFAULT_RADIUS).any(|c| {
                evaluate(&board, c, input.player, DEFAULT_DEFENSE_WEIGHT)
                    .map(|s| s.wins)
                    .unwrap_or(false)
            });
            let took_win = crate::rules::winning_line_at(
                &board.with_stone(pos, input.player).unwrap(),
                pos,
                input.player,
            )
            .is_some();
            !any_win || took_win
        }
    }
}
