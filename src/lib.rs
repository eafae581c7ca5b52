//! Heuristic Gomoku move engine
//!
//! Picks a single next move for freestyle five-in-a-row from local line
//! patterns instead of a game-tree search:
//! - Square board, 15x15 by default (5x5 up to 19x19 supported)
//! - Five or more in a row wins
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board snapshot with bitboards and non-mutating simulation
//! - [`search`]: Candidate generation around existing stones
//! - [`eval`]: Line pattern classification and candidate scoring
//! - [`engine`]: Move selection (win, block, best heuristic score)
//! - [`rules`]: Win detection used by the game UI
//! - [`request`]: JSON request/response types for the `best-move` binary
//! - [`ui`]: Desktop board to play against the engine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{select_best_move, Board, Player, Pos, Stone};
//!
//! let mut board = Board::default();
//! for col in 4..8 {
//!     board.place_stone(Pos::new(7, col), Stone::Black);
//! }
//!
//! // Black completes five
//! let pos = select_best_move(&board, Player::Black).unwrap();
//! assert!(pos == Pos::new(7, 3) || pos == Pos::new(7, 8));
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block of an opponent five
//! 3. Highest `offense + k * defense` score, ties broken in row-major order

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod request;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use engine::{select_best_move, AIEngine, EngineConfig, MoveResult, RankedMove, SearchType};
pub use error::{EngineError, Result};
