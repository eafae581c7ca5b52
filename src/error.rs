//! Error type shared by the board, the scorer and the move selector

use thiserror::Error;

/// Everything that can go wrong between receiving a board and returning a move.
///
/// All variants are deterministic functions of the input: retrying the same
/// request reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board is not square, has an unsupported size, or holds unknown cell values
    #[error("invalid board shape: {0}")]
    InvalidBoardShape(String),

    /// Player value on the wire is neither 1 (black) nor 2 (white)
    #[error("invalid player {0}: expected 1 (black) or 2 (white)")]
    InvalidPlayer(u8),

    /// Coordinate outside the board
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i32, col: i32 },

    /// Tried to place a stone on an occupied cell
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// Tried to score a cell that is not empty
    #[error("cell ({row}, {col}) is not a valid candidate")]
    InvalidCell { row: u8, col: u8 },

    /// Board is full
    #[error("no legal move: the board is full")]
    NoLegalMove,

    /// Engine configuration outside its valid range
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
