//! Evaluation module for Gomoku candidates
//!
//! This module provides pattern recognition and scoring for a single move.
//! The evaluation considers:
//! - Line patterns (ones, twos, threes, fours, fives) in four directions
//! - End openness (open, closed, dead)
//! - Defensive weighting of the opponent's patterns on the same cell

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    evaluate, line_patterns, offense_score, scan_line, MoveScore, DEFAULT_DEFENSE_WEIGHT,
    DIRECTIONS, MAX_DEFENSE_WEIGHT, MIN_DEFENSE_WEIGHT,
};
pub use patterns::{LinePattern, Openness, PatternKind, PatternScore};
