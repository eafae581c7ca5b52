//! GUI module for the Gomoku game
//!
//! Play against the heuristic engine, or hotseat, using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameResult, GameState};
