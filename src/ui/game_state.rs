//! Game state management for the Gomoku GUI

use crate::rules::{is_valid_move, winning_line_at};
use crate::{AIEngine, Board, EngineError, MoveResult, Player, Pos, RankedMove};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Number of candidates shown when a hint is requested
const HINT_COUNT: usize = 5;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw on a full board
    pub winner: Option<Player>,
    pub winning_line: Vec<Pos>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    /// Ranked candidates from the last hint request, best first
    pub hints: Vec<RankedMove>,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::default(),
            mode,
            current_turn: Player::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            hints: Vec::new(),
            message: None,
            engine: AIEngine::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self {
            engine: self.engine,
            ..Self::new(self.mode)
        };
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_valid_move(&self.board, pos) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board.place_stone(pos, color.stone());
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.hints.clear();
        self.move_timer.stop();

        if let Some(result) = self.check_result(pos, color) {
            self.game_over = Some(result);
            return;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        self.message = None;
    }

    /// Win through the last move, or draw on a full board
    fn check_result(&self, pos: Pos, color: Player) -> Option<GameResult> {
        if let Some(line) = winning_line_at(&self.board, pos, color) {
            return Some(GameResult {
                winner: Some(color),
                winning_line: line,
            });
        }

        if self.board.is_full() {
            return Some(GameResult {
                winner: None,
                winning_line: Vec::new(),
            });
        }

        None
    }

    /// Start AI thinking on a worker thread with its own board copy
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let color = self.current_turn;
        let engine = self.engine;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.select_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match move_result {
                Ok(move_result) => {
                    self.last_ai_result = Some(move_result);
                    self.execute_move(move_result.best_move);
                }
                Err(err) => self.message = Some(format!("AI could not move: {err}")),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Rank the best candidates for the side to move
    pub fn request_hints(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        match self
            .engine
            .rank_moves(&self.board, self.current_turn, HINT_COUNT)
        {
            Ok(hints) => self.hints = hints,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        for _ in 0..undo_count {
            if let Some((pos, color)) = self.move_history.pop() {
                self.board.remove_stone(pos);
                self.current_turn = color;
            }
        }

        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.hints.clear();
        self.move_timer.start();
    }
}
