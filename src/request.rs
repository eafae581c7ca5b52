//! JSON request boundary for the `best-move` binary
//!
//! One request per line:
//!
//! ```json
//! {"board": [[0, 0, 0, 0, 0], [0, 1, 0, 0, 0], [0, 0, 2, 0, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]], "player": 1}
//! ```
//!
//! answered by `{"move": [row, col], "message": "Success"}` or
//! `{"error": "..."}`.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Player, Pos};
use crate::engine::{AIEngine, RankedMove};
use crate::error::Result;

/// Board (0 = empty, 1 = black, 2 = white) and side to move (1 or 2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMoveRequest {
    pub board: Vec<Vec<u8>>,
    pub player: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BestMoveResponse {
    Success {
        #[serde(rename = "move")]
        best_move: [u8; 2],
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        candidates: Option<Vec<CandidateScore>>,
    },
    Failure {
        error: String,
    },
}

/// Entry of the `--explain` ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    #[serde(rename = "move")]
    pub pos: [u8; 2],
    pub score: f64,
    pub offense: i64,
    pub defense: i64,
}

impl From<RankedMove> for CandidateScore {
    fn from(ranked: RankedMove) -> Self {
        Self {
            pos: coordinate(ranked.pos),
            score: ranked.score.total,
            offense: ranked.score.offense,
            defense: ranked.score.defense,
        }
    }
}

fn coordinate(pos: Pos) -> [u8; 2] {
    [pos.row, pos.col]
}

impl BestMoveRequest {
    /// Validate the request and decode it into core types
    pub fn decode(&self) -> Result<(Board, Player)> {
        let player = Player::from_wire(self.player)?;
        let board = Board::from_rows(&self.board)?;
        Ok((board, player))
    }

    /// Run the engine; `explain` > 0 attaches the top `explain` candidates
    pub fn answer(&self, engine: &AIEngine, explain: usize) -> Result<BestMoveResponse> {
        let (board, player) = self.decode()?;
        let best = engine.select_move(&board, player)?;

        let candidates = if explain > 0 {
            let ranked = engine.rank_moves(&board, player, explain)?;
            Some(ranked.into_iter().map(CandidateScore::from).collect())
        } else {
            None
        };

        Ok(BestMoveResponse::Success {
            best_move: coordinate(best),
            message: "Success".to_string(),
            candidates,
        })
    }
}

/// Answer one raw request line. Never fails: errors become `{"error": ...}`.
pub fn respond(engine: &AIEngine, line: &str, explain: usize) -> BestMoveResponse {
    respond_bytes(engine, line.as_bytes(), explain)
}

/// Same as [`respond`] for a line that may not be valid UTF-8
pub fn respond_bytes(engine: &AIEngine, line: &[u8], explain: usize) -> BestMoveResponse {
    let request = match serde_json::from_slice::<BestMoveRequest>(line) {
        Ok(request) => request,
        Err(err) => {
            warn!(%err, "malformed request");
            return BestMoveResponse::Failure {
                error: format!("malformed request: {err}"),
            };
        }
    };

    match request.answer(engine, explain) {
        Ok(response) => response,
        Err(err) => {
            warn!(%err, "request rejected");
            BestMoveResponse::Failure {
                error: err.to_string(),
            }
        }
    }
}

/// Answer every line of `input` on `output` until EOF.
///
/// Undecodable lines get an error response and the loop goes on; only I/O
/// errors end it early.
pub fn serve<R: BufRead, W: Write>(
    engine: &AIEngine,
    mut input: R,
    mut output: W,
    explain: usize,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF
            return Ok(());
        }
        line_no += 1;

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        debug!(line_no, "request received");

        let response = respond_bytes(engine, line, explain);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
}
