//! Board snapshot with non-mutating simulation

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Square game board.
///
/// The board is a small `Copy` value: scoring a candidate works on its own
/// copy produced by [`Board::with_stone`], so no simulated stone can leak into
/// the snapshot seen by the next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board of the given size
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(EngineError::InvalidBoardShape(format!(
                "board size {size} is outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )));
        }
        Ok(Self {
            size: size as u8,
            black: Bitboard::new(),
            white: Bitboard::new(),
        })
    }

    /// Build a board from wire rows (0 = empty, 1 = black, 2 = white)
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let size = rows.len();
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(EngineError::InvalidBoardShape(format!(
                "row {r} has {} cells, expected {size}",
                row.len()
            )));
        }

        let mut board = Self::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let stone = Stone::from_wire(value).ok_or_else(|| {
                    EngineError::InvalidBoardShape(format!(
                        "cell ({r}, {c}) holds {value}, expected 0, 1 or 2"
                    ))
                })?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        usize::from(self.size)
    }

    /// Center cell (N/2, N/2)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = i32::from(self.size);
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Position for signed coordinates, `None` if off-board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if self.contains(row, col) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pos = Pos::new(row as u8, col as u8);
            Some(pos)
        } else {
            None
        }
    }

    #[inline]
    fn check(&self, pos: Pos) -> Result<usize> {
        if pos.row < self.size && pos.col < self.size {
            Ok(pos.to_index(self.size()))
        } else {
            Err(EngineError::OutOfBounds {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
            })
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<Stone> {
        let idx = self.check(pos)?;
        Ok(self.stone_at(idx))
    }

    #[inline]
    fn stone_at(&self, idx: usize) -> Stone {
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Ok(Stone::Empty))
    }

    /// Copy of this board with `player`'s stone at `pos`; `self` is untouched
    pub fn with_stone(&self, pos: Pos, player: Player) -> Result<Board> {
        let idx = self.check(pos)?;
        if self.stone_at(idx) != Stone::Empty {
            return Err(EngineError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        let mut next = *self;
        next.stones_mut(player).set(idx);
        Ok(next)
    }

    /// Place a stone in place, replacing whatever was there.
    /// Off-board positions are ignored.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let Ok(idx) = self.check(pos) else {
            return;
        };
        self.black.clear(idx);
        self.white.clear(idx);
        if let Some(player) = stone.player() {
            self.stones_mut(player).set(idx);
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Every occupied cell
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size() * self.size()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE as u8,
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }
}
