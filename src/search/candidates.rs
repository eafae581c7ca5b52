//! Candidate move generation
//!
//! Only empty cells within a small Chebyshev radius of an existing stone are
//! worth scoring. This keeps the candidate count at O(stones x radius^2)
//! instead of O(N^2).

use crate::board::{Bitboard, Board, BitboardIter, Pos};

/// Default neighbourhood radius around existing stones
pub const DEFAULT_RADIUS: u8 = 2;

/// Row-major, deduplicated sequence of candidate cells.
///
/// The same board always yields the same sequence: call [`candidates`] again
/// or clone the iterator before consuming it.
#[derive(Debug, Clone)]
pub struct Candidates {
    inner: CandidatesInner,
    size: usize,
}

#[derive(Debug, Clone)]
enum CandidatesInner {
    /// Empty board: the center only
    Center(Option<Pos>),
    Near(BitboardIter),
}

impl Iterator for Candidates {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        match &mut self.inner {
            CandidatesInner::Center(center) => center.take(),
            CandidatesInner::Near(iter) => iter.next().map(|idx| Pos::from_index(idx, self.size)),
        }
    }
}

/// Candidate cells for the next move on `board`.
///
/// - empty board: the center cell only
/// - otherwise: every empty cell at Chebyshev distance <= `radius` from a stone,
///   in row-major order
pub fn candidates(board: &Board, radius: u8) -> Candidates {
    let size = board.size();
    if board.is_board_empty() {
        return Candidates {
            inner: CandidatesInner::Center(Some(board.center())),
            size,
        };
    }

    let occupied = board.occupied();
    let near = neighbourhood(board, &occupied, i32::from(radius));

    Candidates {
        inner: CandidatesInner::Near(near.difference(&occupied).iter_ones()),
        size,
    }
}

/// Mark every on-board cell within `radius` of an occupied cell
fn neighbourhood(board: &Board, occupied: &Bitboard, radius: i32) -> Bitboard {
    let size = board.size();
    let mut near = Bitboard::new();

    for idx in occupied.iter_ones() {
        let pos = Pos::from_index(idx, size);
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(p) = board.pos_at(i32::from(pos.row) + dr, i32::from(pos.col) + dc) {
                    near.set(p.to_index(size));
                }
            }
        }
    }

    near
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_empty_board_center_only() {
        let board = Board::default();
        let moves: Vec<Pos> = candidates(&board, DEFAULT_RADIUS).collect();
        assert_eq!(moves, vec![Pos::new(7, 7)]);

        let small = Board::new(6).unwrap();
        let moves: Vec<Pos> = candidates(&small, DEFAULT_RADIUS).collect();
        assert_eq!(moves, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_single_stone_radius() {
        let mut board = Board::default();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves: Vec<Pos> = candidates(&board, 2).collect();
        // 5x5 square minus the stone itself
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(7, 7)));
        for m in &moves {
            assert!(m.chebyshev(Pos::new(7, 7)) <= 2, "{m:?} is too far");
        }

        let moves: Vec<Pos> = candidates(&board, 1).collect();
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_row_major_and_deduplicated() {
        let mut board = Board::default();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 7), Stone::Black);

        let moves: Vec<Pos> = candidates(&board, 2).collect();
        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(moves, sorted, "candidates must be strictly row-major");
    }

    #[test]
    fn test_corner_clipped_to_board() {
        let mut board = Board::default();
        board.place_stone(Pos::new(0, 0), Stone::White);

        let moves: Vec<Pos> = candidates(&board, 2).collect();
        // 3x3 on-board square minus the stone
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.first(), Some(&Pos::new(0, 1)));
        assert_eq!(moves.last(), Some(&Pos::new(2, 2)));
    }

    #[test]
    fn test_only_empty_cells() {
        let mut board = Board::new(5).unwrap();
        for c in 0..5 {
            board.place_stone(Pos::new(2, c), Stone::Black);
        }
        for m in candidates(&board, 2) {
            assert!(board.is_empty(m));
        }
        assert_eq!(candidates(&board, 2).count(), 20);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new(5).unwrap();
        for r in 0..5 {
            for c in 0..5 {
                board.place_stone(Pos::new(r, c), Stone::White);
            }
        }
        assert_eq!(candidates(&board, 2).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let mut board = Board::default();
        board.place_stone(Pos::new(3, 9), Stone::Black);
        board.place_stone(Pos::new(10, 2), Stone::White);

        let first: Vec<Pos> = candidates(&board, 2).collect();
        let second: Vec<Pos> = candidates(&board, 2).collect();
        assert_eq!(first, second);

        let iter = candidates(&board, 2);
        let cloned: Vec<Pos> = iter.clone().collect();
        assert_eq!(cloned, iter.collect::<Vec<_>>());
    }
}
