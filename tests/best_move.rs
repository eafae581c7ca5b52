//! End-to-end checks through the public API and the JSON boundary.

use gomoku::request::{respond, BestMoveResponse};
use gomoku::{select_best_move, AIEngine, Board, EngineError, Player, Pos, SearchType, Stone};
use serde_json::json;

fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
    let mut board = Board::default();
    for &(row, col, stone) in stones {
        board.place_stone(Pos::new(row, col), stone);
    }
    board
}

#[test]
fn empty_board_plays_center() {
    assert_eq!(select_best_move(&Board::default(), Player::Black), Ok(Pos::new(7, 7)));
    assert_eq!(
        select_best_move(&Board::new(9).unwrap(), Player::White),
        Ok(Pos::new(4, 4))
    );
}

#[test]
fn completes_four_in_a_row() {
    let board = board_with(&[
        (7, 4, Stone::Black),
        (7, 5, Stone::Black),
        (7, 6, Stone::Black),
        (7, 7, Stone::Black),
        (8, 5, Stone::White),
        (8, 6, Stone::White),
    ]);
    let result = AIEngine::new()
        .select_move_with_stats(&board, Player::Black)
        .unwrap();
    assert!(result.best_move == Pos::new(7, 3) || result.best_move == Pos::new(7, 8));
    assert_eq!(result.search_type, SearchType::ImmediateWin);
}

#[test]
fn blocks_opponent_four() {
    let board = board_with(&[
        (3, 3, Stone::White),
        (4, 4, Stone::White),
        (5, 5, Stone::White),
        (6, 6, Stone::White),
        (2, 2, Stone::Black),
        (10, 1, Stone::Black),
    ]);
    assert_eq!(select_best_move(&board, Player::Black), Ok(Pos::new(7, 7)));
}

#[test]
fn full_board_has_no_move() {
    let mut board = Board::new(5).unwrap();
    for row in 0..5 {
        for col in 0..5 {
            let stone = if (row / 2 + col) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::new(row, col), stone);
        }
    }
    assert!(board.is_full());
    assert_eq!(select_best_move(&board, Player::Black), Err(EngineError::NoLegalMove));
}

#[test]
fn same_board_same_answer() {
    let board = board_with(&[
        (7, 7, Stone::Black),
        (7, 8, Stone::White),
        (8, 8, Stone::Black),
        (6, 6, Stone::White),
        (9, 9, Stone::Black),
    ]);
    let first = select_best_move(&board, Player::White).unwrap();
    for _ in 0..5 {
        assert_eq!(select_best_move(&board, Player::White), Ok(first));
    }
    assert!(board.is_empty(first));
}

#[test]
fn json_round_trip_through_respond() {
    let mut rows = vec![vec![0u8; 15]; 15];
    for col in 4..8 {
        rows[7][col] = 2;
    }
    rows[0][0] = 1;
    let line = json!({ "board": rows, "player": 2 }).to_string();

    match respond(&AIEngine::new(), &line, 3) {
        BestMoveResponse::Success { best_move, message, candidates } => {
            assert!(best_move == [7, 3] || best_move == [7, 8]);
            assert_eq!(message, "Success");
            assert_eq!(candidates.map(|c| c.len()), Some(3));
        }
        BestMoveResponse::Failure { error } => panic!("unexpected failure: {error}"),
    }
}

#[test]
fn json_errors_are_reported() {
    let engine = AIEngine::new();
    let bad_player = json!({ "board": vec![vec![0u8; 15]; 15], "player": 3 }).to_string();
    assert!(matches!(
        respond(&engine, &bad_player, 0),
        BestMoveResponse::Failure { .. }
    ));
    assert!(matches!(
        respond(&engine, "not json", 0),
        BestMoveResponse::Failure { .. }
    ));
}
