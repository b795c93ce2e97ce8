//! Board mutation and win detection through the public API

use noughts::{
    Error, InvalidMoveReason,
    tictactoe::{BoardState, Player, WINNING_LINES, WinDetector},
};
use rand::{SeedableRng, rngs::StdRng};

mod common;

#[test]
fn test_apply_then_revert_restores_empty_board() {
    let mut rng = StdRng::seed_from_u64(17);
    for plies in 0..=9 {
        let sample = common::random_position(&mut rng, plies);
        let mut board = sample.board.clone();

        for &(position, _) in sample.history.iter().rev() {
            board.revert_move(position);
        }

        assert_eq!(board, BoardState::new(), "history: {:?}", sample.history);
    }
}

#[test]
fn test_every_line_is_detected_from_each_of_its_cells() {
    for line in WINNING_LINES {
        for (order, &last) in line.iter().enumerate() {
            let mut board = BoardState::new();
            for (i, &pos) in line.iter().enumerate() {
                if i != order {
                    board.apply_move(pos, Player::O).unwrap();
                }
            }
            assert_eq!(board.winner(), None);

            board.apply_move(last, Player::O).unwrap();
            assert_eq!(board.winner(), Some(Player::O), "line {line:?}");
            assert!(WinDetector::has_won(board.cells(), Player::O));
        }
    }
}

#[test]
fn test_top_row_completes_on_last_cell() {
    let mut board = BoardState::new();
    board.apply_move(0, Player::X).unwrap();
    board.apply_move(1, Player::X).unwrap();
    board.apply_move(2, Player::X).unwrap();

    assert_eq!(board.winner(), Some(Player::X));
    assert!(board.is_terminal());
}

#[test]
fn test_illegal_moves_leave_board_unchanged() {
    let mut board = BoardState::new();
    board.apply_move(4, Player::X).unwrap();
    let before = board.clone();

    let occupied = board.apply_move(4, Player::O).unwrap_err();
    assert!(matches!(
        occupied,
        Error::InvalidMove {
            position: 4,
            reason: InvalidMoveReason::Occupied
        }
    ));

    let out_of_range = board.apply_move(9, Player::O).unwrap_err();
    assert!(out_of_range.is_invalid_move());

    assert_eq!(board, before);
}

#[test]
fn test_revert_clears_winner() {
    let mut board = BoardState::from_string("XX. OO. ...").unwrap();
    board.apply_move(2, Player::X).unwrap();
    assert_eq!(board.winner(), Some(Player::X));

    board.revert_move(2);

    assert_eq!(board.winner(), None);
    assert_eq!(board.available_moves(), vec![2, 5, 6, 7, 8]);
}
