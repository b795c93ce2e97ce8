//! Common test utilities for the noughts test suite.
//!
//! Provides random legal positions reached by alternating play from the
//! empty board.

#![allow(dead_code)]

use noughts::tictactoe::{BoardState, Player};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

/// A position reached by legal play, with the moves that produced it
pub struct Sample {
    pub board: BoardState,
    pub to_move: Player,
    pub history: Vec<(usize, Player)>,
}

/// Play up to `plies` random legal moves from the empty board, X first.
///
/// Stops early if the game ends, so the last move may be a winning one.
pub fn random_position(rng: &mut StdRng, plies: usize) -> Sample {
    let mut board = BoardState::new();
    let mut to_move = Player::X;
    let mut history = Vec::with_capacity(plies);

    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = board.available_moves();
        let &position = moves.choose(rng).expect("non-terminal board has moves");
        board
            .apply_move(position, to_move)
            .expect("available move is legal");
        history.push((position, to_move));
        to_move = to_move.opponent();
    }

    Sample {
        board,
        to_move,
        history,
    }
}

/// Random non-terminal positions with between `min_plies` and `max_plies` moves
pub fn open_positions(seed: u64, count: usize, min_plies: usize, max_plies: usize) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(count);
    while samples.len() < count {
        let plies = rand::Rng::random_range(&mut rng, min_plies..=max_plies);
        let sample = random_position(&mut rng, plies);
        if !sample.board.is_terminal() {
            samples.push(sample);
        }
    }
    samples
}
