//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, BoardState, Cell, Player, position_guide};
pub use game::{Game, GameOutcome, Move, play_game};
pub use lines::{WINNING_LINES, WinDetector};
