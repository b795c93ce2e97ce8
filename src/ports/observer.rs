//! Observer port - watches games as the turn sequencer plays them
//!
//! Observers let front ends render boards, drive progress bars or collect
//! tallies without the sequencer knowing about any of them.

use crate::{
    Result,
    tictactoe::{BoardState, GameOutcome, Move},
};

/// Observer trait for monitoring games
///
/// # Event Sequence
///
/// 1. `on_game_start(board)` - before the first move
/// 2. `on_move(board, mv)` - after each applied move
/// 3. `on_game_end(board, outcome)` - once a win or draw is reached
///
/// Every method defaults to doing nothing.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::GameObserver,
///     tictactoe::{BoardState, GameOutcome},
/// };
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl GameObserver for DrawCounter {
///     fn on_game_end(&mut self, _board: &BoardState, outcome: GameOutcome) -> noughts::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called with the starting board before any move is requested.
    fn on_game_start(&mut self, _board: &BoardState) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been applied to `board`.
    fn on_move(&mut self, _board: &BoardState, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called once with the final board and outcome.
    fn on_game_end(&mut self, _board: &BoardState, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
pub struct NullObserver;

impl GameObserver for NullObserver {}
