//! Move source port - anything that can pick the next move for one side

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// Supplies moves to the turn sequencer.
///
/// Implemented by the AI agent, the random baseline, and by interactive
/// front ends that read moves from a person.
///
/// The board is passed mutably so that searching sources can explore it in
/// place. Implementations must hand it back exactly as they received it.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::MoveSource,
///     tictactoe::{BoardState, Player},
/// };
///
/// struct FirstFree;
///
/// impl MoveSource for FirstFree {
///     fn select_move(&mut self, state: &mut BoardState, _player: Player) -> noughts::Result<usize> {
///         state
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait MoveSource {
    /// Select a move (0-8) for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is
    /// terminal or the underlying input failed.
    fn select_move(&mut self, state: &mut BoardState, player: Player) -> Result<usize>;

    /// Display name of this source
    fn name(&self) -> &str;
}
