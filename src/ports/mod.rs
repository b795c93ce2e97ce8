//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The turn sequencer in [`crate::tictactoe::game`] talks only to these
//! traits; agents, human input and presentation are adapters behind them.

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::GameObserver;
