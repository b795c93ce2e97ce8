//! Tic-tac-toe engine with a perfect-play agent
//!
//! This crate provides:
//! - A 3x3 board with in-place apply/revert moves and incremental win detection
//! - Minimax search with alpha-beta pruning over a single shared board
//! - An agent that opens at random and plays perfectly afterwards
//! - A turn sequencer with pluggable move sources and observers
//! - A command-line front end (`noughts` binary)

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod observers;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use agent::{AiAgent, RandomAgent};
pub use config::{AgentConfig, OpeningPolicy};
pub use error::{Error, InvalidMoveReason, Result};
pub use search::{MinimaxSearch, SearchResult, SearchStats};
pub use tictactoe::{BoardState, Cell, GameOutcome, Player};
