//! Subcommands of the noughts binary

pub mod analyze;
pub mod play;
pub mod selfplay;
