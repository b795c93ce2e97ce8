//! Shared configuration types for CLI commands

use anyhow::{Result, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Options shared across commands
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonArgs {
    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Seed for the `index`-th agent of a run, if a base seed was given
    pub fn derived_seed(&self, index: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index))
    }
}

/// Parse a player token such as `x`, `o`, `first` or `second`
pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "p1" => Ok(Player::X),
        "o" | "second" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--human").unwrap(), Player::X);
        assert_eq!(parse_player_token(" second ", "--human").unwrap(), Player::O);

        let err = parse_player_token("z", "--human").unwrap_err();
        assert!(err.to_string().contains("--human"));
    }

    #[test]
    fn test_derived_seed() {
        let args = CommonArgs { seed: Some(10) };
        assert_eq!(args.derived_seed(3), Some(13));
        assert_eq!(CommonArgs::default().derived_seed(3), None);
    }
}
