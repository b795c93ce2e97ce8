//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// How the agent picks its move on an empty board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpeningPolicy {
    /// Pick uniformly among all nine cells without searching. Every opening
    /// draws under perfect defence, so a full 9-ply search adds nothing.
    #[default]
    Random,
    /// Run the regular search on the empty board as well
    Search,
}

/// Configuration for creating an [`AiAgent`](crate::agent::AiAgent).
///
/// # Examples
///
/// ```
/// use noughts::config::{AgentConfig, OpeningPolicy};
/// use noughts::tictactoe::Player;
///
/// let config = AgentConfig::new(Player::O)
///     .with_seed(42)
///     .with_opening(OpeningPolicy::Random);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Mark the agent plays and maximizes for
    pub player: Player,
    /// Random seed for reproducible openings
    pub seed: Option<u64>,
    /// Empty-board behaviour
    pub opening: OpeningPolicy,
}

impl AgentConfig {
    /// Create a configuration for `player` with a random opening and no seed
    pub fn new(player: Player) -> Self {
        Self {
            player,
            seed: None,
            opening: OpeningPolicy::default(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opening(mut self, opening: OpeningPolicy) -> Self {
        self.opening = opening;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(Player::O)
    }
}
