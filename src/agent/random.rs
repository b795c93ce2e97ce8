//! Random policy baseline

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::MoveSource,
    tictactoe::{BoardState, Player},
};

/// Plays a uniformly random empty cell
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomAgent {
    fn select_move(&mut self, state: &mut BoardState, _player: Player) -> Result<usize> {
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        state
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "random"
    }
}
