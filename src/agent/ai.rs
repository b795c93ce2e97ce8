//! Perfect-play agent driven by minimax search

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use tracing::debug;

use crate::{
    Error, Result,
    config::{AgentConfig, OpeningPolicy},
    ports::MoveSource,
    search::{MinimaxSearch, SearchStats},
    tictactoe::{BOARD_CELLS, BoardState, Player},
};

/// Agent that never loses.
///
/// On an empty board it opens on a uniformly random cell (see
/// [`OpeningPolicy::Random`]); every other position is searched in full with
/// [`MinimaxSearch`], maximizing for the agent's own mark.
#[derive(Debug)]
pub struct AiAgent {
    player: Player,
    opening: OpeningPolicy,
    rng: StdRng,
    last_search: Option<SearchStats>,
}

impl AiAgent {
    /// Create an agent for `player` with default configuration
    pub fn new(player: Player) -> Self {
        Self::from_config(AgentConfig::new(player))
    }

    pub fn from_config(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self {
            player: config.player,
            opening: config.opening,
            rng,
            last_search: None,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Statistics of the search behind the latest move; `None` if that move
    /// was a random opening or no move has been made yet
    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }

    /// Choose a move for this agent's mark.
    ///
    /// The board is searched in place and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the board already has a winner or
    /// is full.
    pub fn get_move(&mut self, state: &mut BoardState) -> Result<usize> {
        self.last_search = None;
        if state.is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let moves = state.available_moves();

        // Opening policy: an empty board is answered at random, never searched.
        if moves.len() == BOARD_CELLS && self.opening == OpeningPolicy::Random {
            let position = *moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            debug!(player = %self.player, position, "random opening, search skipped");
            return Ok(position);
        }

        let mut search = MinimaxSearch::new(self.player);
        let result = search.best_move(state, self.player);
        let stats = search.stats();
        self.last_search = Some(stats);
        debug!(
            player = %self.player,
            position = ?result.position,
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search complete"
        );

        result.position.ok_or(Error::NoValidMoves)
    }
}

impl MoveSource for AiAgent {
    fn select_move(&mut self, state: &mut BoardState, player: Player) -> Result<usize> {
        debug_assert_eq!(
            player, self.player,
            "AiAgent plays {} but was asked to move for {}",
            self.player, player
        );
        self.get_move(state)
    }

    fn name(&self) -> &str {
        "ai"
    }
}
