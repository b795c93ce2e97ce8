//! Minimax with alpha-beta pruning over a single shared board
//!
//! The search never copies the board. Each candidate move is applied,
//! searched and reverted in strict nesting, so the caller gets its board back
//! exactly as it was handed in.
//!
//! Scores are from the point of view of the maximizing player. A win is worth
//! `empty cells remaining + 1`, so earlier wins score higher and later losses
//! score closer to zero. Draws score 0.
//!
//! There is no transposition table: at 3x3 the pruned tree is small enough
//! to walk in full on every call.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Player};

/// Initial alpha for a root call
pub const NEG_INFINITY: i32 = i32::MIN;
/// Initial beta for a root call
pub const INFINITY: i32 = i32::MAX;

/// Value of a searched position, plus the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Move chosen at the node that produced this result; `None` for
    /// terminal positions
    pub position: Option<usize>,
    pub score: i32,
}

/// Counters gathered during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Sibling loops abandoned because `alpha >= beta`
    pub cutoffs: u64,
}

/// Whether sibling exploration may stop early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pruning {
    AlphaBeta,
    /// Visit every node; used as a reference for the pruned search
    Disabled,
}

/// Depth-first minimax search for one maximizing player
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    maximizing: Player,
    pruning: Pruning,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Alpha-beta search maximizing for `maximizing`
    pub fn new(maximizing: Player) -> Self {
        Self::with_pruning(maximizing, Pruning::AlphaBeta)
    }

    /// Search that visits the full tree
    pub fn exhaustive(maximizing: Player) -> Self {
        Self::with_pruning(maximizing, Pruning::Disabled)
    }

    pub fn with_pruning(maximizing: Player, pruning: Pruning) -> Self {
        Self {
            maximizing,
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn maximizing(&self) -> Player {
        self.maximizing
    }

    /// Counters accumulated since construction
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search from the root with the full `(-inf, +inf)` window
    pub fn best_move(&mut self, state: &mut BoardState, to_move: Player) -> SearchResult {
        self.evaluate(state, to_move, NEG_INFINITY, INFINITY)
    }

    /// Evaluate `state` with `to_move` about to play.
    ///
    /// Moves are tried in ascending index order. The maximizer only replaces
    /// its best on a strictly greater score and the minimizer only on a
    /// strictly smaller one, so among equal scores the lowest index wins.
    pub fn evaluate(
        &mut self,
        state: &mut BoardState,
        to_move: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score(state) {
            return SearchResult {
                position: None,
                score,
            };
        }

        let maximizing_turn = to_move == self.maximizing;
        let mut best = SearchResult {
            position: None,
            score: if maximizing_turn {
                NEG_INFINITY
            } else {
                INFINITY
            },
        };

        for mv in state.available_moves() {
            let Ok(()) = state.apply_move(mv, to_move) else {
                continue;
            };
            let mut child = self.evaluate(state, to_move.opponent(), alpha, beta);
            state.revert_move(mv);
            child.position = Some(mv);

            if maximizing_turn {
                if child.score > best.score {
                    best = child;
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = child;
                }
                beta = beta.min(best.score);
            }

            if self.pruning == Pruning::AlphaBeta && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Score of a finished position, `None` if play continues
    fn terminal_score(&self, state: &BoardState) -> Option<i32> {
        if let Some(winner) = state.winner() {
            let magnitude = state.empty_count() as i32 + 1;
            return Some(if winner == self.maximizing {
                magnitude
            } else {
                -magnitude
            });
        }

        if state.is_full() { Some(0) } else { None }
    }
}

/// Alpha-beta evaluation of `state` for `maximizing`, `to_move` to play
pub fn evaluate(
    state: &mut BoardState,
    to_move: Player,
    maximizing: Player,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    MinimaxSearch::new(maximizing).evaluate(state, to_move, alpha, beta)
}

/// Full-tree evaluation with the same move order and tie-break as [`evaluate`]
pub fn evaluate_exhaustive(
    state: &mut BoardState,
    to_move: Player,
    maximizing: Player,
) -> SearchResult {
    MinimaxSearch::exhaustive(maximizing).best_move(state, to_move)
}
