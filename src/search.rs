//! Adversarial game-tree search

pub mod minimax;

pub use minimax::{
    INFINITY, MinimaxSearch, NEG_INFINITY, Pruning, SearchResult, SearchStats, evaluate,
    evaluate_exhaustive,
};
