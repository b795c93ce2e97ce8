//! Move-selection agents

pub mod ai;
pub mod random;

pub use ai::AiAgent;
pub use random::RandomAgent;
