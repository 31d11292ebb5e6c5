//! Adversarial search: the positional heuristic, center-out move ordering,
//! the three tree-search strategies, and the agent seam on top of them.

mod agent;
pub mod heuristic;
pub mod ordering;
mod random;
pub mod search;

pub use agent::{Agent, SearchAgent};
pub use heuristic::{Heuristic, PositionalHeuristic};
pub use ordering::ordered_moves;
pub use random::RandomAgent;
pub use search::{choose_move, choose_move_with, SearchOutcome, Strategy};
