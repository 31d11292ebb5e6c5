use crate::game::{Board, Player};

use super::search::{choose_move, SearchOutcome, Strategy};

/// Interface a turn-orchestration collaborator drives: given the current
/// board and the side to move, pick a column. `None` only when the board
/// has no playable column.
pub trait Agent {
    fn select_action(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}

/// Agent backed by `choose_move`. Keeps the last search's telemetry around
/// for callers that report node counts.
pub struct SearchAgent {
    depth: usize,
    strategy: Strategy,
    last_outcome: Option<SearchOutcome>,
}

impl SearchAgent {
    pub fn new(depth: usize, strategy: Strategy) -> Self {
        SearchAgent {
            depth,
            strategy,
            last_outcome: None,
        }
    }

    /// Telemetry from the most recent `select_action`.
    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last_outcome
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, board: &Board, player: Player) -> Option<usize> {
        // The search mutates its board in place, so it runs on a scratch
        // copy; the caller's board is never touched.
        let mut scratch = *board;
        let outcome = choose_move(&mut scratch, self.depth, self.strategy, player);
        self.last_outcome = Some(outcome);
        outcome.column
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(SearchAgent::new(self.depth, self.strategy))
    }
}
