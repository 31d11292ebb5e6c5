use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the valid columns.
/// Baseline opponent for exercising the search agents.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, _player: Player) -> Option<usize> {
        let moves = board.valid_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent::new())
    }
}
