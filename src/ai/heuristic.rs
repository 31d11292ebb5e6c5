use crate::game::{Board, Cell, Player, CENTER_COL, COLS, DIRECTIONS, ROWS};

/// Trait for evaluating a board position from a player's perspective.
/// Larger scores favor `player`.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Default heuristic: center-column control plus a per-cell directional scan
/// for completed fours and open threes.
///
/// The open-three weights are asymmetric (+5 for the engine's own, -50 for
/// the opponent's), which makes the search block threats more aggressively
/// than it builds its own. Keep the asymmetry; the engine is tuned around it.
pub struct PositionalHeuristic;

const CENTER_WEIGHT: f64 = 3.0;
const FOUR_BONUS: f64 = 100.0;
const OWN_THREE_BONUS: f64 = 5.0;
const OPP_THREE_PENALTY: f64 = 50.0;

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        let mut score = 0.0;

        // Center column control
        for row in 0..ROWS {
            match board.get(row, CENTER_COL) {
                c if c == own => score += CENTER_WEIGHT,
                c if c == opp => score -= CENTER_WEIGHT,
                _ => {}
            }
        }

        // Every occupied cell is a potential start of a run in each of the
        // four scan directions. A completed four dominates its window; only
        // if it is absent does the open-three bonus apply.
        for row in 0..ROWS {
            for col in 0..COLS {
                match board.get(row, col) {
                    c if c == own => {
                        for (drow, dcol) in DIRECTIONS {
                            if board.line_of_four(row, col, drow, dcol, own) {
                                score += FOUR_BONUS;
                            } else if board.has_open_three(row, col, drow, dcol, own) {
                                score += OWN_THREE_BONUS;
                            }
                        }
                    }
                    c if c == opp => {
                        for (drow, dcol) in DIRECTIONS {
                            if board.line_of_four(row, col, drow, dcol, opp) {
                                score -= FOUR_BONUS;
                            } else if board.has_open_three(row, col, drow, dcol, opp) {
                                score -= OPP_THREE_PENALTY;
                            }
                        }
                    }
                    Cell::Empty => {}
                    _ => unreachable!(),
                }
            }
        }

        score
    }
}
