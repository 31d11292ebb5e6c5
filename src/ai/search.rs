use log::trace;

use crate::game::{Board, Player, COLS};

use super::heuristic::{Heuristic, PositionalHeuristic};
use super::ordering::ordered_moves;

/// The three interchangeable tree-search algorithms. A closed set: there is
/// no open extensibility here, callers pick one and the engine dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    #[serde(rename = "alphabeta")]
    AlphaBeta,
    ExpectedMinimax,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::ExpectedMinimax => "expected_minimax",
        }
    }
}

/// Result of one search invocation. `column` is `None` only when the root
/// itself was terminal (depth 0 or a full board).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    pub column: Option<usize>,
    /// Every strategy call across the recursion, leaves included.
    pub nodes_expanded: u64,
}

/// Pick a move for `player` on `board`, searching `depth` plies with the
/// given strategy and the default positional heuristic.
///
/// The board is mutated in place while the tree is explored. Every `place`
/// is paired with an `undo` on all return paths, so it is restored exactly
/// before this returns. Because of that in-place sharing, at most one search
/// may run against a given board at a time; callers wanting parallel
/// searches must clone the board per search.
pub fn choose_move(board: &mut Board, depth: usize, strategy: Strategy, player: Player) -> SearchOutcome {
    choose_move_with(board, depth, strategy, player, &PositionalHeuristic)
}

/// `choose_move` with a caller-supplied heuristic.
pub fn choose_move_with(
    board: &mut Board,
    depth: usize,
    strategy: Strategy,
    player: Player,
    heuristic: &dyn Heuristic,
) -> SearchOutcome {
    let mut search = Search {
        player,
        heuristic,
        nodes: 0,
    };
    let (score, column) = match strategy {
        Strategy::Minimax => search.minimax(board, depth, true),
        Strategy::AlphaBeta => {
            search.alphabeta(board, depth, true, f64::NEG_INFINITY, f64::INFINITY)
        }
        Strategy::ExpectedMinimax => search.expected_minimax(board, depth, true),
    };
    SearchOutcome {
        score,
        column,
        nodes_expanded: search.nodes,
    }
}

/// One search invocation. Owns the node counter; the board is threaded
/// through the recursion by mutable reference.
struct Search<'h> {
    /// The engine's own side. Leaves are always evaluated from this
    /// perspective, whichever side is to move.
    player: Player,
    heuristic: &'h dyn Heuristic,
    nodes: u64,
}

/// Disc slip model for the expectation-weighted strategy: the chosen column
/// with probability 0.6, each neighbor with 0.2. Infeasible landings are
/// skipped, their mass is not redistributed.
const SLIP_OUTCOMES: [(i64, f64); 3] = [(0, 0.6), (-1, 0.2), (1, 0.2)];

impl Search<'_> {
    fn leaf(&self, board: &Board) -> f64 {
        self.heuristic.evaluate(board, self.player)
    }

    fn side_to_move(&self, maximizing: bool) -> Player {
        if maximizing {
            self.player
        } else {
            self.player.other()
        }
    }

    /// Plain minimax. Strict comparisons, so the first move in center-out
    /// order wins ties.
    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool) -> (f64, Option<usize>) {
        self.nodes += 1;
        if depth == 0 || board.is_full() {
            return (self.leaf(board), None);
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            // Cannot happen after the is_full check; treat as terminal anyway
            return (self.leaf(board), None);
        }
        trace!(
            "{} minimax node, depth {depth}, {} moves",
            if maximizing { "max" } else { "min" },
            moves.len()
        );

        let symbol = self.side_to_move(maximizing).to_cell();
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &col in &moves {
            board.place(col, symbol);
            let (score, _) = self.minimax(board, depth - 1, !maximizing);
            board.undo(col);

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(col);
            }
        }

        (best_score, best_move)
    }

    /// Minimax with alpha-beta pruning. Same traversal and tie-breaking as
    /// `minimax`, so the root `(score, column)` is identical; it only stops
    /// expanding siblings once `beta <= alpha`. The prune sits after the
    /// undo, so the board is restored on short-circuit exits too.
    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<usize>) {
        self.nodes += 1;
        if depth == 0 || board.is_full() {
            return (self.leaf(board), None);
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            return (self.leaf(board), None);
        }
        trace!(
            "{} alphabeta node, depth {depth}, window [{alpha}, {beta}]",
            if maximizing { "max" } else { "min" }
        );

        let symbol = self.side_to_move(maximizing).to_cell();
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &col in &moves {
            board.place(col, symbol);
            let (score, _) = self.alphabeta(board, depth - 1, !maximizing, alpha, beta);
            board.undo(col);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                trace!("pruned after column {col} at depth {depth}");
                break;
            }
        }

        (best_score, best_move)
    }

    /// Expectation-weighted minimax: each candidate column's disc may slip
    /// to a neighbor, so its value is the probability-weighted sum over the
    /// feasible landing columns. Off-board or full landings are skipped and
    /// their mass is not redistributed. Each sampled landing is
    /// explored with plain minimax; the expectation branching happens only
    /// at this level.
    fn expected_minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
    ) -> (f64, Option<usize>) {
        self.nodes += 1;
        if depth == 0 || board.is_full() {
            return (self.leaf(board), None);
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            return (self.leaf(board), None);
        }
        trace!(
            "{} expected node, depth {depth}, {} candidates",
            if maximizing { "max" } else { "min" },
            moves.len()
        );

        let symbol = self.side_to_move(maximizing).to_cell();
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &col in &moves {
            let mut expected = 0.0;
            for (offset, prob) in SLIP_OUTCOMES {
                let target = col as i64 + offset;
                if target < 0 || target >= COLS as i64 {
                    continue;
                }
                let target = target as usize;
                if board.is_column_full(target) {
                    continue;
                }

                board.place(target, symbol);
                let (score, _) = self.minimax(board, depth - 1, !maximizing);
                board.undo(target);
                expected += prob * score;
            }

            let better = if maximizing {
                expected > best_score
            } else {
                expected < best_score
            };
            if better {
                best_score = expected;
                best_move = Some(col);
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    /// Replay alternating moves, Red first.
    fn replay(moves: &[usize]) -> Board {
        let mut board = Board::new();
        let mut player = Player::Red;
        for &col in moves {
            board.place(col, player.to_cell()).expect("replay move must be valid");
            player = player.other();
        }
        board
    }

    #[test]
    fn depth_one_on_empty_board_takes_center() {
        // Only the center-control bonus differentiates the columns
        let mut board = Board::new();
        let outcome = choose_move(&mut board, 1, Strategy::Minimax, Player::Red);
        assert_eq!(outcome.column, Some(3));
        assert_eq!(outcome.score, 3.0);
    }

    #[test]
    fn terminal_root_returns_no_column() {
        let mut board = Board::new();
        let outcome = choose_move(&mut board, 0, Strategy::Minimax, Player::Red);
        assert_eq!(outcome.column, None);
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.nodes_expanded, 1);

        let mut full = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                full.place(col, if col % 2 == 0 { Cell::Red } else { Cell::Yellow });
            }
        }
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta, Strategy::ExpectedMinimax] {
            let outcome = choose_move(&mut full, 4, strategy, Player::Red);
            assert_eq!(outcome.column, None, "{} on a full board", strategy.name());
            assert_eq!(outcome.nodes_expanded, 1);
        }
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = replay(&[3, 3, 2, 4, 1]);
        let before = board;
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta, Strategy::ExpectedMinimax] {
            choose_move(&mut board, 4, strategy, Player::Yellow);
            assert_eq!(board, before, "{} left the board mutated", strategy.name());
        }
    }

    #[test]
    fn alphabeta_matches_minimax_with_fewer_nodes() {
        let positions: [&[usize]; 4] = [
            &[],
            &[3, 3, 2],
            &[3, 2, 4, 4, 1, 5],
            &[0, 6, 3, 3, 2, 2, 4],
        ];
        for moves in positions {
            let mut board = replay(moves);
            let player = if moves.len() % 2 == 0 { Player::Red } else { Player::Yellow };
            for depth in 1..=4 {
                let plain = choose_move(&mut board, depth, Strategy::Minimax, player);
                let pruned = choose_move(&mut board, depth, Strategy::AlphaBeta, player);
                assert_eq!(plain.score, pruned.score, "score diverged at depth {depth} after {moves:?}");
                assert_eq!(plain.column, pruned.column, "column diverged at depth {depth} after {moves:?}");
                assert!(
                    pruned.nodes_expanded <= plain.nodes_expanded,
                    "alpha-beta expanded more nodes ({} > {}) at depth {depth} after {moves:?}",
                    pruned.nodes_expanded,
                    plain.nodes_expanded
                );
            }
        }
    }

    #[test]
    fn node_count_grows_with_depth() {
        let mut board = Board::new();
        let shallow = choose_move(&mut board, 1, Strategy::Minimax, Player::Red);
        let deep = choose_move(&mut board, 3, Strategy::Minimax, Player::Red);
        // Depth 1: root + 7 leaves
        assert_eq!(shallow.nodes_expanded, 8);
        assert!(deep.nodes_expanded > shallow.nodes_expanded);
    }

    #[test]
    fn takes_winning_column_at_depth_two() {
        // Red: columns 0,1,2 on the bottom row; Yellow scattered without a
        // one-move four of its own. Column 3 completes Red's four.
        let mut board = replay(&[0, 6, 1, 6, 2, 5]);
        let outcome = choose_move(&mut board, 2, Strategy::AlphaBeta, Player::Red);
        assert_eq!(outcome.column, Some(3));
        assert!(
            outcome.score >= 50.0,
            "score should reflect the +100 completed-four bonus, got {}",
            outcome.score
        );
    }

    #[test]
    fn blocks_opponent_threat() {
        // Yellow threatens columns 0,1,2 on the bottom row; Red must block
        // at column 3 or the minimizing reply completes the four.
        let mut board = replay(&[6, 0, 6, 1, 5, 2]);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let outcome = choose_move(&mut board, 2, strategy, Player::Red);
            assert_eq!(outcome.column, Some(3), "{} failed to block", strategy.name());
        }
    }

    #[test]
    fn expected_minimax_skips_infeasible_slips() {
        // Everything but column 3 is full: the only candidate is 3 and both
        // of its neighbors are infeasible, so the expected score is exactly
        // 0.6 times the evaluation of the single reachable outcome.
        let mut board = Board::new();
        for col in 0..COLS {
            if col == 3 {
                continue;
            }
            for row in 0..ROWS {
                let cell = if row % 2 == 0 { Cell::Red } else { Cell::Yellow };
                board.place(col, cell);
            }
        }

        let outcome = choose_move(&mut board, 1, Strategy::ExpectedMinimax, Player::Red);
        assert_eq!(outcome.column, Some(3));

        let mut after = board;
        after.place(3, Cell::Red);
        let direct = PositionalHeuristic.evaluate(&after, Player::Red);
        assert!(
            (outcome.score - 0.6 * direct).abs() < 1e-9,
            "expected 0.6 * {direct}, got {}",
            outcome.score
        );
    }

    #[test]
    fn expected_minimax_weighs_neighbors_on_open_board() {
        // On an open board every candidate has three feasible landings, so
        // the candidate score is a full 0.6/0.2/0.2 mixture. Center still
        // carries the largest expected value.
        let mut board = Board::new();
        let outcome = choose_move(&mut board, 1, Strategy::ExpectedMinimax, Player::Red);
        assert_eq!(outcome.column, Some(3));

        let mut after = Board::new();
        after.place(3, Cell::Red);
        let center = PositionalHeuristic.evaluate(&after, Player::Red);
        // Slips to 2 or 4 evaluate to 0 (no center disc, no threats)
        assert!((outcome.score - 0.6 * center).abs() < 1e-9);
    }

    #[test]
    fn strategies_agree_on_a_forced_win() {
        let mut board = replay(&[0, 6, 1, 6, 2, 5]);
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta, Strategy::ExpectedMinimax] {
            let outcome = choose_move(&mut board, 1, strategy, Player::Red);
            assert_eq!(
                outcome.column,
                Some(3),
                "{} missed the immediate four",
                strategy.name()
            );
        }
    }

    #[test]
    fn strategy_names_round_trip_through_serde() {
        let toml = "strategy = \"expected_minimax\"";
        #[derive(serde::Deserialize)]
        struct Wrapper {
            strategy: Strategy,
        }
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.strategy, Strategy::ExpectedMinimax);
        assert_eq!(parsed.strategy.name(), "expected_minimax");
    }
}
