use crate::game::{Board, LegalActions, CENTER_COL};

/// Valid columns sorted center-out: ascending distance from the center
/// column, ties kept in ascending column order (the sort is stable).
/// Exploring central moves first improves alpha-beta pruning. Recomputed at
/// every node, since validity changes as discs are placed and undone.
pub fn ordered_moves(board: &Board) -> LegalActions {
    let mut moves = board.valid_moves();
    moves.sort_by_key(|&col| (col as i64 - CENTER_COL as i64).abs());
    moves
}
