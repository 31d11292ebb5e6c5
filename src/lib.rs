//! # Connect Four Engine
//!
//! An adversarial game-tree search engine for Connect Four. It picks a move
//! by exploring future positions to a fixed depth with one of three
//! strategies (plain minimax, minimax with alpha-beta pruning, or an
//! expectation-weighted minimax that models the disc slipping to a
//! neighboring column) and scores cut-off positions with a hand-tuned
//! positional heuristic.
//!
//! The engine is synchronous and stateless between calls. It mutates a
//! single board in place via paired place/undo during the search (no board
//! copies on the hot path) and restores it before returning, so a board must
//! never be shared between concurrent searches.
//!
//! ## Modules
//!
//! - [`game`] — Board grid, place/undo, line-of-four and open-three checks
//! - [`ai`] — Heuristic, move ordering, search strategies, agent seam
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four_engine::ai::{choose_move, Strategy};
//! use connect_four_engine::game::{Board, Player};
//!
//! let mut board = Board::new();
//! let outcome = choose_move(&mut board, 4, Strategy::AlphaBeta, Player::Red);
//! assert!(outcome.column.is_some());
//! assert!(outcome.nodes_expanded > 0);
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
