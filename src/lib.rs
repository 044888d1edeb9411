//! Minimax search for deterministic, perfect-information, two-player,
//! zero-sum games.
//!
//! Implement [`Game`] for your game, then either ask [`best_action`] for the
//! optimal move under worst-case play, or ask [`decide`] for the best move
//! against a modeled opponent (an [`Adversary`]).

pub mod adversaries;
pub mod interface;
pub mod nim;
pub mod strategies;
pub mod util;

pub use adversaries::{Heuristic, Optimal, Random};
pub use interface::{
    Adversary, Error, Evaluator, Game, Result, SearchOptions, SearchStats, Stalemate, Strategy,
    Utility,
};
pub use strategies::alphabeta::{best_action, AlphaBeta};
pub use strategies::minimax::{decide, Minimax};
