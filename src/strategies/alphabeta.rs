//! Minimax with alpha-beta pruning.
//!
//! Searches the whole game tree from the root down to terminal states, on
//! behalf of the player to move at the root. Pruning only skips subtrees that
//! cannot change the decision, so the chosen action and its value are exactly
//! those of a full minimax sweep.

use super::super::interface::*;
use super::super::util::action_id;
use super::util::*;

use tracing::{debug, trace};

pub struct AlphaBeta {
    opts: SearchOptions,
    stats: SearchStats,
    prev_value: Utility,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::new())
    }

    pub fn with_options(opts: SearchOptions) -> Self {
        AlphaBeta { opts, stats: SearchStats::default(), prev_value: 0.0 }
    }

    /// Value of the root state found by the last search.
    pub fn root_value(&self) -> Utility {
        self.prev_value
    }

    /// Counters from the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Return the best action for the player to move in `state`.
    pub fn best_action<G: Game>(&mut self, game: &G, state: &G::S) -> Result<G::A> {
        if game.is_terminal(state) {
            return Err(Error::GameOver);
        }
        self.stats = SearchStats::default();
        let player = game.to_move(state);
        let (value, best) =
            self.max_value(game, state, &player, f64::NEG_INFINITY, f64::INFINITY)?;
        let action = best.ok_or(Error::NoLegalActions)?;
        self.prev_value = value;
        debug!(
            action = %action_id(game, state, &action),
            value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta search finished"
        );
        Ok(action)
    }

    fn max_value<G: Game>(
        &mut self, game: &G, state: &G::S, player: &G::P, mut alpha: Utility, beta: Utility,
    ) -> Result<(Utility, Option<G::A>)> {
        self.stats.nodes += 1;
        if game.is_terminal(state) {
            return Ok((game.utility(state, player)?, None));
        }
        let actions = game.actions(state);
        if actions.is_empty() {
            return Ok((stalemate_value(&self.opts)?, None));
        }
        let mut best = ValueAction::worst();
        for a in actions {
            let (value, _) = self.min_value(game, &game.result(state, &a)?, player, alpha, beta)?;
            best.max(value, a);
            if best.value >= beta {
                self.stats.cutoffs += 1;
                trace!(value = best.value, beta, "beta cutoff");
                return Ok(best.into_inner());
            }
            alpha = alpha.max(best.value);
        }
        Ok(best.into_inner())
    }

    fn min_value<G: Game>(
        &mut self, game: &G, state: &G::S, player: &G::P, alpha: Utility, mut beta: Utility,
    ) -> Result<(Utility, Option<G::A>)> {
        self.stats.nodes += 1;
        if game.is_terminal(state) {
            return Ok((game.utility(state, player)?, None));
        }
        let actions = game.actions(state);
        if actions.is_empty() {
            return Ok((stalemate_value(&self.opts)?, None));
        }
        let mut best = ValueAction::best();
        for a in actions {
            let (value, _) = self.max_value(game, &game.result(state, &a)?, player, alpha, beta)?;
            best.min(value, a);
            if best.value <= alpha {
                self.stats.cutoffs += 1;
                trace!(value = best.value, alpha, "alpha cutoff");
                return Ok(best.into_inner());
            }
            beta = beta.min(best.value);
        }
        Ok(best.into_inner())
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Strategy<G> for AlphaBeta {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<G::A> {
        self.best_action(game, state)
    }
}

/// Return the best action for the player to move in `state`, using alpha-beta
/// pruning with default options.
pub fn best_action<G: Game>(game: &G, state: &G::S) -> Result<G::A> {
    AlphaBeta::new().best_action(game, state)
}
