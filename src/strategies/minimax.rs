//! Full-width minimax against a modeled opponent.
//!
//! Without an adversary this is plain minimax. With one, minimizing nodes do
//! not minimize: the adversary picks the opponent's action and the search
//! follows only that action. The resulting value is what the searching player
//! gets against that particular opponent, which can be better than the
//! minimax value when the opponent is weak.

use super::super::interface::*;
use super::super::util::action_id;
use super::util::*;

use tracing::{debug, trace};

pub struct Minimax<'a, G: Game> {
    adversary: Option<&'a dyn Adversary<G>>,
    opts: SearchOptions,
    stats: SearchStats,
    prev_value: Utility,
}

impl<'a, G: Game> Minimax<'a, G> {
    pub fn new() -> Self {
        Self::with_options(SearchOptions::new())
    }

    pub fn with_options(opts: SearchOptions) -> Self {
        Minimax { adversary: None, opts, stats: SearchStats::default(), prev_value: 0.0 }
    }

    /// Let `adversary` choose the opponent's actions.
    pub fn against(mut self, adversary: &'a dyn Adversary<G>) -> Self {
        self.adversary = Some(adversary);
        self
    }

    /// Value of the root state found by the last search.
    pub fn root_value(&self) -> Utility {
        self.prev_value
    }

    /// Counters from the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Return the best action for `player` in `state`.
    pub fn decide(&mut self, game: &G, state: &G::S, player: &G::P) -> Result<G::A> {
        if game.is_terminal(state) {
            return Err(Error::GameOver);
        }
        let mut search = Search {
            game,
            player,
            adversary: self.adversary,
            opts: self.opts,
            stats: SearchStats::default(),
        };
        search.stats.nodes += 1;
        let mut best = ValueAction::worst();
        for a in game.actions(state) {
            let value = search.min_value(&game.result(state, &a)?)?;
            best.max(value, a);
        }
        self.stats = search.stats;
        let (value, action) = best.into_inner();
        let action = action.ok_or(Error::NoLegalActions)?;
        self.prev_value = value;
        debug!(
            action = %action_id(game, state, &action),
            value,
            nodes = self.stats.nodes,
            adversary = self.adversary.is_some(),
            "minimax decision finished"
        );
        Ok(action)
    }
}

impl<'a, G: Game> Default for Minimax<'a, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, G: Game> Strategy<G> for Minimax<'a, G> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<G::A> {
        let player = game.to_move(state);
        self.decide(game, state, &player)
    }
}

// State of one decision, borrowed by the evaluator handed to the adversary.
struct Search<'s, G: Game> {
    game: &'s G,
    player: &'s G::P,
    adversary: Option<&'s dyn Adversary<G>>,
    opts: SearchOptions,
    stats: SearchStats,
}

impl<'s, G: Game> Search<'s, G> {
    fn max_value(&mut self, state: &G::S) -> Result<Utility> {
        self.stats.nodes += 1;
        let game = self.game;
        if game.is_terminal(state) {
            return game.utility(state, self.player);
        }
        let actions = game.actions(state);
        if actions.is_empty() {
            return stalemate_value(&self.opts);
        }
        let mut value = f64::NEG_INFINITY;
        for a in &actions {
            value = value.max(self.min_value(&game.result(state, a)?)?);
        }
        Ok(value)
    }

    fn min_value(&mut self, state: &G::S) -> Result<Utility> {
        self.stats.nodes += 1;
        let game = self.game;
        if game.is_terminal(state) {
            return game.utility(state, self.player);
        }
        let actions = game.actions(state);
        if actions.is_empty() {
            return stalemate_value(&self.opts);
        }
        match self.adversary {
            None => {
                let mut value = f64::INFINITY;
                for a in &actions {
                    value = value.min(self.max_value(&game.result(state, a)?)?);
                }
                Ok(value)
            }
            Some(adversary) => {
                let opponent = game.to_move(state);
                let chosen = adversary.choose_action(
                    state,
                    &actions,
                    game,
                    &mut |s: &G::S| self.max_value(s),
                    &opponent,
                )?;
                if !actions.contains(&chosen) {
                    return Err(Error::ForeignAction);
                }
                trace!(action = %action_id(game, state, &chosen), "adversary chose");
                self.max_value(&game.result(state, &chosen)?)
            }
        }
    }
}

/// Return the best action for `player` in `state`.
///
/// With `adversary` set, opponent moves are the ones it picks rather than the
/// ones worst for `player`.
pub fn decide<G: Game>(
    game: &G, state: &G::S, player: &G::P, adversary: Option<&dyn Adversary<G>>,
) -> Result<G::A> {
    let mut minimax = Minimax::new();
    if let Some(adversary) = adversary {
        minimax = minimax.against(adversary);
    }
    minimax.decide(game, state, player)
}
