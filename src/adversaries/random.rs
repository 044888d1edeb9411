//! An opponent that picks uniformly among its legal actions.

use super::super::interface::*;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::RefCell;

/// Ignores the evaluator and picks any legal action with equal probability.
///
/// The searcher consults the adversary through a shared reference while it
/// is already inside a call to it, so the generator lives in a `RefCell`.
pub struct Random<R = ThreadRng> {
    rng: RefCell<R>,
}

impl Random {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Random<R> {
    /// Use `rng` as the source of randomness, e.g. a seeded `StdRng`.
    pub fn with_rng(rng: R) -> Self {
        Random { rng: RefCell::new(rng) }
    }
}

impl<G: Game, R: Rng> Adversary<G> for Random<R> {
    fn choose_action(
        &self, _state: &G::S, actions: &[G::A], _game: &G, _evaluator: &mut Evaluator<G::S>,
        _opponent: &G::P,
    ) -> Result<G::A> {
        let mut rng = self.rng.borrow_mut();
        actions.choose(&mut *rng).cloned().ok_or(Error::NoLegalActions)
    }
}
