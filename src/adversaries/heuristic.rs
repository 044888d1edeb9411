//! An opponent guided by its own scoring of states.

use super::super::interface::*;
use super::first_lowest;

/// Picks the action leading to the state with the lowest heuristic score.
///
/// The heuristic can score any state, terminal or not, and the engine's own
/// evaluation is never consulted. Ties go to the first action.
#[derive(Clone)]
pub struct Heuristic<F> {
    heuristic: F,
}

impl<F> Heuristic<F> {
    pub fn new(heuristic: F) -> Self {
        Heuristic { heuristic }
    }
}

impl<G, F> Adversary<G> for Heuristic<F>
where
    G: Game,
    F: Fn(&G::S) -> Utility,
{
    fn choose_action(
        &self, state: &G::S, actions: &[G::A], game: &G, _evaluator: &mut Evaluator<G::S>,
        _opponent: &G::P,
    ) -> Result<G::A> {
        first_lowest(actions, |a| Ok((self.heuristic)(&game.result(state, a)?)))
    }
}
