//! An opponent that always plays the move worst for the searching player.

use super::super::interface::*;
use super::first_lowest;

/// Picks the action whose resulting state the evaluator scores lowest, so
/// that [`Minimax`](crate::Minimax) behaves exactly as without an adversary.
#[derive(Copy, Clone, Debug, Default)]
pub struct Optimal;

impl<G: Game> Adversary<G> for Optimal {
    fn choose_action(
        &self, state: &G::S, actions: &[G::A], game: &G, evaluator: &mut Evaluator<G::S>,
        _opponent: &G::P,
    ) -> Result<G::A> {
        first_lowest(actions, |a| evaluator(&game.result(state, a)?))
    }
}
