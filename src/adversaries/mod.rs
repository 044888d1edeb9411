//! Opponent models for [`Minimax`](crate::Minimax).

pub mod heuristic;
pub mod optimal;
pub mod random;

pub use heuristic::Heuristic;
pub use optimal::Optimal;
pub use random::Random;

use super::interface::*;

// The first action with the lowest score.
fn first_lowest<A, F>(actions: &[A], mut score: F) -> Result<A>
where
    A: Clone,
    F: FnMut(&A) -> Result<Utility>,
{
    let mut best: Option<(Utility, &A)> = None;
    for a in actions {
        let value = score(a)?;
        match best {
            Some((lowest, _)) if value >= lowest => {}
            _ => best = Some((value, a)),
        }
    }
    best.map(|(_, a)| a.clone()).ok_or(Error::NoLegalActions)
}
