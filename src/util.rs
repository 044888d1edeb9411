//! Utility functions for testing and logging.

use super::interface::{Game, Result, Strategy};

/// Play a game from `start` until it ends.
///
/// The first strategy plays for the player to move in `start`, the second for
/// the other player. Returns the terminal state.
pub fn battle_royale<G, S1, S2>(game: &G, start: &G::S, s1: &mut S1, s2: &mut S2) -> Result<G::S>
where
    G: Game,
    G::S: Clone,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let first = game.to_move(start);
    let mut state = start.clone();
    while !game.is_terminal(&state) {
        let action = if game.to_move(&state) == first {
            s1.choose_action(game, &state)?
        } else {
            s2.choose_action(game, &state)?
        };
        state = game.result(&state, &action)?;
    }
    Ok(state)
}

// Return a unique id for humans for this action.
pub(crate) fn action_id<G: Game>(game: &G, state: &G::S, action: &G::A) -> String {
    game.notation(state, action).unwrap_or_else(|| "no notation impl".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nim::{Nim, Pile, Side, Take};

    #[test]
    fn action_id_uses_notation() {
        let nim = Nim::default();
        assert_eq!(action_id(&nim, &Pile::new(5, Side::A), &Take(2)), "take 2");
    }
}
