//! Single-pile Nim, for demonstrations and tests.
//!
//! Players alternately take between one and `max_take` tokens from a pile.
//! The player who faces an empty pile cannot move and loses. With
//! `max_take = 3`, a pile that is a multiple of four is lost for the player
//! to move.

use super::interface::{self, Error, Result, Utility};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Side::A => 'A',
                Side::B => 'B',
            }
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pile {
    pub tokens: u32,
    pub to_move: Side,
}

impl Pile {
    pub fn new(tokens: u32, to_move: Side) -> Self {
        Pile { tokens, to_move }
    }
}

impl Display for Pile {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} tokens, {} to move", self.tokens, self.to_move)
    }
}

/// Take this many tokens from the pile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Take(pub u32);

impl Display for Take {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "take {}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Nim {
    max_take: u32,
}

impl Nim {
    pub fn new(max_take: u32) -> Self {
        Nim { max_take }
    }

    pub fn max_take(&self) -> u32 {
        self.max_take
    }
}

impl Default for Nim {
    fn default() -> Self {
        Nim::new(3)
    }
}

impl interface::Game for Nim {
    type S = Pile;
    type A = Take;
    type P = Side;

    fn actions(&self, pile: &Pile) -> Vec<Take> {
        (1..=self.max_take.min(pile.tokens)).map(Take).collect()
    }

    fn result(&self, pile: &Pile, take: &Take) -> Result<Pile> {
        if take.0 == 0 || take.0 > self.max_take || take.0 > pile.tokens {
            return Err(Error::IllegalAction(format!("{} from a pile of {}", take, pile.tokens)));
        }
        Ok(Pile { tokens: pile.tokens - take.0, to_move: pile.to_move.opponent() })
    }

    fn is_terminal(&self, pile: &Pile) -> bool {
        pile.tokens == 0
    }

    fn utility(&self, pile: &Pile, player: &Side) -> Result<Utility> {
        if pile.tokens != 0 {
            return Err(Error::NonTerminalState);
        }
        // The player facing the empty pile lost.
        Ok(if pile.to_move == *player { -1.0 } else { 1.0 })
    }

    fn to_move(&self, pile: &Pile) -> Side {
        pile.to_move
    }

    fn notation(&self, _pile: &Pile, take: &Take) -> Option<String> {
        Some(take.to_string())
    }
}
