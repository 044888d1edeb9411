//! The common structures and traits.

use thiserror::Error;

/// A score of a terminal game state from the perspective of one player.
/// Positive values mean that player won, negative values mean they lost.
pub type Utility = f64;

/// Ways a search can fail.
///
/// Every variant is a contract violation by either the game model, an
/// adversary, or the caller. None of them are recovered inside the engine.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("utility queried on a non-terminal state")]
    NonTerminalState,

    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error("no legal actions in a non-terminal state")]
    NoLegalActions,

    #[error("game is already over")]
    GameOver,

    #[error("adversary chose an action outside the legal set")]
    ForeignAction,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Defines the rules for a two-player, perfect-knowledge, zero-sum game.
///
/// All operations must be pure: the same inputs always give the same outputs.
pub trait Game {
    /// The type of the game state.
    type S;
    /// The type of game actions.
    type A: Clone + PartialEq;
    /// The type identifying a player.
    type P: Clone + PartialEq;

    /// Legal actions at a non-terminal state. The order decides ties: when
    /// several actions are equally good, searches pick the first one.
    fn actions(&self, state: &Self::S) -> Vec<Self::A>;

    /// The state reached by playing `action` in `state`.
    ///
    /// Fails with [`Error::IllegalAction`] if `action` is not legal there.
    fn result(&self, state: &Self::S, action: &Self::A) -> Result<Self::S>;

    /// Whether the game has ended.
    fn is_terminal(&self, state: &Self::S) -> bool;

    /// Score of a terminal state for `player`.
    ///
    /// Must fail with [`Error::NonTerminalState`] when `state` is not terminal.
    fn utility(&self, state: &Self::S, player: &Self::P) -> Result<Utility>;

    /// The player whose turn it is. Unspecified for terminal states.
    fn to_move(&self, state: &Self::S) -> Self::P;

    /// Optional method to return a human-readable form of an action, for logs.
    fn notation(&self, _state: &Self::S, _action: &Self::A) -> Option<String> {
        None
    }
}

/// Scores a hypothetical state, assuming the searching player moves next and
/// plays to maximize.
pub type Evaluator<'a, S> = dyn FnMut(&S) -> Result<Utility> + 'a;

/// Decides how the opponent moves at a minimizing node.
///
/// Implementations must return an element of `actions`, which is never empty.
pub trait Adversary<G: Game> {
    fn choose_action(
        &self, state: &G::S, actions: &[G::A], game: &G, evaluator: &mut Evaluator<G::S>,
        opponent: &G::P,
    ) -> Result<G::A>;
}

/// Defines a method of choosing an action for the player to move.
pub trait Strategy<G: Game> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<G::A>;
}

/// What a search does when it meets a non-terminal state without any legal
/// actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Stalemate {
    /// Fail with [`Error::NoLegalActions`].
    Error,
    /// Score the state with this fixed value, e.g. `0.0` for a draw.
    Value(Utility),
}

/// Options shared by the search engines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub(crate) stalemate: Stalemate,
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions { stalemate: Stalemate::Error }
    }

    /// Score stalemates with `value` instead of failing.
    pub fn with_stalemate_value(mut self, value: Utility) -> Self {
        self.stalemate = Stalemate::Value(value);
        self
    }

    /// Fail with [`Error::NoLegalActions`] on stalemates. This is the default.
    pub fn with_stalemate_error(mut self) -> Self {
        self.stalemate = Stalemate::Error;
        self
    }

    pub fn stalemate(&self) -> Stalemate {
        self.stalemate
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters collected during one top-level search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of states evaluated, including the root.
    pub nodes: u64,
    /// Number of alpha or beta cutoffs taken.
    pub cutoffs: u64,
}
