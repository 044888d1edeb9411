//! Search engine implementations.

pub mod alphabeta;
pub mod minimax;
mod util;
