//! Pluggable chess move selection: a softmax selector, variant-aware
//! evaluators, deadline-bounded negamax and a family of bots built on them.

pub mod arena;
pub mod bots;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;

pub use bots::Bot;
pub use error::{EngineError, EngineResult};
pub use game::{Game, RuleSet};
