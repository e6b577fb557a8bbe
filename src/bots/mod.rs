//! Move-choosing bots.
//!
//! Every bot takes the game by mutable reference, explores with make/unmake
//! and hands it back exactly as it found it.

pub mod minimax;
pub mod simple;
pub mod tiered;

pub use minimax::{MinimaxBot, MobilityBot};
pub use simple::SimpleBot;
pub use tiered::TieredBot;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::Move;

use crate::game::Game;

pub trait Bot: Send + Sync {
    /// Display label, including depth for the search bots.
    fn name(&self) -> String;

    /// Fixed RNG seed, if the bot was configured with one.
    fn seed(&self) -> Option<u64>;

    /// Picks a move for the side to move, drawing randomness from `rng`.
    ///
    /// `remaining` is the mover's clock in seconds, `None` when untimed.
    /// Returns `None` only when there is no legal move.
    fn choose_move_with(&self, game: &mut Game, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move>;

    fn choose_move(&self, game: &mut Game, remaining: Option<f64>) -> Option<Move> {
        let mut rng = self.rng();
        self.choose_move_with(game, remaining, &mut rng)
    }

    /// Same seed, same sequence: a seeded bot repeats itself call after call.
    fn rng(&self) -> StdRng {
        match self.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
