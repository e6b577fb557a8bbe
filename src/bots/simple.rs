use rand::rngs::StdRng;
use shakmaty::{Move, Role};

use crate::bots::Bot;
use crate::game::selection::{clamp_randomness, select};
use crate::game::{Game, RuleSet};

/// Scores each legal move once (captures, then checks) and samples.
#[derive(Clone, Debug)]
pub struct SimpleBot {
    randomness: f64,
    seed: Option<u64>,
}

impl SimpleBot {
    pub fn new(randomness: f64, seed: Option<u64>) -> Self {
        Self {
            randomness: clamp_randomness(randomness),
            seed,
        }
    }

    pub fn randomness(&self) -> f64 {
        self.randomness
    }
}

impl Default for SimpleBot {
    fn default() -> Self {
        Self::new(1.0, None)
    }
}

/// Rough piece worth in pawns.
fn units(role: Role) -> f64 {
    match role {
        Role::Pawn => 1.0,
        Role::Knight | Role::Bishop | Role::King => 3.0,
        Role::Rook => 5.0,
        Role::Queen => 9.0,
    }
}

fn standard_score(game: &mut Game, m: Move) -> f64 {
    let mut score = 0.0;
    if let Some(captured) = m.capture() {
        score += 100.0 + units(captured);
    }
    if game.gives_check(m) {
        score += 50.0;
    }
    score + 0.1
}

/// Shedding our own expensive pieces matters more than what we take.
fn antichess_score(m: Move) -> f64 {
    let mut score = 0.0;
    if let Some(captured) = m.capture() {
        score += 50.0 + units(m.role()) * 5.0;
        score += 10.0 - units(captured);
    }
    score + 0.1
}

impl Bot for SimpleBot {
    fn name(&self) -> String {
        "Simple Bot".to_string()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn choose_move_with(&self, game: &mut Game, _remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
        let scored: Vec<(f64, Move)> = game
            .legal_moves()
            .into_iter()
            .map(|m| match game.rules() {
                RuleSet::Standard => (standard_score(game, m), m),
                RuleSet::Antichess => (antichess_score(m), m),
            })
            .collect();
        select(&scored, self.randomness, rng).ok()
    }
}
