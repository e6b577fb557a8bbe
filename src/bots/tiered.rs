//! Rule ladder bot: mate, good captures, safe checks, then a one-ply greedy
//! pick that avoids hanging the moved piece.
//!
//! The ladder degrades with the clock. Under [`LOW_TIME`] the hang scans are
//! dropped, and under [`CRITICAL_TIME`] only the [`fast_path`] runs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shakmaty::{Move, MoveList};
use tracing::debug;

use crate::bots::Bot;
use crate::constants::{CRITICAL_TIME, LOW_TIME};
use crate::game::evaluation::exchange::{exchange_estimate, hangs_piece, inverted_exchange};
use crate::game::evaluation::evaluate;
use crate::game::selection::{clamp_randomness, select};
use crate::game::{Game, RuleSet};

#[derive(Clone, Debug)]
pub struct TieredBot {
    randomness: f64,
    seed: Option<u64>,
}

impl TieredBot {
    pub fn new(randomness: f64, seed: Option<u64>) -> Self {
        Self {
            randomness: clamp_randomness(randomness),
            seed,
        }
    }

    fn choose_standard(&self, game: &mut Game, legal: MoveList, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
        let low_time = remaining.is_some_and(|r| r < LOW_TIME);

        if let Some(m) = immediate_win(game, &legal) {
            debug!(mv = %game.san(m), "tier: mate in one");
            return Some(m);
        }

        let captures: Vec<(f64, Move)> = legal
            .iter()
            .filter_map(|&m| exchange_estimate(m).filter(|&ex| ex >= 0).map(|ex| (ex as f64, m)))
            .collect();
        if !captures.is_empty() {
            debug!(count = captures.len(), "tier: non-losing captures");
            return select(&captures, self.randomness, rng).ok();
        }

        let checks: Vec<Move> = legal.iter().copied().filter(|&m| game.gives_check(m)).collect();
        if !checks.is_empty() {
            let safe: Vec<Move> = if low_time {
                Vec::new()
            } else {
                checks.iter().copied().filter(|&m| !hangs_piece(game, m)).collect()
            };
            let pool = if safe.is_empty() { &checks } else { &safe };
            debug!(count = pool.len(), safe = !safe.is_empty(), "tier: checks");
            let scored: Vec<(f64, Move)> = pool.iter().map(|&m| (one_ply(game, m), m)).collect();
            return select(&scored, self.randomness, rng).ok();
        }

        if low_time {
            let scored: Vec<(f64, Move)> = legal.iter().map(|&m| (one_ply(game, m), m)).collect();
            return select(&scored, self.randomness, rng).ok();
        }

        let mut safe = Vec::new();
        let mut unsafe_moves = Vec::new();
        for &m in &legal {
            let scored = (one_ply(game, m), m);
            if hangs_piece(game, m) {
                unsafe_moves.push(scored);
            } else {
                safe.push(scored);
            }
        }
        debug!(safe = safe.len(), hanging = unsafe_moves.len(), "tier: one-ply greedy");
        let pool = if safe.is_empty() { unsafe_moves } else { safe };
        select(&pool, self.randomness, rng).ok()
    }

    /// There are no checks in antichess and captures are compulsory, so the
    /// ladder is: win, shed material through a capture, then one-ply greedy.
    fn choose_antichess(&self, game: &mut Game, legal: MoveList, rng: &mut StdRng) -> Option<Move> {
        if let Some(m) = immediate_win(game, &legal) {
            debug!(mv = %game.san(m), "tier: variant win");
            return Some(m);
        }

        let sacrifices: Vec<(f64, Move)> = legal
            .iter()
            .filter_map(|&m| inverted_exchange(m).filter(|&ex| ex >= 0).map(|ex| (ex as f64, m)))
            .collect();
        if !sacrifices.is_empty() {
            debug!(count = sacrifices.len(), "tier: sacrificing captures");
            return select(&sacrifices, self.randomness, rng).ok();
        }

        let scored: Vec<(f64, Move)> = legal.iter().map(|&m| (one_ply(game, m), m)).collect();
        select(&scored, self.randomness, rng).ok()
    }
}

impl Default for TieredBot {
    fn default() -> Self {
        Self::new(0.5, None)
    }
}

impl Bot for TieredBot {
    fn name(&self) -> String {
        "Tiered Bot".to_string()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn choose_move_with(&self, game: &mut Game, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return None;
        }
        if remaining.is_some_and(|r| r < CRITICAL_TIME) {
            return fast_path(game, self.randomness, rng);
        }
        match game.rules() {
            RuleSet::Standard => self.choose_standard(game, legal, remaining, rng),
            RuleSet::Antichess => self.choose_antichess(game, legal, rng),
        }
    }
}

fn immediate_win(game: &mut Game, legal: &MoveList) -> Option<Move> {
    legal.iter().copied().find(|&m| game.wins_immediately(m))
}

/// The mover's view of the position after `m`.
fn one_ply(game: &mut Game, m: Move) -> f64 {
    let child = game.play(m);
    -f64::from(evaluate(&child))
}

/// Minimal ladder for when the clock is nearly gone: immediate win, a
/// non-losing capture, any check, then a random legal move.
///
/// No evaluation and no hang scans. Also the last resort for search bots
/// that could not finish a single depth. Losing captures are never preferred;
/// in antichess they can still come out of the random pick, where captures
/// are compulsory anyway.
pub fn fast_path(game: &mut Game, randomness: f64, rng: &mut StdRng) -> Option<Move> {
    let legal = game.legal_moves();
    if legal.is_empty() {
        return None;
    }
    if let Some(m) = immediate_win(game, &legal) {
        return Some(m);
    }

    let exchange: fn(Move) -> Option<i32> = match game.rules() {
        RuleSet::Standard => exchange_estimate,
        RuleSet::Antichess => inverted_exchange,
    };
    let winning: Vec<(f64, Move)> = legal
        .iter()
        .filter_map(|&m| exchange(m).filter(|&ex| ex >= 0).map(|ex| (ex as f64, m)))
        .collect();
    if !winning.is_empty() {
        return select(&winning, randomness, rng).ok();
    }

    if game.rules() == RuleSet::Standard {
        let checks: Vec<(f64, Move)> = legal.iter().filter(|&&m| game.gives_check(m)).map(|&m| (1.0, m)).collect();
        if !checks.is_empty() {
            return select(&checks, randomness, rng).ok();
        }
    }

    legal.choose(rng).copied()
}
