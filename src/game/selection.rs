// src/game/selection.rs

//! Temperature-controlled choice among scored candidates.
//!
//! Every bot ends its decision here. `randomness` 0 always takes the best
//! score; 1 flattens the distribution until centipawn differences barely
//! matter.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{EngineError, EngineResult};

const MIN_TEMPERATURE: f64 = 0.1;
const TEMPERATURE_RANGE: f64 = 999.9;

/// Clamps a configured randomness into `[0, 1]`; NaN counts as 0.
pub fn clamp_randomness(randomness: f64) -> f64 {
    if randomness.is_nan() {
        0.0
    } else {
        randomness.clamp(0.0, 1.0)
    }
}

pub fn temperature(randomness: f64) -> f64 {
    MIN_TEMPERATURE + randomness * TEMPERATURE_RANGE
}

/// Picks one candidate from `(score, item)` pairs, higher scores being better.
///
/// Ties at `randomness == 0` go to the first candidate seen.
pub fn select<T: Clone, R: Rng>(
    candidates: &[(f64, T)],
    randomness: f64,
    rng: &mut R,
) -> EngineResult<T> {
    let best = best_index(candidates).ok_or(EngineError::NoCandidates)?;
    if randomness <= 0.0 {
        return Ok(candidates[best].1.clone());
    }

    let max_score = candidates[best].0;
    let t = temperature(randomness);
    let weights: Vec<f64> = candidates
        .iter()
        .map(|(score, _)| ((score - max_score) / t).exp())
        .collect();

    let index = match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        // Every weight underflowed (or a score was not finite).
        Err(_) => rng.gen_range(0..candidates.len()),
    };
    Ok(candidates[index].1.clone())
}

fn best_index<T>(candidates: &[(f64, T)]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, (score, _)) in candidates.iter().enumerate() {
        match best {
            Some(b) if *score <= candidates[b].0 => {}
            _ => best = Some(i),
        }
    }
    best
}
