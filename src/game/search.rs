// src/game/search.rs

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shakmaty::Move;
use tracing::debug;

use crate::constants::INFINITY;
use crate::error::SearchTimeout;
use crate::game::evaluation::{self, Evaluator};
use crate::game::Game;

/// Score for the side to move at the searched node, and the move that
/// achieves it. `best_move` is `None` at leaves and terminal positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Scratch state for one depth-first negamax run.
pub struct Search<'a> {
    evaluator: Evaluator,
    randomness: f64,
    rng: Option<&'a mut StdRng>,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(evaluator: Evaluator, deadline: Option<Instant>) -> Self {
        Self {
            evaluator,
            randomness: 0.0,
            rng: None,
            deadline,
            nodes: 0,
        }
    }

    /// Break ties between equally scored moves at random instead of taking
    /// the first one.
    pub fn with_randomness(mut self, randomness: f64, rng: &'a mut StdRng) -> Self {
        self.randomness = randomness;
        self.rng = Some(rng);
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Negamax with alpha-beta pruning over `game`'s legal moves in
    /// generation order.
    ///
    /// Scores at a node are only comparable with their siblings. The game is
    /// returned to its entry state on every path, including timeouts.
    pub fn negamax(
        &mut self,
        game: &mut Game,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> Result<SearchResult, SearchTimeout> {
        self.nodes += 1;
        if depth > 0 && self.deadline_passed() {
            return Err(SearchTimeout);
        }

        if depth == 0 || game.is_game_over() {
            return Ok(SearchResult {
                score: (self.evaluator)(game),
                best_move: None,
            });
        }

        let mut best_score = -INFINITY;
        let mut best_moves: Vec<Move> = Vec::new();

        for m in game.legal_moves() {
            let child = {
                let mut child = game.play(m);
                self.negamax(&mut child, depth - 1, -beta, -alpha)?
            };
            let score = -child.score;

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(m);
            } else if self.randomness > 0.0 && score == best_score {
                best_moves.push(m);
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let best_move = match self.rng.as_deref_mut() {
            Some(rng) if self.randomness > 0.0 && best_moves.len() > 1 => best_moves.choose(rng).copied(),
            _ => best_moves.first().copied(),
        };

        Ok(SearchResult {
            score: best_score,
            best_move,
        })
    }
}

/// Searches `game` with the variant-aware evaluator.
pub fn search(
    game: &mut Game,
    depth: u8,
    alpha: i32,
    beta: i32,
    randomness: f64,
    rng: Option<&mut StdRng>,
    deadline: Option<Instant>,
) -> Result<SearchResult, SearchTimeout> {
    let mut search = Search::new(evaluation::evaluate, deadline);
    if let Some(rng) = rng {
        search = search.with_randomness(randomness, rng);
    }
    search.negamax(game, depth, alpha, beta)
}

/// Scores every root move by searching the reply position to `depth - 1`.
///
/// Scores are from the root mover's perspective, ready for the selector.
pub fn score_root_moves(
    game: &mut Game,
    depth: u8,
    evaluator: Evaluator,
    deadline: Option<Instant>,
) -> Result<Vec<(f64, Move)>, SearchTimeout> {
    let mut search = Search::new(evaluator, deadline);
    let mut scored = Vec::new();
    for m in game.legal_moves() {
        let mut child = game.play(m);
        let result = search.negamax(&mut child, depth.saturating_sub(1), -INFINITY, INFINITY)?;
        scored.push((-result.score as f64, m));
    }
    Ok(scored)
}

/// Deterministic search at depth 1, 2, ... up to `max_depth`, keeping the
/// deepest iteration that finished before the deadline.
///
/// `None` only if no iteration completed or there is no legal move.
pub fn iterative_deepening(
    game: &mut Game,
    max_depth: u8,
    evaluator: Evaluator,
    deadline: Option<Instant>,
) -> Option<SearchResult> {
    let mut best = None;
    for depth in 1..=max_depth.max(1) {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        let mut search = Search::new(evaluator, deadline);
        match search.negamax(game, depth, -INFINITY, INFINITY) {
            Ok(result) => {
                debug!(depth, score = result.score, nodes = search.nodes(), "search depth completed");
                if result.best_move.is_some() {
                    best = Some(result);
                }
            }
            Err(SearchTimeout) => {
                debug!(depth, nodes = search.nodes(), "deadline reached, keeping previous depth");
                break;
            }
        }
    }
    best
}

/// [`score_root_moves`] repeated at increasing depth; returns the scores of
/// the deepest pass that completed.
pub fn iterative_root_scores(
    game: &mut Game,
    max_depth: u8,
    evaluator: Evaluator,
    deadline: Option<Instant>,
) -> Option<Vec<(f64, Move)>> {
    let mut best = None;
    for depth in 1..=max_depth.max(1) {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        match score_root_moves(game, depth, evaluator, deadline) {
            Ok(scored) if !scored.is_empty() => {
                debug!(depth, moves = scored.len(), "root scoring completed");
                best = Some(scored);
            }
            Ok(_) => break,
            Err(SearchTimeout) => {
                debug!(depth, "deadline reached during root scoring");
                break;
            }
        }
    }
    best
}
