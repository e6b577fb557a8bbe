// src/game/evaluation/mobility.rs

use shakmaty::{Position, Square};

use crate::constants::MATE_SCORE;
use crate::game::{Game, RuleSet};

/// Distinct destination squares summed over every piece of the side to move.
///
/// Under-promotions to the same square count once.
pub fn count_piece_mobility(game: &Game) -> i32 {
    let mut routes: Vec<(Square, Square)> = game
        .legal_moves()
        .iter()
        .filter_map(|m| m.from().map(|from| (from, m.to())))
        .collect();
    routes.sort_unstable();
    routes.dedup();
    routes.len() as i32
}

/// Pure mobility evaluation. Negamax subtracts the opponent's mobility
/// one ply up, so only the side to move is counted.
pub fn evaluate(game: &Game) -> i32 {
    match game.rules() {
        RuleSet::Antichess => {
            if game.is_game_over() {
                if game.is_variant_win() {
                    return MATE_SCORE;
                }
                if game.is_variant_loss() {
                    return -MATE_SCORE;
                }
                return 0;
            }
        }
        RuleSet::Standard => {
            if game.position().is_checkmate() {
                return -MATE_SCORE;
            }
            if game.is_stalemate() || game.is_insufficient_material() || game.is_draw_claimable() {
                return 0;
            }
        }
    }
    count_piece_mobility(game)
}
