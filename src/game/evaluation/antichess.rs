//! Evaluation for antichess, where the objective is to lose every piece.
//!
//! Material counts against its owner here. Reusing the standard material
//! sign would make a deeper search play worse, not better.

use shakmaty::{Bitboard, Color, Piece, Position, Role};

use crate::constants::{
    ANTICHESS_BISHOP_VALUE, ANTICHESS_KING_VALUE, ANTICHESS_KNIGHT_VALUE, ANTICHESS_PAWN_VALUE,
    ANTICHESS_QUEEN_VALUE, ANTICHESS_ROOK_VALUE, ANTI_CAPTURE_BONUS, ANTI_EXPOSURE_BONUS,
    ANTI_MATERIAL_WEIGHT, ANTI_MOBILITY_PENALTY, ANTI_PIECE_COUNT_BONUS, MATE_SCORE,
};
use crate::game::Game;

pub fn get_piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => ANTICHESS_PAWN_VALUE,
        Role::Knight => ANTICHESS_KNIGHT_VALUE,
        Role::Bishop => ANTICHESS_BISHOP_VALUE,
        Role::Rook => ANTICHESS_ROOK_VALUE,
        Role::Queen => ANTICHESS_QUEEN_VALUE,
        Role::King => ANTICHESS_KING_VALUE,
    }
}

/// Scores the position for the side to move.
///
/// Fewer own pieces, fewer own moves (stalemate wins), available captures and
/// own pieces left en prise all raise the score.
pub fn evaluate(game: &Game) -> i32 {
    if game.is_game_over() {
        if game.is_variant_win() {
            return MATE_SCORE;
        }
        if game.is_variant_loss() {
            return -MATE_SCORE;
        }
        return 0;
    }

    let pos = game.position();
    let board = pos.board();
    let us = pos.turn();
    let mut score = 0;
    let mut our_pieces = 0;
    let mut their_pieces = 0;

    for &color in &Color::ALL {
        for &role in &Role::ALL {
            for _ in board.by_piece(Piece { role, color }) {
                let value = get_piece_value(role) * ANTI_MATERIAL_WEIGHT;
                if color == us {
                    score -= value;
                    our_pieces += 1;
                } else {
                    score += value;
                    their_pieces += 1;
                }
            }
        }
    }

    score -= our_pieces * ANTI_PIECE_COUNT_BONUS;
    score += their_pieces * ANTI_PIECE_COUNT_BONUS;

    let moves = pos.legal_moves();
    score -= moves.len() as i32 * ANTI_MOBILITY_PENALTY;
    score += moves.iter().filter(|&&m| game.is_capture(m)).count() as i32 * ANTI_CAPTURE_BONUS;

    score + exposure(game) * ANTI_EXPOSURE_BONUS
}

/// Own pieces the opponent could capture if it were their move.
fn exposure(game: &Game) -> i32 {
    let pos = game.position();
    let Ok(theirs) = pos.clone().swap_turn() else {
        return 0;
    };
    let mut targets = Bitboard::EMPTY;
    for m in theirs.legal_moves() {
        if m.is_capture() {
            targets |= Bitboard::from(m.to());
        }
    }
    (targets & pos.board().by_color(pos.turn())).count() as i32
}
