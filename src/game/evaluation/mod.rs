//! Evaluation of a chess position.
//!
//! Every evaluator scores from the perspective of the side to move. A mated
//! side to move scores `-MATE_SCORE`; delivering mate is seen one ply up,
//! after negation.

pub mod antichess;
pub mod exchange;
pub mod mobility;

use shakmaty::{Color, File, Piece, Position, Rank, Role, Square};

use crate::constants::{
    BISHOP_VALUE, CENTER_BONUS, IN_CHECK_PENALTY, KNIGHT_CENTER_BONUS, KNIGHT_VALUE, MATE_SCORE,
    MOBILITY_BONUS, PAWN_ADVANCE_WEIGHT, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
use crate::game::{Game, RuleSet};

/// A static evaluation function usable at search leaves.
pub type Evaluator = fn(&Game) -> i32;

pub fn get_piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => 0,
    }
}

/// Evaluates the position under whichever rule set it is played.
///
/// Returns a score in centipawns.
pub fn evaluate(game: &Game) -> i32 {
    match game.rules() {
        RuleSet::Standard => evaluate_standard(game),
        RuleSet::Antichess => antichess::evaluate(game),
    }
}

/// Material, center occupancy, pawn advancement, knight placement and mobility.
pub fn evaluate_standard(game: &Game) -> i32 {
    if game.is_checkmate() {
        return -MATE_SCORE;
    }
    if game.is_stalemate() || game.is_insufficient_material() || game.is_draw_claimable() {
        return 0;
    }

    let pos = game.position();
    let board = pos.board();
    let us = pos.turn();
    let mut score = 0;

    for &color in &Color::ALL {
        for &role in &Role::ALL {
            for square in board.by_piece(Piece { role, color }) {
                let value = get_piece_value(role) + placement_bonus(role, color, square);
                if color == us {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
    }

    score += pos.legal_moves().len() as i32 * MOBILITY_BONUS;

    if pos.is_check() {
        score -= IN_CHECK_PENALTY;
    }

    score
}

fn placement_bonus(role: Role, color: Color, square: Square) -> i32 {
    let mut bonus = 0;
    if is_center(square) {
        bonus += CENTER_BONUS;
    }
    match role {
        Role::Pawn => bonus += pawn_advancement(square, color) * PAWN_ADVANCE_WEIGHT,
        Role::Knight if is_knight_center(square) => bonus += KNIGHT_CENTER_BONUS,
        _ => {}
    }
    bonus
}

/// The c3-f6 block.
fn is_center(square: Square) -> bool {
    let file = square.file();
    let rank = square.rank();
    file >= File::C && file <= File::F && rank >= Rank::Third && rank <= Rank::Sixth
}

/// The center block without d3, e3, d6 and e6.
fn is_knight_center(square: Square) -> bool {
    if !is_center(square) {
        return false;
    }
    let inner_file = square.file() == File::D || square.file() == File::E;
    let edge_rank = square.rank() == Rank::Third || square.rank() == Rank::Sixth;
    !(inner_file && edge_rank)
}

/// Ranks advanced from the pawn's own starting rank.
fn pawn_advancement(square: Square, color: Color) -> i32 {
    let rank = square.rank() as i32;
    match color {
        Color::White => rank - 1,
        Color::Black => 6 - rank,
    }
}

#[cfg(test)]
pub mod tests;
