// src/game/evaluation/exchange.rs

use shakmaty::{Move, Position};

use crate::game::evaluation::{antichess, get_piece_value};
use crate::game::Game;

/// One-step exchange estimate for a capture, from the mover's perspective.
///
/// Assumes the opponent recaptures on the target square, so the mover gives
/// up the capturing piece. Multi-step sequences and x-rays are not modelled.
/// En passant comes out as pawn for pawn. Returns `None` for quiet moves.
pub fn exchange_estimate(m: Move) -> Option<i32> {
    let captured = m.capture()?;
    Some(get_piece_value(captured) - get_piece_value(m.role()))
}

/// Antichess exchange: value shed minus value taken.
///
/// Positive when the capture leaves a more valuable piece where the opponent
/// will likely be forced to take it.
pub fn inverted_exchange(m: Move) -> Option<i32> {
    let captured = m.capture()?;
    Some(antichess::get_piece_value(m.role()) - antichess::get_piece_value(captured))
}

/// True if, after `m`, the opponent can legally take the moved piece with
/// something worth no more than it.
pub fn hangs_piece(game: &mut Game, m: Move) -> bool {
    if m.is_castle() {
        return false;
    }
    let to = m.to();
    let child = game.play(m);
    let Some(piece) = child.position().board().piece_at(to) else {
        return false;
    };
    let our_value = get_piece_value(piece.role);

    let replies = child.legal_moves();
    let cheapest = replies
        .iter()
        .filter(|reply| reply.is_capture() && reply.to() == to)
        .map(|reply| get_piece_value(reply.role()))
        .min();
    cheapest.is_some_and(|value| value <= our_value)
}
