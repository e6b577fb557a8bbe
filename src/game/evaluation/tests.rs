//! Unit tests for the evaluators and exchange helpers.

use super::*;
use crate::constants::ANTI_MOBILITY_PENALTY;
use crate::game::testing::{antichess, find_move, standard};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const WHITE_ARMY: &str = "4k3/8/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";
const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

#[test]
fn test_evaluate_starting_position() {
    // Everything cancels except the side to move's twenty moves.
    let game = Game::new(RuleSet::Standard);
    assert_eq!(evaluate(&game), 20 * MOBILITY_BONUS);
}

#[test]
fn test_evaluate_dispatches_on_rules() {
    let game = standard(START);
    assert_eq!(evaluate(&game), evaluate_standard(&game));
    let game = antichess(START);
    assert_eq!(evaluate(&game), antichess::evaluate(&game));
}

#[test]
fn test_evaluate_white_advantage() {
    let game = standard("4k3/8/8/8/8/8/8/4K2Q w - - 0 1");
    assert!(evaluate(&game) > 850);
}

#[test]
fn test_evaluate_black_advantage() {
    let game = standard("4k2q/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(evaluate(&game) < -850);
}

#[test]
fn test_evaluate_is_side_to_move_relative() {
    let white = standard("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let black = standard("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
    assert!(evaluate(&white) > 0);
    assert!(evaluate(&black) < 0);
}

#[test]
fn test_in_check_penalty() {
    let checked = standard("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    let quiet = standard("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    assert!(evaluate(&checked) < evaluate(&quiet));
}

#[test]
fn test_checkmated_side_scores_mate() {
    let game = standard(FOOLS_MATE);
    assert_eq!(evaluate(&game), -MATE_SCORE);
}

#[test]
fn test_draws_score_zero() {
    let insufficient = standard("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&insufficient), 0);
    let stalemate = standard("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&stalemate), 0);
    let fifty = standard("4k3/8/8/8/8/8/8/R3K3 w - - 100 80");
    assert_eq!(evaluate(&fifty), 0);
}

#[test]
fn test_knight_placement() {
    assert!(is_knight_center(Square::C3));
    assert!(is_knight_center(Square::F6));
    assert!(!is_knight_center(Square::D3));
    assert!(!is_knight_center(Square::E6));
    assert!(!is_knight_center(Square::B1));
}

#[test]
fn test_pawn_advancement_is_relative_to_own_start() {
    assert_eq!(pawn_advancement(Square::E2, Color::White), 0);
    assert_eq!(pawn_advancement(Square::E4, Color::White), 2);
    assert_eq!(pawn_advancement(Square::E7, Color::Black), 0);
    assert_eq!(pawn_advancement(Square::E5, Color::Black), 2);
}

#[test]
fn test_antichess_starting_position() {
    // Symmetric material and no captures; only the mobility penalty remains.
    let game = antichess(START);
    assert_eq!(evaluate(&game), -20 * ANTI_MOBILITY_PENALTY);
}

#[test]
fn test_variant_inverts_material() {
    let normal = standard(WHITE_ARMY);
    let anti = antichess(WHITE_ARMY);
    assert!(evaluate(&normal) > 0);
    assert!(evaluate(&anti) < 0);

    let few = antichess("rnbqkbnr/pppppppp/8/8/8/8/P7/8 w - - 0 1");
    assert!(evaluate(&few) > evaluate(&anti));
}

#[test]
fn test_antichess_terminal_scores() {
    // Blocked pawn: white cannot move, which wins antichess.
    let stalemated = antichess("8/8/8/8/8/p7/P7/8 w - - 0 1");
    assert_eq!(evaluate(&stalemated), MATE_SCORE);
    // No pieces left also wins.
    let bare = antichess("8/8/8/8/8/8/8/k7 w - - 0 1");
    assert_eq!(evaluate(&bare), MATE_SCORE);
}

#[test]
fn test_antichess_rewards_available_captures() {
    // exd5 is forced: one move, one capture, and e4 is itself en prise.
    let capture = antichess("8/8/8/3p4/4P3/8/8/8 w - - 0 1");
    assert_eq!(evaluate(&capture), -5 + 20 + 8);
    // Only e5 is available and nothing can be taken.
    let blocked = antichess("8/8/8/8/3pP3/8/8/8 w - - 0 1");
    assert_eq!(evaluate(&blocked), -5);
    assert!(evaluate(&capture) > evaluate(&blocked));
}

#[test]
fn test_exchange_estimates() {
    let game = standard("4k3/8/3q4/8/4N3/8/8/4K3 w - - 0 1");
    let nxq = find_move(&game, "e4d6");
    assert_eq!(exchange::exchange_estimate(nxq), Some(QUEEN_VALUE - KNIGHT_VALUE));
    assert_eq!(exchange::inverted_exchange(nxq), Some(300 - 900));
    assert_eq!(exchange::exchange_estimate(find_move(&game, "e4g5")), None);

    let game = standard("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(exchange::exchange_estimate(find_move(&game, "e4d5")), Some(0));
}

#[test]
fn test_en_passant_is_an_even_trade() {
    let game = standard("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let ep = find_move(&game, "e5d6");
    assert!(game.is_en_passant(ep));
    assert_eq!(exchange::exchange_estimate(ep), Some(0));
}

#[test]
fn test_hangs_piece() {
    let mut game = standard("4k3/8/3p4/8/4N3/8/8/4K3 w - - 0 1");
    let into_pawn = find_move(&game, "e4c5");
    let safe = find_move(&game, "e4g5");
    assert!(exchange::hangs_piece(&mut game, into_pawn));
    assert!(!exchange::hangs_piece(&mut game, safe));
    assert_eq!(game.ply(), 0);
}

#[test]
fn test_expensive_recapture_does_not_hang() {
    // Only the queen can take on e4.
    let mut game = standard("4k3/8/8/8/8/3q4/4P3/4K3 w - - 0 1");
    let push = find_move(&game, "e2e4");
    assert!(!exchange::hangs_piece(&mut game, push));
}

#[test]
fn test_king_recapture_hangs() {
    let mut game = standard("4k3/8/8/8/8/8/8/3RK3 w - - 0 1");
    let lift = find_move(&game, "d1d7");
    assert!(exchange::hangs_piece(&mut game, lift));
}

#[test]
fn test_castling_never_hangs() {
    let mut game = standard("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let castle = find_move(&game, "e1g1");
    assert!(!exchange::hangs_piece(&mut game, castle));
}

#[test]
fn test_mobility_counts_distinct_routes() {
    let game = Game::new(RuleSet::Standard);
    assert_eq!(mobility::count_piece_mobility(&game), 20);
    assert_eq!(mobility::evaluate(&game), 20);

    // Four promotions to e8 count as one route.
    let game = standard("k7/4P3/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(mobility::count_piece_mobility(&game), 1 + 3);
}

#[test]
fn test_mobility_terminal_scores() {
    assert_eq!(mobility::evaluate(&standard(FOOLS_MATE)), -MATE_SCORE);
    assert_eq!(mobility::evaluate(&antichess("8/8/8/8/8/p7/P7/8 w - - 0 1")), MATE_SCORE);
}
