// game/mod.rs

pub mod evaluation;
pub mod search;
pub mod selection;
pub mod time;

use std::ops::{Deref, DerefMut};

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::variant::{Antichess, Variant, VariantPosition};
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Position, PositionError};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The rule set a position is played under.
///
/// Evaluation and the heuristic ladder match on this tag, so adding a
/// variant is a compile error everywhere it needs handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    Standard,
    /// Losing chess: captures are compulsory and shedding every piece (or
    /// being stalemated) wins.
    Antichess,
}

impl RuleSet {
    fn of(variant: Variant) -> EngineResult<Self> {
        match variant {
            Variant::Chess => Ok(RuleSet::Standard),
            Variant::Antichess => Ok(RuleSet::Antichess),
            other => Err(EngineError::UnsupportedVariant {
                name: format!("{other:?}"),
            }),
        }
    }
}

/// A position plus the line of moves pushed onto it.
///
/// Bots explore the tree by `push`/`pop` on one `Game` rather than cloning
/// positions at every node. Every bot call leaves the stack as it found it.
#[derive(Clone, Debug)]
pub struct Game {
    rules: RuleSet,
    positions: Vec<VariantPosition>,
    keys: Vec<Zobrist64>,
    moves: Vec<Move>,
}

impl Game {
    pub fn new(rules: RuleSet) -> Self {
        let pos = match rules {
            RuleSet::Standard => VariantPosition::Chess(Chess::default()),
            RuleSet::Antichess => VariantPosition::Antichess(Antichess::default()),
        };
        Self::with_root(rules, pos)
    }

    pub fn from_fen(fen: &str, rules: RuleSet) -> EngineResult<Self> {
        Self::from_fen_with_mode(fen, rules, CastlingMode::Standard)
    }

    /// Like [`Game::from_fen`], with an explicit castling mode for Chess960 starts.
    pub fn from_fen_with_mode(fen: &str, rules: RuleSet, mode: CastlingMode) -> EngineResult<Self> {
        let fen: Fen = fen.parse().map_err(|e| EngineError::InvalidFen {
            message: format!("{e}"),
        })?;
        let pos = match rules {
            RuleSet::Standard => VariantPosition::Chess(
                fen.into_position(mode)
                    .map_err(|e| EngineError::IllegalPosition { message: format!("{e}") })?,
            ),
            // Antichess has no castling; rights copied from a standard FEN are dropped.
            RuleSet::Antichess => VariantPosition::Antichess(
                fen.into_position::<Antichess>(mode)
                    .or_else(PositionError::ignore_invalid_castling_rights)
                    .map_err(|e| EngineError::IllegalPosition { message: format!("{e}") })?,
            ),
        };
        Ok(Self::with_root(rules, pos))
    }

    pub fn from_position(pos: VariantPosition) -> EngineResult<Self> {
        let rules = RuleSet::of(pos.variant())?;
        Ok(Self::with_root(rules, pos))
    }

    fn with_root(rules: RuleSet, pos: VariantPosition) -> Self {
        let key = pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
        Self {
            rules,
            positions: vec![pos],
            keys: vec![key],
            moves: Vec::new(),
        }
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn position(&self) -> &VariantPosition {
        // The root is never popped, so the stack is never empty.
        &self.positions[self.positions.len() - 1]
    }

    /// Number of moves pushed since the root.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    pub fn turn(&self) -> Color {
        self.position().turn()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position().legal_moves()
    }

    pub fn push(&mut self, m: Move) {
        let mut next = self.position().clone();
        next.play_unchecked(m);
        self.keys.push(next.zobrist_hash::<Zobrist64>(EnPassantMode::Legal));
        self.positions.push(next);
        self.moves.push(m);
    }

    /// Takes back the last pushed move. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<Move> {
        let m = self.moves.pop()?;
        self.positions.pop();
        self.keys.pop();
        Some(m)
    }

    /// Pushes `m` and returns a guard that pops it again when dropped.
    pub fn play(&mut self, m: Move) -> Played<'_> {
        self.push(m);
        Played { game: self }
    }

    pub fn is_check(&self) -> bool {
        self.position().is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position().is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position().is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position().is_insufficient_material()
    }

    /// Fifty-move rule or threefold repetition along the pushed line.
    pub fn is_draw_claimable(&self) -> bool {
        if self.position().halfmoves() >= 100 {
            return true;
        }
        let current = self.keys[self.keys.len() - 1];
        self.keys.iter().filter(|&&k| k == current).count() >= 3
    }

    pub fn is_game_over(&self) -> bool {
        self.position().is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.position().outcome().winner()
    }

    /// The side to move has reached its variant win condition.
    pub fn is_variant_win(&self) -> bool {
        self.rules == RuleSet::Antichess && self.winner() == Some(self.turn())
    }

    pub fn is_variant_loss(&self) -> bool {
        self.rules == RuleSet::Antichess && self.winner() == Some(!self.turn())
    }

    pub fn is_capture(&self, m: Move) -> bool {
        m.is_capture()
    }

    pub fn is_en_passant(&self, m: Move) -> bool {
        m.is_en_passant()
    }

    pub fn gives_check(&mut self, m: Move) -> bool {
        self.play(m).is_check()
    }

    /// Playing `m` ends the game with the mover as the winner.
    pub fn wins_immediately(&mut self, m: Move) -> bool {
        let mover = self.turn();
        self.play(m).winner() == Some(mover)
    }

    /// SAN with check and mate suffixes.
    pub fn san(&self, m: Move) -> String {
        SanPlus::from_move(self.position().clone(), m).to_string()
    }
}

/// A pushed move that is taken back when the guard goes out of scope,
/// including on early return through `?`.
pub struct Played<'a> {
    game: &'a mut Game,
}

impl Deref for Played<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for Played<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for Played<'_> {
    fn drop(&mut self) {
        self.game.pop();
    }
}
