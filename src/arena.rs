//! Bot-versus-bot games with optional clocks, and parallel matches.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use shakmaty::{Color, Move};
use tracing::info;

use crate::bots::Bot;
use crate::constants::DEFAULT_MAX_PLIES;
use crate::error::EngineResult;
use crate::game::{Game, RuleSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    /// Antichess: a side ran out of pieces or moves.
    VariantEnd,
    Stalemate,
    InsufficientMaterial,
    /// Fifty-move rule or threefold repetition.
    DrawClaim,
    MaxPlies,
    Resignation,
    Flag,
}

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub result: GameResult,
    pub termination: Termination,
    pub moves: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct MatchSettings {
    pub rules: RuleSet,
    /// Start position; the standard initial position if absent.
    pub fen: Option<String>,
    /// Seconds on each side's clock, untimed if absent.
    pub clock: Option<f64>,
    pub max_plies: usize,
    /// Base seed for the per-game RNGs.
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            rules: RuleSet::Standard,
            fen: None,
            clock: None,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
        }
    }
}

impl MatchSettings {
    fn start(&self) -> EngineResult<Game> {
        match &self.fen {
            Some(fen) => Game::from_fen(fen, self.rules),
            None => Ok(Game::new(self.rules)),
        }
    }

    fn rng_for(&self, game_index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game_index as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

/// A seeded bot keeps its own reproducible stream; others share the game's.
fn ask(bot: &dyn Bot, game: &mut Game, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
    if bot.seed().is_some() {
        bot.choose_move(game, remaining)
    } else {
        bot.choose_move_with(game, remaining, rng)
    }
}

fn finished(game: &Game) -> Option<(GameResult, Termination)> {
    if game.is_game_over() {
        let termination = if game.rules() == RuleSet::Antichess && game.winner().is_some() {
            Termination::VariantEnd
        } else if game.is_checkmate() {
            Termination::Checkmate
        } else if game.is_insufficient_material() {
            Termination::InsufficientMaterial
        } else {
            Termination::Stalemate
        };
        let result = game.winner().map_or(GameResult::Draw, GameResult::win_for);
        return Some((result, termination));
    }
    if game.is_draw_claimable() {
        return Some((GameResult::Draw, Termination::DrawClaim));
    }
    None
}

pub fn play_game(white: &dyn Bot, black: &dyn Bot, settings: &MatchSettings, game_index: usize) -> EngineResult<GameRecord> {
    let mut game = settings.start()?;
    let mut rng = settings.rng_for(game_index);
    let mut clocks = [settings.clock; 2];
    let mut moves = Vec::new();

    let (result, termination) = loop {
        if let Some(end) = finished(&game) {
            break end;
        }
        if game.ply() >= settings.max_plies {
            break (GameResult::Draw, Termination::MaxPlies);
        }

        let mover = game.turn();
        let (bot, side) = match mover {
            Color::White => (white, 0),
            Color::Black => (black, 1),
        };

        let started = Instant::now();
        let choice = ask(bot, &mut game, clocks[side], &mut rng);
        if let Some(remaining) = clocks[side].as_mut() {
            *remaining -= started.elapsed().as_secs_f64();
            if *remaining <= 0.0 {
                break (GameResult::win_for(!mover), Termination::Flag);
            }
        }

        let Some(m) = choice else {
            break (GameResult::win_for(!mover), Termination::Resignation);
        };
        moves.push(game.san(m));
        game.push(m);
    };

    info!(
        game = game_index,
        white = %white.name(),
        black = %black.name(),
        %result,
        ?termination,
        plies = moves.len(),
        "game finished"
    );

    Ok(GameRecord {
        result,
        termination,
        moves,
    })
}

/// Results from the first bot's point of view.
#[derive(Clone, Debug, Default)]
pub struct MatchSummary {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub records: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    /// Points per game, one for a win and half for a draw.
    pub fn score(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.draws as f64 / 2.0) / self.games() as f64
    }
}

/// Plays `games` games between `a` and `b`, alternating colours with `a`
/// white in even-numbered games. Games run in parallel.
pub fn play_match(a: &dyn Bot, b: &dyn Bot, games: usize, settings: &MatchSettings) -> EngineResult<MatchSummary> {
    let records = (0..games)
        .into_par_iter()
        .map(|index| {
            let a_is_white = index % 2 == 0;
            let (white, black) = if a_is_white { (a, b) } else { (b, a) };
            play_game(white, black, settings, index).map(|record| (a_is_white, record))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let mut summary = MatchSummary::default();
    for (a_is_white, record) in records {
        match (record.result, a_is_white) {
            (GameResult::Draw, _) => summary.draws += 1,
            (GameResult::WhiteWins, true) | (GameResult::BlackWins, false) => summary.wins += 1,
            _ => summary.losses += 1,
        }
        summary.records.push(record);
    }
    info!(
        a = %a.name(),
        b = %b.name(),
        wins = summary.wins,
        losses = summary.losses,
        draws = summary.draws,
        "match finished"
    );
    Ok(summary)
}
