//! Search bots: material/positional negamax and pure mobility negamax share
//! one driver and differ only in the leaf evaluator.

use rand::rngs::StdRng;
use shakmaty::Move;
use tracing::{debug, warn};

use crate::bots::{tiered, Bot};
use crate::constants::INFINITY;
use crate::game::evaluation::{self, mobility, Evaluator};
use crate::game::search::{iterative_deepening, iterative_root_scores, score_root_moves, Search};
use crate::game::selection::{clamp_randomness, select};
use crate::game::time::TimeBudget;
use crate::game::Game;

/// Depth, randomness, seed and optional nominal think time of a search bot.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSettings {
    pub depth: u8,
    pub randomness: f64,
    pub seed: Option<u64>,
    pub think_time: Option<f64>,
}

impl SearchSettings {
    pub fn new(depth: u8, randomness: f64, seed: Option<u64>) -> Self {
        Self {
            depth: depth.max(1),
            randomness: clamp_randomness(randomness),
            seed,
            think_time: None,
        }
    }

    /// Nominal seconds per move. Gives an untimed game a deadline.
    pub fn with_think_time(mut self, seconds: f64) -> Self {
        self.think_time = (seconds.is_finite() && seconds > 0.0).then_some(seconds);
        self
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::new(3, 0.3, None)
    }
}

/// Picks a move by negamax with `evaluator` at the leaves.
///
/// Without any time budget, randomness 0 runs a single search at full depth
/// and positive randomness scores every root move one ply shallower and hands
/// the scores to the selector. With a budget, the same two modes iterate
/// depth by depth until the deadline; if not even depth 1 finishes, the tiered
/// fast path answers instead.
fn search_move(
    settings: &SearchSettings,
    evaluator: Evaluator,
    game: &mut Game,
    remaining: Option<f64>,
    rng: &mut StdRng,
) -> Option<Move> {
    if game.legal_moves().is_empty() {
        return None;
    }
    let budget = TimeBudget::plan(settings.depth, remaining, settings.think_time);
    let randomized = settings.randomness > 0.0;

    let chosen = if budget.is_timed() {
        debug!(
            seconds = ?budget.seconds,
            depth = budget.depth,
            randomized,
            "searching against deadline"
        );
        if randomized {
            iterative_root_scores(game, budget.depth, evaluator, budget.deadline)
                .and_then(|scored| select(&scored, settings.randomness, rng).ok())
        } else {
            iterative_deepening(game, budget.depth, evaluator, budget.deadline).and_then(|result| result.best_move)
        }
    } else if randomized {
        score_root_moves(game, budget.depth, evaluator, None)
            .ok()
            .and_then(|scored| select(&scored, settings.randomness, rng).ok())
    } else {
        let mut search = Search::new(evaluator, None);
        let result = search.negamax(game, budget.depth, -INFINITY, INFINITY).ok();
        debug!(depth = budget.depth, nodes = search.nodes(), "search completed");
        result.and_then(|result| result.best_move)
    };

    chosen.or_else(|| {
        warn!(depth = budget.depth, "no search depth completed, using fast path");
        tiered::fast_path(game, settings.randomness, rng)
    })
}

#[derive(Clone, Debug, Default)]
pub struct MinimaxBot {
    settings: SearchSettings,
}

impl MinimaxBot {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

impl Bot for MinimaxBot {
    fn name(&self) -> String {
        format!("Minimax (depth {})", self.settings.depth)
    }

    fn seed(&self) -> Option<u64> {
        self.settings.seed
    }

    fn choose_move_with(&self, game: &mut Game, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
        search_move(&self.settings, evaluation::evaluate, game, remaining, rng)
    }
}

/// Maximises its own piece mobility and minimises the opponent's.
#[derive(Clone, Debug, Default)]
pub struct MobilityBot {
    settings: SearchSettings,
}

impl MobilityBot {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

impl Bot for MobilityBot {
    fn name(&self) -> String {
        format!("Piece Mobility (depth {})", self.settings.depth)
    }

    fn seed(&self) -> Option<u64> {
        self.settings.seed
    }

    fn choose_move_with(&self, game: &mut Game, remaining: Option<f64>, rng: &mut StdRng) -> Option<Move> {
        search_move(&self.settings, mobility::evaluate, game, remaining, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{antichess, find_move, standard};
    use crate::game::RuleSet;

    const SCHOLARS: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

    #[test]
    fn test_names_and_clamping() {
        let bot = MinimaxBot::new(SearchSettings::new(0, 1.5, None));
        assert_eq!(bot.name(), "Minimax (depth 1)");
        assert_eq!(bot.settings().randomness, 1.0);
        assert_eq!(MobilityBot::default().name(), "Piece Mobility (depth 3)");
        assert_eq!(MinimaxBot::default().settings().randomness, 0.3);
    }

    #[test]
    fn test_depth_one_opening_reply_is_deterministic() {
        let bot = MinimaxBot::new(SearchSettings::new(1, 0.0, Some(7)));
        let mut game = Game::new(RuleSet::Standard);
        let first = bot.choose_move(&mut game, None).unwrap();
        let best = [find_move(&game, "b1c3"), find_move(&game, "g1f3")];
        assert!(best.contains(&first), "got {}", game.san(first));
        for _ in 0..3 {
            assert_eq!(bot.choose_move(&mut game, None), Some(first));
        }
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_finds_mate_in_one() {
        for randomness in [0.0, 0.3] {
            let bot = MinimaxBot::new(SearchSettings::new(2, randomness, Some(1)));
            let mut game = standard(SCHOLARS);
            assert_eq!(bot.choose_move(&mut game, None), Some(find_move(&game, "h5f7")));
        }
    }

    #[test]
    fn test_seeded_randomized_bot_repeats_itself() {
        let bot = MinimaxBot::new(SearchSettings::new(2, 0.8, Some(99)));
        let mut game = Game::new(RuleSet::Standard);
        let first = bot.choose_move(&mut game, None);
        assert!(first.is_some());
        assert_eq!(bot.choose_move(&mut game, None), first);
    }

    #[test]
    fn test_clock_pressure_still_moves() {
        let bot = MinimaxBot::new(SearchSettings::new(4, 0.0, None));
        for remaining in [0.01, 0.5, 4.0] {
            let mut game = Game::new(RuleSet::Standard);
            let m = bot.choose_move(&mut game, Some(remaining)).unwrap();
            assert!(game.legal_moves().contains(&m));
            assert_eq!(game.ply(), 0);
        }
    }

    #[test]
    fn test_think_time_bounds_untimed_search() {
        let settings = SearchSettings::new(3, 0.2, Some(5)).with_think_time(0.2);
        let bot = MinimaxBot::new(settings);
        let mut game = Game::new(RuleSet::Standard);
        assert!(bot.choose_move(&mut game, None).is_some());
    }

    #[test]
    fn test_resigns_without_legal_moves() {
        let mut game = standard("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(MinimaxBot::default().choose_move(&mut game, None), None);
        assert_eq!(MobilityBot::default().choose_move(&mut game, Some(10.0)), None);
    }

    #[test]
    fn test_antichess_forced_capture() {
        let bot = MinimaxBot::new(SearchSettings::new(2, 0.0, None));
        let mut game = antichess("rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR w - - 0 1");
        assert_eq!(bot.choose_move(&mut game, None), Some(find_move(&game, "d4e5")));
    }

    #[test]
    fn test_mobility_bot_plays_legal_move() {
        let bot = MobilityBot::new(SearchSettings::new(1, 0.0, None));
        let mut game = Game::new(RuleSet::Standard);
        let m = bot.choose_move(&mut game, None).unwrap();
        assert!(game.legal_moves().contains(&m));
        assert_eq!(game.ply(), 0);
    }

    /// Plays one antichess game and returns +1, 0 or -1 for white.
    fn self_play(white: &dyn Bot, black: &dyn Bot, max_plies: usize) -> i32 {
        let mut game = Game::new(RuleSet::Antichess);
        while !game.is_game_over() && game.ply() < max_plies {
            let bot = if game.turn().is_white() { white } else { black };
            let Some(m) = bot.choose_move(&mut game, None) else {
                break;
            };
            game.push(m);
        }
        match game.winner() {
            Some(color) if color.is_white() => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    #[test]
    fn test_antichess_deeper_search_holds_its_own() {
        let deep = MinimaxBot::new(SearchSettings::new(3, 0.0, None));
        let shallow = MinimaxBot::new(SearchSettings::new(1, 0.0, None));
        let as_white = self_play(&deep, &shallow, 100);
        let as_black = -self_play(&shallow, &deep, 100);
        let total = as_white + as_black;
        assert!(total >= 0, "deep bot lost the pair of games: {as_white} {as_black}");
    }
}
