use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::Level;

use chess_bots::arena::{play_game, play_match, MatchSettings};
use chess_bots::config::{list_profiles, load_profile, BotConfig};
use chess_bots::constants::DEFAULT_MAX_PLIES;
use chess_bots::RuleSet;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Standard,
    Antichess,
}

impl From<VariantArg> for RuleSet {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => RuleSet::Standard,
            VariantArg::Antichess => RuleSet::Antichess,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess bots against each other", long_about = None)]
struct Args {
    /// White bot: kind[:depth[:randomness[:seed]]] or @profile
    #[arg(long, default_value = "tiered")]
    white: String,

    /// Black bot, same format as --white
    #[arg(long, default_value = "minimax:2")]
    black: String,

    /// Number of games; colours alternate after the first
    #[arg(long, default_value_t = 1)]
    games: usize,

    #[arg(long, value_enum, default_value_t = VariantArg::Standard)]
    variant: VariantArg,

    /// Seconds on each side's clock
    #[arg(long)]
    clock: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    max_plies: usize,

    /// Base seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Start position
    #[arg(long)]
    fen: Option<String>,

    /// Directory holding JSON bot profiles
    #[arg(long, default_value = "profiles")]
    profiles: PathBuf,

    /// List the saved profiles and exit
    #[arg(long)]
    list_profiles: bool,

    /// More output; repeat for trace level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn resolve(spec: &str, profiles: &Path) -> chess_bots::EngineResult<BotConfig> {
    match spec.strip_prefix('@') {
        Some(name) => load_profile(profiles, name),
        None => spec.parse(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    if args.list_profiles {
        for name in list_profiles(&args.profiles)? {
            println!("{name}");
        }
        return Ok(());
    }

    let white = resolve(&args.white, &args.profiles)?.build();
    let black = resolve(&args.black, &args.profiles)?.build();
    let settings = MatchSettings {
        rules: args.variant.into(),
        fen: args.fen,
        clock: args.clock,
        max_plies: args.max_plies,
        seed: args.seed,
    };

    if args.games <= 1 {
        let record = play_game(white.as_ref(), black.as_ref(), &settings, 0)?;
        println!("{}", record.moves.join(" "));
        println!("{} ({:?})", record.result, record.termination);
        return Ok(());
    }

    let summary = play_match(white.as_ref(), black.as_ref(), args.games, &settings)?;
    println!(
        "{} vs {}: +{} -{} ={} ({:.1}%)",
        white.name(),
        black.name(),
        summary.wins,
        summary.losses,
        summary.draws,
        summary.score() * 100.0
    );
    Ok(())
}
