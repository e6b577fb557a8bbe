// src/config.rs

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bots::minimax::SearchSettings;
use crate::bots::{Bot, MinimaxBot, MobilityBot, SimpleBot, TieredBot};
use crate::error::{EngineError, EngineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    Simple,
    Tiered,
    Minimax,
    Mobility,
}

impl BotKind {
    pub fn default_randomness(self) -> f64 {
        match self {
            BotKind::Simple => 1.0,
            BotKind::Tiered => 0.5,
            BotKind::Minimax | BotKind::Mobility => 0.3,
        }
    }
}

impl FromStr for BotKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(BotKind::Simple),
            "tiered" | "rule" | "botbot" => Ok(BotKind::Tiered),
            "minimax" => Ok(BotKind::Minimax),
            "mobility" => Ok(BotKind::Mobility),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotKind::Simple => "simple",
            BotKind::Tiered => "tiered",
            BotKind::Minimax => "minimax",
            BotKind::Mobility => "mobility",
        };
        f.write_str(name)
    }
}

/// Everything needed to build a bot; stored as a JSON profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub kind: BotKind,
    #[serde(default = "default_depth")]
    pub depth: u8,
    /// `None` takes the kind's default.
    #[serde(default)]
    pub randomness: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Nominal seconds per move for the search bots.
    #[serde(default)]
    pub think_time: Option<f64>,
}

fn default_depth() -> u8 {
    3
}

impl BotConfig {
    pub fn new(kind: BotKind) -> Self {
        Self {
            kind,
            depth: default_depth(),
            randomness: None,
            seed: None,
            think_time: None,
        }
    }

    pub fn randomness(&self) -> f64 {
        self.randomness.unwrap_or_else(|| self.kind.default_randomness())
    }

    pub fn build(&self) -> Box<dyn Bot> {
        let randomness = self.randomness();
        match self.kind {
            BotKind::Simple => Box::new(SimpleBot::new(randomness, self.seed)),
            BotKind::Tiered => Box::new(TieredBot::new(randomness, self.seed)),
            BotKind::Minimax => Box::new(MinimaxBot::new(self.search_settings(randomness))),
            BotKind::Mobility => Box::new(MobilityBot::new(self.search_settings(randomness))),
        }
    }

    fn search_settings(&self, randomness: f64) -> SearchSettings {
        let settings = SearchSettings::new(self.depth, randomness, self.seed);
        match self.think_time {
            Some(seconds) => settings.with_think_time(seconds),
            None => settings,
        }
    }
}

/// `kind[:depth[:randomness[:seed]]]`, e.g. `minimax:4:0:17`. Empty fields
/// keep their defaults, so `tiered::0.2` is valid.
impl FromStr for BotConfig {
    type Err = EngineError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| EngineError::InvalidBotSpec {
            spec: spec.to_string(),
            message,
        };

        let mut parts = spec.split(':').map(str::trim);
        let kind_name = parts.next().unwrap_or_default();
        let kind = kind_name
            .parse::<BotKind>()
            .map_err(|_| invalid(format!("unknown bot kind '{kind_name}'")))?;
        let mut config = BotConfig::new(kind);

        if let Some(depth) = parts.next().filter(|s| !s.is_empty()) {
            config.depth = depth
                .parse()
                .map_err(|e| invalid(format!("bad depth '{depth}': {e}")))?;
        }
        if let Some(randomness) = parts.next().filter(|s| !s.is_empty()) {
            let value: f64 = randomness
                .parse()
                .map_err(|e| invalid(format!("bad randomness '{randomness}': {e}")))?;
            config.randomness = Some(value);
        }
        if let Some(seed) = parts.next().filter(|s| !s.is_empty()) {
            config.seed = Some(seed.parse().map_err(|e| invalid(format!("bad seed '{seed}': {e}")))?);
        }
        if parts.next().is_some() {
            return Err(invalid("too many fields".to_string()));
        }
        Ok(config)
    }
}

pub fn save_profile(dir: &Path, name: &str, config: &BotConfig) -> EngineResult<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", name));
    let json = serde_json::to_string_pretty(config)?;
    fs::File::create(path)?.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_profile(dir: &Path, name: &str) -> EngineResult<BotConfig> {
    let path = dir.join(format!("{}.json", name));
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Profile names in `dir`, sorted.
pub fn list_profiles(dir: &Path) -> EngineResult<Vec<String>> {
    let mut profiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                profiles.push(name.to_string());
            }
        }
    }
    profiles.sort();
    Ok(profiles)
}
