use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use super::RegistryError;
use crate::parsers::ParseError;
use crate::score::Outcome;

/// Parser entry point shared by every game family.
pub type ParserFn = fn(&GameSpec, &str) -> Result<Outcome, ParseError>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Game {
    Wordle,
    Nerdle,
    MiniNerdle,
    MicroNerdle,
    InstantNerdle,
    Quordle,
    Sequence,
    Flagle,
    FlagleIo,
    Angle,
    Countryle,
    Capitale,
    MiniCrossword,
}

impl Game {
    pub fn name(&self) -> &'static str {
        match self {
            Game::Wordle => "Wordle",
            Game::Nerdle => "Nerdle",
            Game::MiniNerdle => "Mini nerdle",
            Game::MicroNerdle => "Micro nerdle",
            Game::InstantNerdle => "Instant nerdle",
            Game::Quordle => "Quordle",
            Game::Sequence => "Sequence",
            Game::Flagle => "Flagle",
            Game::FlagleIo => "Flagle.io",
            Game::Angle => "Angle",
            Game::Countryle => "Countryle",
            Game::Capitale => "Capitale",
            Game::MiniCrossword => "Mini crossword",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        Game::iter()
            .find(|game| game.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown game: {s}"))
    }
}

/// How a game's native result is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    BoundedAttempts,
    UnboundedAttempts,
    ElapsedTime,
    CategoricalGuesses,
}

impl ScoreScale {
    pub fn is_timed(&self) -> bool {
        matches!(self, ScoreScale::ElapsedTime)
    }
}

/// Static descriptor of one supported game.
#[derive(Debug, Clone)]
pub struct GameSpec {
    pub game: Game,
    /// Identifier phrase; must be unique across a registry.
    pub keyword: &'static str,
    pub scale: ScoreScale,
    pub max_attempts: Option<u32>,
    /// Number of boards reported by one share. Greater than one for composite games.
    pub sub_puzzles: usize,
    pub samples: &'static [&'static str],
    detection: Regex,
    parser: ParserFn,
}

impl GameSpec {
    /// `detection` is matched against trimmed, lower-cased message text.
    pub fn new(
        game: Game,
        keyword: &'static str,
        detection: &str,
        scale: ScoreScale,
        max_attempts: Option<u32>,
        parser: ParserFn,
    ) -> Result<Self, RegistryError> {
        let detection = Regex::new(detection).map_err(|err| RegistryError::InvalidDetectionRule {
            game,
            reason: err.to_string(),
        })?;

        Ok(Self {
            game,
            keyword,
            scale,
            max_attempts,
            sub_puzzles: 1,
            samples: &[],
            detection,
            parser,
        })
    }

    pub fn with_sub_puzzles(mut self, sub_puzzles: usize) -> Self {
        self.sub_puzzles = sub_puzzles;
        self
    }

    pub fn with_samples(mut self, samples: &'static [&'static str]) -> Self {
        self.samples = samples;
        self
    }

    pub fn is_composite(&self) -> bool {
        self.sub_puzzles > 1
    }

    pub fn detects(&self, normalized: &str) -> bool {
        self.detection.is_match(normalized)
    }

    pub fn parse(&self, raw: &str) -> Result<Outcome, ParseError> {
        (self.parser)(self, raw)
    }
}
