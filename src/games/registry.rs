use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::debug;

use super::{Game, GameSpec, RegistryError, ScoreScale};
use crate::parsers;

/// Built-in registry, validated once on first use.
static DEFAULT_REGISTRY: LazyLock<GameRegistry> = LazyLock::new(|| {
    default_specs()
        .and_then(GameRegistry::new)
        .expect("built-in game registry must be collision-free")
});

/// Ordered set of game specs. Classification tests specs in registration order.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    specs: Vec<GameSpec>,
}

impl GameRegistry {
    /// Builds a registry, rejecting duplicate games, shared keywords and sample
    /// shares that are not detected by exactly their own spec.
    pub fn new(specs: Vec<GameSpec>) -> Result<Self, RegistryError> {
        let mut games: HashSet<Game> = HashSet::new();
        let mut keywords: HashMap<String, Game> = HashMap::new();

        for spec in &specs {
            if !games.insert(spec.game) {
                return Err(RegistryError::DuplicateGame(spec.game));
            }

            let keyword = spec.keyword.trim().to_lowercase();
            if let Some(first) = keywords.insert(keyword.clone(), spec.game) {
                return Err(RegistryError::KeywordCollision {
                    keyword,
                    first,
                    second: spec.game,
                });
            }
        }

        let registry = Self { specs };
        registry.validate_samples()?;

        debug!(games = registry.specs.len(), "Game registry validated");
        Ok(registry)
    }

    pub fn default_registry() -> &'static GameRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn specs(&self) -> &[GameSpec] {
        &self.specs
    }

    pub fn spec(&self, game: Game) -> Option<&GameSpec> {
        self.specs.iter().find(|spec| spec.game == game)
    }

    /// Returns the owning game of a message, or `None` for unrecognized text.
    pub fn classify(&self, raw: &str) -> Option<&GameSpec> {
        let normalized = normalize_text(raw);
        self.specs.iter().find(|spec| spec.detects(&normalized))
    }

    /// Every spec whose detection rule accepts the text. More than one entry is a
    /// configuration defect.
    pub fn matching_specs(&self, raw: &str) -> Vec<&GameSpec> {
        let normalized = normalize_text(raw);
        self.specs
            .iter()
            .filter(|spec| spec.detects(&normalized))
            .collect()
    }

    fn validate_samples(&self) -> Result<(), RegistryError> {
        for spec in &self.specs {
            for sample in spec.samples {
                let games: Vec<Game> = self
                    .matching_specs(sample)
                    .iter()
                    .map(|matched| matched.game)
                    .collect();

                if !games.contains(&spec.game) {
                    return Err(RegistryError::SampleNotDetected {
                        game: spec.game,
                        sample: sample.to_string(),
                    });
                }
                if games.len() > 1 {
                    return Err(RegistryError::AmbiguousSample {
                        sample: sample.to_string(),
                        games,
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn default_specs() -> Result<Vec<GameSpec>, RegistryError> {
    Ok(vec![
        GameSpec::new(
            Game::MiniCrossword,
            "mini:",
            r"^mini\d*:\s*-?\d",
            ScoreScale::ElapsedTime,
            None,
            parsers::crossword::parse,
        )?
        .with_samples(&["Mini1: 1m23s", "Mini: 45s"]),
        GameSpec::new(
            Game::Wordle,
            "wordle",
            r"^wordle\s+\d[\d,.]*(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::wordle::parse,
        )?
        .with_samples(&["Wordle 842 4/6", "Wordle 1,042 X/6*"]),
        GameSpec::new(
            Game::Nerdle,
            "nerdlegame",
            r"^nerdlegame\s+\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::nerdle::parse,
        )?
        .with_samples(&["nerdlegame 612 3/6"]),
        GameSpec::new(
            Game::MiniNerdle,
            "mini nerdlegame",
            r"^mini\s+nerdlegame\s+\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::nerdle::parse,
        )?
        .with_samples(&["mini nerdlegame 488 4/6"]),
        GameSpec::new(
            Game::MicroNerdle,
            "micro nerdlegame",
            r"^micro\s+nerdlegame\s+\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::nerdle::parse,
        )?
        .with_samples(&["micro nerdlegame 301 2/6"]),
        GameSpec::new(
            Game::InstantNerdle,
            "instant nerdle",
            r"(?s)^🟩+\s.*?\binstant\s+nerdle\s+\d+",
            ScoreScale::ElapsedTime,
            None,
            parsers::nerdle::parse,
        )?
        .with_samples(&["🟩🟩🟩🟩🟩🟩🟩🟩 I solved Instant Nerdle 415 in 1m 12s!"]),
        GameSpec::new(
            Game::Quordle,
            "daily quordle",
            r"^daily\s+quordle\s+#?\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(9),
            parsers::quordle::parse,
        )?
        .with_sub_puzzles(4)
        .with_samples(&["Daily Quordle 1234\n6\u{fe0f}\u{20e3}5\u{fe0f}\u{20e3}\n9\u{fe0f}\u{20e3}\u{1f7e5}"]),
        GameSpec::new(
            Game::Sequence,
            "daily sequence",
            r"^daily\s+sequence\s+#?\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(10),
            parsers::quordle::parse,
        )?
        .with_sub_puzzles(4)
        .with_samples(&["Daily Sequence #123\n4\u{fe0f}\u{20e3}6\u{fe0f}\u{20e3}\n8\u{fe0f}\u{20e3}\u{1f51f}"]),
        GameSpec::new(
            Game::Flagle,
            "flagle",
            r"^flagle\s+#\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::flagle::parse,
        )?
        .with_samples(&["Flagle #448 (24.04.2023) 3/6"]),
        GameSpec::new(
            Game::FlagleIo,
            "#flagle",
            r"^#flagle\s+#\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(6),
            parsers::flagle::parse,
        )?
        .with_samples(&["#Flagle #512 2/6"]),
        GameSpec::new(
            Game::Angle,
            "#angle",
            r"^#angle\s+#\d+(?:\s|$)",
            ScoreScale::BoundedAttempts,
            Some(4),
            parsers::angle::parse,
        )?
        .with_samples(&["#Angle #310 3/4"]),
        GameSpec::new(
            Game::Countryle,
            "#countryle",
            r"^#countryle\s+#?\d+(?:\s|$)",
            ScoreScale::CategoricalGuesses,
            Some(10),
            parsers::countryle::parse,
        )?
        .with_samples(&["#Countryle 454\nGuessed in 5 tries."]),
        GameSpec::new(
            Game::Capitale,
            "#capitale",
            r"^#capitale\s+#?\d+(?:\s|$)",
            ScoreScale::CategoricalGuesses,
            Some(8),
            parsers::countryle::parse,
        )?
        .with_samples(&["#Capitale 201\nGuessed in 2 tries."]),
    ])
}
