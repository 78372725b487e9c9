use thiserror::Error;

use super::Game;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid detection rule for {game}: {reason}")]
    InvalidDetectionRule { game: Game, reason: String },

    #[error("{0} is registered more than once")]
    DuplicateGame(Game),

    #[error("Keyword \"{keyword}\" is claimed by both {first} and {second}")]
    KeywordCollision {
        keyword: String,
        first: Game,
        second: Game,
    },

    #[error("Sample share for {game} is not detected by its own rule: {sample:?}")]
    SampleNotDetected { game: Game, sample: String },

    #[error("Sample share is detected by several games {games:?}: {sample:?}")]
    AmbiguousSample { sample: String, games: Vec<Game> },
}
