use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::games::Game;
use crate::score::Outcome;

/// A chat message as handed over by the channel fetcher. Ids are totally
/// ordered: a larger id was posted later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: u64,
        author: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            timestamp,
        }
    }
}

/// Uniqueness key of the dataset. Field order gives chronological ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub day: NaiveDate,
    pub author: String,
    pub game: Game,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub author: String,
    pub game: Game,
    pub day: NaiveDate,
    pub outcome: Outcome,
    pub message_id: u64,
}

impl Record {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            day: self.day,
            author: self.author.clone(),
            game: self.game,
        }
    }

    pub fn to_row(&self) -> RecordRow {
        RecordRow {
            day: self.day,
            author: self.author.clone(),
            game: self.game.to_string(),
            success: self.outcome.success,
            attempts: self.outcome.attempts,
            max_attempts: self.outcome.max_attempts,
            elapsed_secs: self.outcome.elapsed_secs,
            puzzle_number: self.outcome.puzzle_number,
            score_code: self.outcome.score_code(),
            hard_mode: self.outcome.hard_mode,
            raw: self.outcome.raw.clone(),
            message_id: self.message_id,
        }
    }
}

/// Flat shape handed to tabular analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub day: NaiveDate,
    pub author: String,
    pub game: String,
    pub success: bool,
    pub attempts: Option<u32>,
    pub max_attempts: Option<u32>,
    pub elapsed_secs: Option<u32>,
    pub puzzle_number: Option<u32>,
    pub score_code: Option<String>,
    pub hard_mode: bool,
    pub raw: String,
    pub message_id: u64,
}
