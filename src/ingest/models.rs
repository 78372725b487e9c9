use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::MergeSummary;
use crate::games::Game;
use crate::parsers::ParseError;
use crate::records::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedReason {
    /// Blank text, e.g. an attachment-only post.
    Empty,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Recognized(Game),
    Unrecognized(UnrecognizedReason),
}

/// A message that named a game but whose result could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsableShare {
    pub message_id: u64,
    pub author: String,
    pub game: Game,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: ParseError,
}

fn serialize_reason<S: serde::Serializer>(reason: &ParseError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Parsed(Record),
    Unrecognized(UnrecognizedReason),
    Unparsable(UnparsableShare),
}

/// Tally of one ingest pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub messages: usize,
    pub parsed: usize,
    pub parsed_by_game: BTreeMap<Game, usize>,
    pub empty: usize,
    pub unrecognized: usize,
    pub unparsable: Vec<UnparsableShare>,
    pub merge: MergeSummary,
}

impl IngestReport {
    pub(super) fn count(&mut self, parsed: &ParsedMessage) {
        self.messages += 1;
        match parsed {
            ParsedMessage::Parsed(record) => {
                self.parsed += 1;
                *self.parsed_by_game.entry(record.game).or_insert(0) += 1;
            }
            ParsedMessage::Unrecognized(UnrecognizedReason::Empty) => self.empty += 1,
            ParsedMessage::Unrecognized(UnrecognizedReason::Other) => self.unrecognized += 1,
            ParsedMessage::Unparsable(share) => self.unparsable.push(share.clone()),
        }
    }
}
