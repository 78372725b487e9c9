//! Dataset assertion helpers - fluent API for verifying stored records
#![allow(dead_code)]

use std::collections::HashSet;

use chrono::NaiveDate;

use puzzlescores::{Dataset, Game, Record};

pub struct DatasetAssertion<'a> {
    dataset: &'a Dataset,
}

impl<'a> DatasetAssertion<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn has_len(self, expected: usize) -> Self {
        assert_eq!(self.dataset.len(), expected, "unexpected record count");
        self
    }

    /// No two records share (author, game, day).
    pub fn has_unique_keys(self) -> Self {
        let keys: HashSet<_> = self.dataset.iter().map(Record::key).collect();
        assert_eq!(keys.len(), self.dataset.len(), "duplicate record keys");
        self
    }

    /// Returns the single record stored for the author and game on that day.
    pub fn record(&self, author: &str, game: Game, day: NaiveDate) -> &'a Record {
        let found: Vec<&Record> = self
            .dataset
            .iter()
            .filter(|r| r.author == author && r.game == game && r.day == day)
            .collect();

        assert_eq!(found.len(), 1, "expected one {game} record for {author} on {day}");
        found[0]
    }

    pub fn lacks(self, author: &str, game: Game) -> Self {
        assert!(
            self.dataset
                .iter()
                .all(|r| !(r.author == author && r.game == game)),
            "unexpected {game} record for {author}"
        );
        self
    }
}
