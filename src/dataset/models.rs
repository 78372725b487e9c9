use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::merger;
use crate::records::{Record, RecordKey, RecordRow};

/// Deduplicated records, at most one per (day, author, game).
/// Persists as a flat list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct Dataset {
    records: BTreeMap<RecordKey, Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads prior state. Duplicate keys resolve the same way a merge does.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        merger::merge(&Self::new(), records).0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records ordered by day, then by source message id.
    pub fn records(&self) -> Vec<&Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by_key(|record| (record.day, record.message_id));
        records
    }

    pub fn rows(&self) -> Vec<RecordRow> {
        self.records().into_iter().map(Record::to_row).collect()
    }

    pub fn latest_day(&self) -> Option<NaiveDate> {
        self.records.keys().map(|key| key.day).max()
    }

    /// Earliest day a re-fetch has to cover so late corrections are picked up.
    /// `None` for an empty dataset, meaning the whole history.
    pub fn refetch_cutoff(&self, leeway_days: i64) -> Option<NaiveDate> {
        self.latest_day()
            .map(|day| day - Duration::days(leeway_days.max(0)))
    }

    pub(super) fn entries_mut(&mut self) -> &mut BTreeMap<RecordKey, Record> {
        &mut self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}

impl From<Dataset> for Vec<Record> {
    fn from(dataset: Dataset) -> Self {
        dataset.records.into_values().collect()
    }
}

/// What a merge did with each incoming record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// New keys.
    pub inserted: usize,
    /// Existing keys taken over by a later message.
    pub replaced: usize,
    /// Identical to what was already stored.
    pub unchanged: usize,
    /// Lost to a later message, in the batch or in the dataset.
    pub superseded: usize,
}

impl MergeSummary {
    pub fn changed(&self) -> bool {
        self.inserted + self.replaced > 0
    }

    pub fn total(&self) -> usize {
        self.inserted + self.replaced + self.unchanged + self.superseded
    }
}
