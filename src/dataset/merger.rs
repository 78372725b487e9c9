//! Last-write-wins merging keyed by (day, author, game).
//!
//! Recency is the source message id, never the order of merge calls, so
//! re-merging an overlapping window of history leaves the dataset as it was.

use std::collections::BTreeMap;

use super::{Dataset, MergeSummary};
use crate::records::{Record, RecordKey};

/// Returns the merged dataset and leaves `dataset` untouched.
pub fn merge(
    dataset: &Dataset,
    records: impl IntoIterator<Item = Record>,
) -> (Dataset, MergeSummary) {
    let mut merged = dataset.clone();
    let summary = merge_in_place(&mut merged, records);
    (merged, summary)
}

/// Resolves the whole batch before touching `dataset`, then applies it.
pub fn merge_in_place(
    dataset: &mut Dataset,
    records: impl IntoIterator<Item = Record>,
) -> MergeSummary {
    let mut summary = MergeSummary::default();
    let candidates = latest_per_key(records, &mut summary);

    let mut staged: Vec<(RecordKey, Record)> = Vec::with_capacity(candidates.len());
    for (key, candidate) in candidates {
        match dataset.get(&key) {
            None => {
                summary.inserted += 1;
                staged.push((key, candidate));
            }
            Some(existing) if candidate.message_id < existing.message_id => {
                summary.superseded += 1;
            }
            Some(existing) if *existing == candidate => {
                summary.unchanged += 1;
            }
            Some(_) => {
                summary.replaced += 1;
                staged.push((key, candidate));
            }
        }
    }

    dataset.entries_mut().extend(staged);
    summary
}

/// Collapses a batch to one candidate per key. Equal ids keep the later one.
fn latest_per_key(
    records: impl IntoIterator<Item = Record>,
    summary: &mut MergeSummary,
) -> BTreeMap<RecordKey, Record> {
    let mut latest: BTreeMap<RecordKey, Record> = BTreeMap::new();

    for record in records {
        let key = record.key();
        match latest.get(&key) {
            Some(current) if current.message_id > record.message_id => {
                summary.superseded += 1;
            }
            Some(_) => {
                summary.superseded += 1;
                latest.insert(key, record);
            }
            None => {
                latest.insert(key, record);
            }
        }
    }

    latest
}
