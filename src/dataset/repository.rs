use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::{merger, Dataset, DatasetError, MergeSummary};
use crate::records::Record;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Applies a batch atomically: either every resolved change lands or none.
    async fn merge_records(&self, records: Vec<Record>) -> Result<MergeSummary, DatasetError>;
    async fn snapshot(&self) -> Result<Dataset, DatasetError>;
    async fn restore(&self, dataset: Dataset) -> Result<(), DatasetError>;
}

#[derive(Debug, Default)]
pub struct InMemoryDatasetRepository {
    dataset: Arc<RwLock<Dataset>>,
}

impl InMemoryDatasetRepository {
    pub fn new() -> Self {
        Self::with_dataset(Dataset::new())
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
        }
    }
}

#[async_trait]
impl DatasetRepository for InMemoryDatasetRepository {
    #[instrument(skip(self, records), fields(batch = records.len()))]
    async fn merge_records(&self, records: Vec<Record>) -> Result<MergeSummary, DatasetError> {
        // Held across resolve and commit so two merges never interleave.
        let mut dataset = self.dataset.write().await;

        let (merged, summary) = merger::merge(&dataset, records);
        if summary.changed() {
            *dataset = merged;
        }

        info!(
            inserted = summary.inserted,
            replaced = summary.replaced,
            unchanged = summary.unchanged,
            superseded = summary.superseded,
            total = dataset.len(),
            "Merged records into dataset"
        );
        Ok(summary)
    }

    async fn snapshot(&self) -> Result<Dataset, DatasetError> {
        let dataset = self.dataset.read().await;
        Ok(dataset.clone())
    }

    #[instrument(skip(self, dataset), fields(records = dataset.len()))]
    async fn restore(&self, dataset: Dataset) -> Result<(), DatasetError> {
        debug!("Replacing dataset");
        *self.dataset.write().await = dataset;
        Ok(())
    }
}
