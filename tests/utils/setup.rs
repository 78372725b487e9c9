use std::sync::Arc;

use chrono::FixedOffset;
use tracing_subscriber::EnvFilter;

use puzzlescores::{Dataset, DatasetRepository, InMemoryDatasetRepository, IngestConfig, IngestService};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Installs a test-writer subscriber once per test binary. `RUST_LOG` applies.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub struct TestSetup {
    pub service: IngestService,
    pub repository: Arc<InMemoryDatasetRepository>,
}

impl TestSetup {
    pub async fn dataset(&self) -> Dataset {
        self.repository
            .snapshot()
            .await
            .expect("snapshot should succeed")
    }
}

pub struct TestSetupBuilder {
    config: IngestConfig,
    prior: Option<Dataset>,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            config: IngestConfig::default(),
            prior: None,
        }
    }

    pub fn with_offset_hours(mut self, hours: i32) -> Self {
        self.config.utc_offset = FixedOffset::east_opt(hours * 3600).expect("valid offset");
        self
    }

    pub fn with_leeway_days(mut self, days: i64) -> Self {
        self.config.refetch_leeway_days = days;
        self
    }

    pub fn with_prior_dataset(mut self, dataset: Dataset) -> Self {
        self.prior = Some(dataset);
        self
    }

    pub fn build(self) -> TestSetup {
        init_tracing();

        let repository = Arc::new(match self.prior {
            Some(dataset) => InMemoryDatasetRepository::with_dataset(dataset),
            None => InMemoryDatasetRepository::new(),
        });
        let service = IngestService::builder(repository.clone())
            .with_config(self.config)
            .build();

        TestSetup {
            service,
            repository,
        }
    }
}
