use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use super::{Classification, IngestReport, ParsedMessage, UnparsableShare, UnrecognizedReason};
use crate::config::IngestConfig;
use crate::dataset::{Dataset, DatasetError, DatasetRepository};
use crate::games::{registry::normalize_text, GameRegistry, GameSpec};
use crate::records::{Message, RecordBuilder};
use crate::score;

/// Classifies, parses and stores shares from channel messages.
pub struct IngestService {
    registry: Arc<GameRegistry>,
    builder: RecordBuilder,
    refetch_leeway_days: i64,
    repository: Arc<dyn DatasetRepository>,
}

impl IngestService {
    pub fn builder(repository: Arc<dyn DatasetRepository>) -> IngestServiceBuilder {
        IngestServiceBuilder::new(repository)
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn classify(&self, text: &str) -> Classification {
        match self.find_spec(text) {
            Ok(spec) => Classification::Recognized(spec.game),
            Err(reason) => Classification::Unrecognized(reason),
        }
    }

    fn find_spec(&self, text: &str) -> Result<&GameSpec, UnrecognizedReason> {
        if normalize_text(text).is_empty() {
            return Err(UnrecognizedReason::Empty);
        }
        self.registry
            .classify(text)
            .ok_or(UnrecognizedReason::Other)
    }

    /// Turns one message into a record, or says why it isn't one. Pure.
    pub fn parse_message(&self, message: &Message) -> ParsedMessage {
        let spec = match self.find_spec(&message.content) {
            Ok(spec) => spec,
            Err(reason) => {
                debug!(message_id = message.id, reason = ?reason, "Skipping unrecognized message");
                return ParsedMessage::Unrecognized(reason);
            }
        };
        let game = spec.game;

        match spec.parse(&message.content) {
            Ok(outcome) => {
                let outcome = score::normalize(spec, outcome);
                ParsedMessage::Parsed(self.builder.build(message, spec, outcome))
            }
            Err(reason) => {
                warn!(
                    message_id = message.id,
                    author = %message.author,
                    game = %game,
                    reason = %reason,
                    "Unparsable share"
                );
                ParsedMessage::Unparsable(UnparsableShare {
                    message_id: message.id,
                    author: message.author.clone(),
                    game,
                    reason,
                })
            }
        }
    }

    /// Parses a batch and merges every record in one step.
    #[instrument(skip(self, messages), fields(batch = messages.len()))]
    pub async fn ingest(&self, messages: &[Message]) -> Result<IngestReport, DatasetError> {
        let mut report = IngestReport::default();
        let mut records = Vec::new();

        for message in messages {
            let parsed = self.parse_message(message);
            report.count(&parsed);
            if let ParsedMessage::Parsed(record) = parsed {
                records.push(record);
            }
        }

        report.merge = self.repository.merge_records(records).await?;

        debug!(
            parsed = report.parsed,
            empty = report.empty,
            unrecognized = report.unrecognized,
            unparsable = report.unparsable.len(),
            "Ingest pass complete"
        );
        Ok(report)
    }

    pub async fn dataset(&self) -> Result<Dataset, DatasetError> {
        self.repository.snapshot().await
    }

    /// Earliest day the next history fetch should start from.
    pub async fn refetch_cutoff(&self) -> Result<Option<NaiveDate>, DatasetError> {
        let dataset = self.repository.snapshot().await?;
        Ok(dataset.refetch_cutoff(self.refetch_leeway_days))
    }
}

pub struct IngestServiceBuilder {
    registry: Arc<GameRegistry>,
    config: IngestConfig,
    repository: Arc<dyn DatasetRepository>,
}

impl IngestServiceBuilder {
    fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            registry: Arc::new(GameRegistry::default_registry().clone()),
            config: IngestConfig::default(),
            repository,
        }
    }

    pub fn with_registry(mut self, registry: GameRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_config(mut self, config: IngestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> IngestService {
        IngestService {
            registry: self.registry,
            builder: RecordBuilder::new(self.config.utc_offset),
            refetch_leeway_days: self.config.refetch_leeway_days,
            repository: self.repository,
        }
    }
}
