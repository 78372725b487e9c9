// Library crate for puzzle score ingestion
// Reads puzzle-game share messages and keeps a deduplicated score dataset

pub mod config;
pub mod dataset;
pub mod games;
pub mod ingest;
pub mod parsers;
pub mod records;
pub mod score;

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, IngestConfig};
pub use dataset::{
    merge, merge_in_place, Dataset, DatasetError, DatasetRepository, InMemoryDatasetRepository,
    MergeSummary,
};
pub use games::{Game, GameRegistry, GameSpec, RegistryError, ScoreScale};
pub use ingest::{
    Classification, IngestReport, IngestService, ParsedMessage, UnparsableShare,
    UnrecognizedReason,
};
pub use parsers::ParseError;
pub use records::{Message, Record, RecordBuilder, RecordKey, RecordRow};
pub use score::{normalize, Outcome};
