pub mod models;
pub mod service;

pub use models::{Classification, IngestReport, ParsedMessage, UnparsableShare, UnrecognizedReason};
pub use service::{IngestService, IngestServiceBuilder};
