mod errors;
pub mod merger;
pub mod models;
pub mod repository;

pub use errors::DatasetError;
pub use merger::{merge, merge_in_place};
pub use models::{Dataset, MergeSummary};
pub use repository::{DatasetRepository, InMemoryDatasetRepository};
