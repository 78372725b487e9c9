pub mod builder;
pub mod models;

pub use builder::RecordBuilder;
pub use models::{Message, Record, RecordKey, RecordRow};
