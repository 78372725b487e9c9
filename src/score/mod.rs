pub mod models;
pub mod normalizer;

pub use models::Outcome;
pub use normalizer::normalize;
