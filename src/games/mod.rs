mod errors;
pub mod registry;
pub mod types;

pub use errors::RegistryError;
pub use registry::GameRegistry;
pub use types::{Game, GameSpec, ParserFn, ScoreScale};
