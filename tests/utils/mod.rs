pub mod assertions;
pub mod message_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::DatasetAssertion;
#[allow(unused_imports)]
pub use message_builders::{MessageBuilder, MessageLog};
#[allow(unused_imports)]
pub use setup::{init_tracing, TestSetup, TestSetupBuilder};
