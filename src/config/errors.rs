use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid UTC offset {0:?}, expected e.g. +02:00")]
    InvalidOffset(String),

    #[error("Invalid re-fetch leeway {0:?}, expected a non-negative number of days")]
    InvalidLeeway(String),
}
