mod errors;

use chrono::FixedOffset;
use tracing::{debug, instrument};

pub use errors::ConfigError;

pub const UTC_OFFSET_VAR: &str = "CHANNEL_UTC_OFFSET";
pub const REFETCH_LEEWAY_VAR: &str = "REFETCH_LEEWAY_DAYS";
pub const DEFAULT_REFETCH_LEEWAY_DAYS: i64 = 3;

/// Settings supplied by whoever runs the channel fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestConfig {
    /// Timezone the channel's calendar days are counted in.
    pub utc_offset: FixedOffset,
    /// How many days before the latest stored day a re-fetch starts.
    pub refetch_leeway_days: i64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            utc_offset: utc(),
            refetch_leeway_days: DEFAULT_REFETCH_LEEWAY_DAYS,
        }
    }
}

impl IngestConfig {
    pub fn new(utc_offset: FixedOffset, refetch_leeway_days: i64) -> Self {
        Self {
            utc_offset,
            refetch_leeway_days,
        }
    }

    /// Reads `CHANNEL_UTC_OFFSET` and `REFETCH_LEEWAY_DAYS`, defaulting when unset.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        let offset = std::env::var(UTC_OFFSET_VAR).ok();
        let leeway = std::env::var(REFETCH_LEEWAY_VAR).ok();
        let config = Self::from_values(offset.as_deref(), leeway.as_deref())?;

        debug!(
            utc_offset = %config.utc_offset,
            refetch_leeway_days = config.refetch_leeway_days,
            "Loaded ingest configuration"
        );
        Ok(config)
    }

    pub fn from_values(offset: Option<&str>, leeway: Option<&str>) -> Result<Self, ConfigError> {
        let utc_offset = match offset.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => parse_offset(value)?,
            None => utc(),
        };

        let refetch_leeway_days = match leeway.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or_else(|| ConfigError::InvalidLeeway(value.to_string()))?,
            None => DEFAULT_REFETCH_LEEWAY_DAYS,
        };

        Ok(Self::new(utc_offset, refetch_leeway_days))
    }
}

fn utc() -> FixedOffset {
    chrono::Offset::fix(&chrono::Utc)
}

/// Accepts `Z`, `UTC`, `+HH`, `+HHMM` and `+HH:MM` (or `-`).
fn parse_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Ok(utc());
    }

    let bare_hours = value.len() == 3
        && value
            .get(1..)
            .is_some_and(|hours| hours.bytes().all(|b| b.is_ascii_digit()));
    let value_with_minutes = if bare_hours {
        format!("{value}:00")
    } else {
        value.to_string()
    };

    value_with_minutes
        .parse::<FixedOffset>()
        .map_err(|_| ConfigError::InvalidOffset(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_when_unset() {
        let config = IngestConfig::from_values(None, None).unwrap();
        assert_eq!(config, IngestConfig::default());
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
        assert_eq!(config.refetch_leeway_days, 3);
    }

    #[rstest]
    #[case("+02:00", 7200)]
    #[case("-05:30", -19800)]
    #[case("+0100", 3600)]
    #[case("+09", 32400)]
    #[case("-03", -10800)]
    #[case("Z", 0)]
    #[case("utc", 0)]
    fn test_offsets(#[case] value: &str, #[case] seconds: i32) {
        let config = IngestConfig::from_values(Some(value), None).unwrap();
        assert_eq!(config.utc_offset.local_minus_utc(), seconds);
    }

    #[rstest]
    #[case("02:00")]
    #[case("+2")]
    #[case("09")]
    #[case("+02:75")]
    #[case("+24:00")]
    #[case("+ab:cd")]
    #[case("Europe/Oslo")]
    fn test_rejects_bad_offsets(#[case] value: &str) {
        assert_eq!(
            IngestConfig::from_values(Some(value), None),
            Err(ConfigError::InvalidOffset(value.to_string()))
        );
    }

    #[test]
    fn test_leeway() {
        let config = IngestConfig::from_values(None, Some("7")).unwrap();
        assert_eq!(config.refetch_leeway_days, 7);

        assert!(matches!(
            IngestConfig::from_values(None, Some("-1")),
            Err(ConfigError::InvalidLeeway(_))
        ));
        assert!(matches!(
            IngestConfig::from_values(None, Some("soon")),
            Err(ConfigError::InvalidLeeway(_))
        ));
    }
}
