use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use super::{Message, Record};
use crate::games::GameSpec;
use crate::score::Outcome;

/// Turns parsed outcomes into records, dating them in the channel's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordBuilder {
    utc_offset: FixedOffset,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::utc()
    }
}

impl RecordBuilder {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Calendar day the message was posted on, in the channel's timezone.
    pub fn calendar_day(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.utc_offset).date_naive()
    }

    pub fn build(&self, message: &Message, spec: &GameSpec, outcome: Outcome) -> Record {
        Record {
            author: message.author.clone(),
            game: spec.game,
            day: self.calendar_day(message.timestamp),
            outcome,
            message_id: message.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Game, GameRegistry};
    use chrono::TimeZone;

    fn message(ts: DateTime<Utc>) -> Message {
        Message::new(7, "bob", "Wordle 842 4/6", ts)
    }

    #[test]
    fn test_builds_record_from_message() {
        let spec = GameRegistry::default_registry().spec(Game::Wordle).unwrap();
        let msg = message(Utc.with_ymd_and_hms(2023, 10, 8, 12, 0, 0).unwrap());
        let outcome = spec.parse(&msg.content).unwrap();

        let record = RecordBuilder::utc().build(&msg, spec, outcome.clone());
        assert_eq!(record.author, "bob");
        assert_eq!(record.game, Game::Wordle);
        assert_eq!(record.day, NaiveDate::from_ymd_opt(2023, 10, 8).unwrap());
        assert_eq!(record.message_id, 7);
        assert_eq!(record.outcome, outcome);
    }

    #[test]
    fn test_calendar_day_uses_channel_offset() {
        let late_utc = Utc.with_ymd_and_hms(2023, 10, 8, 23, 30, 0).unwrap();

        let utc = RecordBuilder::utc();
        assert_eq!(utc.calendar_day(late_utc), NaiveDate::from_ymd_opt(2023, 10, 8).unwrap());

        let oslo = RecordBuilder::new(FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(oslo.calendar_day(late_utc), NaiveDate::from_ymd_opt(2023, 10, 9).unwrap());

        let early_utc = Utc.with_ymd_and_hms(2023, 10, 8, 2, 0, 0).unwrap();
        let new_york = RecordBuilder::new(FixedOffset::west_opt(4 * 3600).unwrap());
        assert_eq!(new_york.calendar_day(early_utc), NaiveDate::from_ymd_opt(2023, 10, 7).unwrap());
    }
}
