//! Channel history builders
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use puzzlescores::Message;

pub struct MessageBuilder {
    id: u64,
    author: String,
    content: String,
    timestamp: DateTime<Utc>,
}

impl MessageBuilder {
    pub fn new(id: u64, content: &str) -> Self {
        Self {
            id,
            author: "alice".to_string(),
            content: content.to_string(),
            timestamp: Utc.with_ymd_and_hms(2023, 10, 8, 12, 0, 0).unwrap(),
        }
    }

    pub fn by(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn on_day(mut self, day: u32) -> Self {
        self.timestamp = Utc.with_ymd_and_hms(2023, 10, day, 12, 0, 0).unwrap();
        self
    }

    pub fn build(self) -> Message {
        Message::new(self.id, self.author, self.content, self.timestamp)
    }
}

/// A run of channel history with increasing message ids and timestamps.
pub struct MessageLog {
    next_id: u64,
    clock: DateTime<Utc>,
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: first_id,
            clock: Utc.with_ymd_and_hms(2023, 10, 1, 9, 0, 0).unwrap(),
            messages: vec![],
        }
    }

    pub fn post(mut self, author: &str, content: &str) -> Self {
        self.messages.push(
            MessageBuilder::new(self.next_id, content)
                .by(author)
                .at(self.clock)
                .build(),
        );
        self.next_id += 1;
        self.clock += Duration::minutes(17);
        self
    }

    /// Moves to 09:00 on the next day.
    pub fn next_day(mut self) -> Self {
        let tomorrow = self.clock.date_naive() + Duration::days(1);
        self.clock = Utc.from_utc_datetime(&tomorrow.and_hms_opt(9, 0, 0).unwrap());
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}
