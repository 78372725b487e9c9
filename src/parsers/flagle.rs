use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::{Game, GameSpec};
use crate::score::Outcome;

static FLAGLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^flagle\s+#(\d+)(?:\s*\([^)]*\))?[^\w/]+([0-9x]{1,2})\s*/\s*(\d{1,2})")
        .unwrap()
});

static FLAGLE_IO_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#flagle\s+#(\d+)[^\w/]+([0-9x]{1,2})\s*/\s*(\d{1,2})").unwrap()
});

/// `Flagle #448 (24.04.2023) 3/6` and `#Flagle #512 2/6`.
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);
    let pattern = match spec.game {
        Game::FlagleIo => &FLAGLE_IO_LINE,
        _ => &FLAGLE_LINE,
    };

    let caps = pattern
        .captures(text.trim())
        .ok_or(ParseError::MissingResult)?;
    let number = tokens::puzzle_number(&caps[1])?;
    let outcome = tokens::fraction_outcome(spec, &caps[2], &caps[3], raw)?;

    Ok(outcome.with_puzzle_number(number))
}
