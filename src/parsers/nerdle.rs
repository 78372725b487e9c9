use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::{Game, GameSpec};
use crate::score::Outcome;

static CLASSIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:mini|micro)\s+)?nerdlegame\s+(\d+)[^\w/]+([0-9x]{1,2})\s*/\s*(\d{1,2})",
    )
    .unwrap()
});

static INSTANT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\binstant\s+nerdle\s+(\d+)\b.*?\bin\s+(\d{1,2})\s*m\s*(\d{1,2})\s*s\b")
        .unwrap()
});

/// Nerdle, Mini and Micro share `<keyword> nerdlegame <num> <n>/6`; Instant
/// reports a solve time instead of a count.
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);

    if spec.game == Game::InstantNerdle {
        let caps = INSTANT_LINE
            .captures(&text)
            .ok_or(ParseError::MissingResult)?;
        let number = tokens::puzzle_number(&caps[1])?;
        let secs = tokens::elapsed_secs(Some(&caps[2]), Some(&caps[3]))?;
        return Ok(Outcome::timed(spec.game, secs, raw).with_puzzle_number(number));
    }

    let caps = CLASSIC_LINE
        .captures(text.trim())
        .ok_or(ParseError::MissingResult)?;
    let number = tokens::puzzle_number(&caps[1])?;
    let outcome = tokens::fraction_outcome(spec, &caps[2], &caps[3], raw)?;

    Ok(outcome.with_puzzle_number(number))
}
