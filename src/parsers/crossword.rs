use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::GameSpec;
use crate::score::Outcome;

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^mini\d*:").unwrap());

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(\d{1,2})\s*m\s*(\d{1,2})\s*s|(\d{1,2})\s*m|(\d{1,3})\s*s)$").unwrap()
});

/// Hand-typed `Mini1: 1m23s`. Minutes or seconds may be omitted, not both; a
/// bare seconds count may run past a minute (`Mini1: 125s`).
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);
    let text = text.trim();

    let header = HEADER.find(text).ok_or(ParseError::MissingResult)?;
    let line = text[header.end()..]
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    let value = line.trim_matches(|c: char| !c.is_alphanumeric() && c != '-');

    let caps = DURATION
        .captures(value)
        .ok_or_else(|| ParseError::InvalidDuration(value.to_string()))?;
    let field = |a: usize, b: usize| caps.get(a).or_else(|| caps.get(b)).map(|m| m.as_str());
    let secs = tokens::elapsed_secs(field(1, 3), field(2, 4))?;

    Ok(Outcome::timed(spec.game, secs, raw))
}
