use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::GameSpec;
use crate::score::Outcome;

static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^wordle\s+(\d{1,3}(?:[ ,.]\d{3})+|\d+)[^\w/]+([0-9x]{1,2})\s*/\s*(\d{1,2})(\*)?")
        .unwrap()
});

/// `Wordle 842 4/6`, `Wordle 1,042 X/6*`, `Wordle 1 042 4/6`. A trailing `*`
/// marks hard mode.
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);
    let caps = RESULT_LINE
        .captures(text.trim())
        .ok_or(ParseError::MissingResult)?;

    let number = tokens::puzzle_number(&caps[1])?;
    let outcome = tokens::fraction_outcome(spec, &caps[2], &caps[3], raw)?;

    Ok(outcome
        .with_puzzle_number(number)
        .with_hard_mode(caps.get(4).is_some()))
}
