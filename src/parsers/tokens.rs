//! Token helpers shared by the per-game parsers.

use super::ParseError;
use crate::games::GameSpec;
use crate::score::Outcome;

/// Drops invisible emoji modifiers and joiners that copy/paste leaves around
/// score tokens, and turns non-breaking spaces into plain ones.
pub fn strip_decorations(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            !matches!(
                c,
                '\u{fe0e}' | '\u{fe0f}' | '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{2060}'
            )
        })
        .map(|c| match c {
            '\u{00a0}' | '\u{202f}' => ' ',
            other => other,
        })
        .collect()
}

/// Parses a puzzle number, tolerating `#` prefixes and thousands separators
/// (`1,042`, `1.042`, `1 042`).
pub fn puzzle_number(token: &str) -> Result<u32, ParseError> {
    let digits: String = token
        .chars()
        .filter(|c| !matches!(c, '#' | ',' | '.' | '\'' | ' '))
        .collect();

    digits
        .parse()
        .map_err(|_| ParseError::InvalidPuzzleNumber(token.to_string()))
}

/// Resolves an `<count>/<limit>` pair against the spec's maximum.
pub fn fraction_outcome(
    spec: &GameSpec,
    count: &str,
    limit: &str,
    raw: &str,
) -> Result<Outcome, ParseError> {
    let max = bounded_max(spec)?;
    let found: u32 = limit
        .parse()
        .map_err(|_| ParseError::InvalidAttempts(format!("{count}/{limit}")))?;

    if found != max {
        return Err(ParseError::LimitMismatch {
            expected: max,
            found,
        });
    }

    count_outcome(spec, count, raw)
}

/// Resolves a bare attempt count. `X` and counts above the maximum are failures.
pub fn count_outcome(spec: &GameSpec, count: &str, raw: &str) -> Result<Outcome, ParseError> {
    let max = bounded_max(spec)?;

    if count.eq_ignore_ascii_case("x") {
        return Ok(Outcome::failed(spec.game, max, raw));
    }

    let attempts: u32 = count
        .parse()
        .map_err(|_| ParseError::InvalidAttempts(count.to_string()))?;

    match attempts {
        0 => Err(ParseError::InvalidAttempts(count.to_string())),
        n if n > max => Ok(Outcome::failed(spec.game, max, raw)),
        n => Ok(Outcome::solved(spec.game, n, max, raw)),
    }
}

/// Total seconds from optional minute and second fields.
pub fn elapsed_secs(minutes: Option<&str>, seconds: Option<&str>) -> Result<u32, ParseError> {
    let field = |value: Option<&str>| -> Result<Option<u32>, ParseError> {
        value
            .map(|v| {
                v.parse::<u32>()
                    .map_err(|_| ParseError::InvalidDuration(v.to_string()))
            })
            .transpose()
    };

    let minutes = field(minutes)?;
    let seconds = field(seconds)?;

    let total = match (minutes, seconds) {
        (None, None) => return Err(ParseError::InvalidDuration("no duration".to_string())),
        (Some(m), Some(s)) if s >= 60 => {
            return Err(ParseError::InvalidDuration(format!("{m}m{s}s")));
        }
        (m, s) => m.unwrap_or(0) * 60 + s.unwrap_or(0),
    };

    if total == 0 {
        return Err(ParseError::InvalidDuration("zero duration".to_string()));
    }
    Ok(total)
}

fn bounded_max(spec: &GameSpec) -> Result<u32, ParseError> {
    spec.max_attempts
        .ok_or_else(|| ParseError::InvalidAttempts(format!("{} has no attempt limit", spec.game)))
}
