use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::GameSpec;
use crate::score::Outcome;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^daily\s+(?:quordle|sequence)\s+(#?\d[\d,]*)").unwrap());

const KEYCAP: char = '\u{20e3}';
const KEYCAP_TEN: char = '\u{1f51f}';
const FAILED_BOARD: char = '\u{1f7e5}';

/// Quordle and Sequence report one cell per board after the header: a keycap
/// digit for the solving guess, `🔟` for ten, or `🟥` for a board left unsolved.
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);
    let text = text.trim();

    let caps = HEADER.captures(text).ok_or(ParseError::MissingResult)?;
    let number = tokens::puzzle_number(&caps[1])?;

    let body = &text[caps.get(0).map_or(0, |m| m.end())..];
    let mut cells = board_cells(body);

    if cells.len() < spec.sub_puzzles {
        return Err(ParseError::MissingSubScores {
            expected: spec.sub_puzzles,
            found: cells.len(),
        });
    }
    cells.truncate(spec.sub_puzzles);

    let max = spec.max_attempts.unwrap_or(u32::MAX);
    if let Some(bad) = cells.iter().flatten().find(|n| **n == 0 || **n > max) {
        return Err(ParseError::InvalidAttempts(bad.to_string()));
    }

    Ok(Outcome::composite(spec.game, cells, raw).with_puzzle_number(number))
}

/// Scans result cells in reading order, skipping grid squares and links.
fn board_cells(body: &str) -> Vec<Option<u32>> {
    let chars: Vec<char> = body.chars().collect();
    let mut cells = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            c if c.is_ascii_digit() && chars.get(i + 1) == Some(&KEYCAP) => {
                cells.push(c.to_digit(10));
                i += 2;
            }
            KEYCAP_TEN => {
                cells.push(Some(10));
                i += 1;
            }
            FAILED_BOARD => {
                cells.push(None);
                i += 1;
            }
            _ => i += 1,
        }
    }

    cells
}
