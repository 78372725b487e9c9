use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, ParseError};
use crate::games::GameSpec;
use crate::score::Outcome;

static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^#(?:countryle|capitale)\s+(#?\d+).*?\bguessed\s+in\s+(\d{1,3})\s+tr(?:y|ies)\b")
        .unwrap()
});

/// `#Countryle 454` / `#Capitale 201` followed by `Guessed in <n> tries.`
pub fn parse(spec: &GameSpec, raw: &str) -> Result<Outcome, ParseError> {
    let text = tokens::strip_decorations(raw);
    let caps = RESULT_LINE
        .captures(text.trim())
        .ok_or(ParseError::MissingResult)?;

    let number = tokens::puzzle_number(&caps[1])?;
    let outcome = tokens::count_outcome(spec, &caps[2], raw)?;

    Ok(outcome.with_puzzle_number(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Game, GameRegistry};
    use rstest::rstest;

    fn spec(game: Game) -> &'static GameSpec {
        GameRegistry::default_registry().spec(game).unwrap()
    }

    #[rstest]
    #[case(Game::Countryle, "#Countryle 454\nGuessed in 5 tries.\n\n🟩🟩🟩🟩🟩", true, 5, 10)]
    #[case(Game::Countryle, "#Countryle 454 Guessed in 1 try.", true, 1, 10)]
    #[case(Game::Countryle, "#Countryle 454\nGuessed in 14 tries.", false, 10, 10)]
    #[case(Game::Capitale, "#Capitale 201\nGuessed in 2 tries.", true, 2, 8)]
    fn test_parses_guess_counts(
        #[case] game: Game,
        #[case] text: &str,
        #[case] success: bool,
        #[case] attempts: u32,
        #[case] max: u32,
    ) {
        let outcome = spec(game).parse(text).unwrap();
        assert_eq!(outcome.success, success);
        assert_eq!(outcome.attempts, Some(attempts));
        assert_eq!(outcome.max_attempts, Some(max));
    }

    #[test]
    fn test_missing_guess_line_is_unparsable() {
        assert_eq!(
            spec(Game::Capitale).parse("#Capitale 201\nso close"),
            Err(ParseError::MissingResult)
        );
    }
}
