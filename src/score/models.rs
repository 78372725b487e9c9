use serde::{Deserialize, Serialize};

use crate::games::Game;

/// Result extracted from one share, before and after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub game: Game,
    pub success: bool,
    pub attempts: Option<u32>,
    pub max_attempts: Option<u32>,
    pub elapsed_secs: Option<u32>,
    pub puzzle_number: Option<u32>,
    /// Per-board results for composite games; `None` marks an unsolved board.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_scores: Vec<Option<u32>>,
    #[serde(default)]
    pub hard_mode: bool,
    /// Share text as posted, kept for audit.
    pub raw: String,
}

impl Outcome {
    fn base(game: Game, raw: &str) -> Self {
        Self {
            game,
            success: false,
            attempts: None,
            max_attempts: None,
            elapsed_secs: None,
            puzzle_number: None,
            sub_scores: Vec::new(),
            hard_mode: false,
            raw: raw.to_string(),
        }
    }

    pub fn solved(game: Game, attempts: u32, max_attempts: u32, raw: &str) -> Self {
        Self {
            success: true,
            attempts: Some(attempts),
            max_attempts: Some(max_attempts),
            ..Self::base(game, raw)
        }
    }

    /// A failed share counts as having used every attempt.
    pub fn failed(game: Game, max_attempts: u32, raw: &str) -> Self {
        Self {
            success: false,
            attempts: Some(max_attempts),
            max_attempts: Some(max_attempts),
            ..Self::base(game, raw)
        }
    }

    pub fn timed(game: Game, elapsed_secs: u32, raw: &str) -> Self {
        Self {
            success: true,
            elapsed_secs: Some(elapsed_secs),
            ..Self::base(game, raw)
        }
    }

    /// Attempts are left for the normalizer to aggregate.
    pub fn composite(game: Game, sub_scores: Vec<Option<u32>>, raw: &str) -> Self {
        Self {
            success: sub_scores.iter().all(Option::is_some),
            sub_scores,
            ..Self::base(game, raw)
        }
    }

    pub fn with_puzzle_number(mut self, number: u32) -> Self {
        self.puzzle_number = Some(number);
        self
    }

    pub fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.elapsed_secs
            .map(|secs| chrono::Duration::seconds(i64::from(secs)))
    }

    /// Board results as one sorted code, unsolved boards as trailing zeros:
    /// `4567`, `7800`. `None` for single-board games.
    pub fn score_code(&self) -> Option<String> {
        if self.sub_scores.is_empty() {
            return None;
        }

        let mut solved: Vec<u32> = self.sub_scores.iter().flatten().copied().collect();
        solved.sort_unstable();
        let failed = self.sub_scores.len() - solved.len();

        let mut code: String = solved.iter().map(|n| n.to_string()).collect();
        code.push_str(&"0".repeat(failed));
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_code_sorts_and_trails_failures() {
        let outcome = Outcome::composite(Game::Quordle, vec![Some(7), Some(5), Some(6), Some(4)], "");
        assert_eq!(outcome.score_code().as_deref(), Some("4567"));

        let outcome = Outcome::composite(Game::Quordle, vec![None, Some(8), Some(7), None], "");
        assert_eq!(outcome.score_code().as_deref(), Some("7800"));
    }

    #[test]
    fn test_score_code_absent_for_single_board() {
        assert!(Outcome::solved(Game::Wordle, 4, 6, "").score_code().is_none());
    }

    #[test]
    fn test_composite_success_requires_every_board() {
        assert!(Outcome::composite(Game::Sequence, vec![Some(1), Some(2)], "").success);
        assert!(!Outcome::composite(Game::Sequence, vec![Some(1), None], "").success);
    }

    #[test]
    fn test_elapsed_duration() {
        let outcome = Outcome::timed(Game::MiniCrossword, 83, "Mini1: 1m23s");
        assert_eq!(outcome.elapsed(), Some(chrono::Duration::seconds(83)));
        assert!(Outcome::failed(Game::Wordle, 6, "").elapsed().is_none());
    }
}
