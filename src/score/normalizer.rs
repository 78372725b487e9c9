use crate::games::GameSpec;

use super::Outcome;

/// Brings an outcome onto the common schema of its spec. Idempotent.
///
/// Composite games report the largest board score as their attempt count: all
/// boards are played with the same guesses, so the last board solved marks the
/// total number of guesses used.
pub fn normalize(spec: &GameSpec, outcome: Outcome) -> Outcome {
    let mut outcome = outcome;
    outcome.game = spec.game;

    if spec.scale.is_timed() {
        outcome.success = true;
        outcome.attempts = None;
        outcome.max_attempts = None;
        return outcome;
    }

    outcome.max_attempts = spec.max_attempts;
    outcome.elapsed_secs = None;

    if spec.is_composite() && !outcome.sub_scores.is_empty() {
        outcome.success = outcome.sub_scores.iter().all(Option::is_some);
        outcome.attempts = outcome.sub_scores.iter().flatten().max().copied();
    }

    if !outcome.success {
        outcome.attempts = spec.max_attempts.or(outcome.attempts);
    }

    outcome.attempts = match (outcome.attempts, spec.max_attempts) {
        (Some(attempts), Some(max)) => Some(attempts.min(max)),
        (attempts, _) => attempts,
    };

    outcome
}
