//! Per-alliance match outcomes.

use std::cmp::Ordering;
use std::fmt;

/// Outcome of a match for one alliance.
///
/// Exactly one value is assigned per alliance per match; every team on an
/// alliance shares its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Resolve both alliances' outcomes from their scores.
    ///
    /// Total over any pair of optional scores: a higher score wins, equal
    /// scores tie. A missing score never compares greater than anything, so
    /// two unscored alliances tie, as does a score paired with an absent one.
    #[must_use]
    pub fn resolve(red_score: Option<i64>, blue_score: Option<i64>) -> (Outcome, Outcome) {
        match (red_score, blue_score) {
            (Some(red), Some(blue)) => match red.cmp(&blue) {
                Ordering::Greater => (Outcome::Win, Outcome::Loss),
                Ordering::Less => (Outcome::Loss, Outcome::Win),
                Ordering::Equal => (Outcome::Tie, Outcome::Tie),
            },
            _ => (Outcome::Tie, Outcome::Tie),
        }
    }

    /// The wire label published to subscribers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_red_score_wins() {
        assert_eq!(
            Outcome::resolve(Some(2), Some(1)),
            (Outcome::Win, Outcome::Loss)
        );
        assert_eq!(
            Outcome::resolve(Some(150), Some(0)),
            (Outcome::Win, Outcome::Loss)
        );
    }

    #[test]
    fn higher_blue_score_wins() {
        assert_eq!(
            Outcome::resolve(Some(1), Some(2)),
            (Outcome::Loss, Outcome::Win)
        );
    }

    #[test]
    fn equal_scores_tie() {
        assert_eq!(
            Outcome::resolve(Some(7), Some(7)),
            (Outcome::Tie, Outcome::Tie)
        );
        assert_eq!(
            Outcome::resolve(Some(0), Some(0)),
            (Outcome::Tie, Outcome::Tie)
        );
    }

    #[test]
    fn absent_scores_tie() {
        assert_eq!(Outcome::resolve(None, None), (Outcome::Tie, Outcome::Tie));
        assert_eq!(
            Outcome::resolve(Some(5), None),
            (Outcome::Tie, Outcome::Tie)
        );
        assert_eq!(
            Outcome::resolve(None, Some(5)),
            (Outcome::Tie, Outcome::Tie)
        );
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(Outcome::Win.label(), "win");
        assert_eq!(Outcome::Loss.label(), "loss");
        assert_eq!(Outcome::Tie.to_string(), "tie");
    }
}
