//! Core types for the spaced-repetition scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User self-assessment for a review.
///
/// The numeric weights (0, 2, 3, 5) feed directly into the ease-factor
/// formula and are part of the scheduling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Complete blackout, relearn from the start.
    Again,
    /// Incorrect, but remembered once the answer was shown.
    Hard,
    /// Correct with some difficulty.
    Good,
    /// Perfect recall with no hesitation.
    Easy,
}

impl Rating {
    /// Numeric weight used by the scheduling formula.
    pub fn value(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 5,
        }
    }

    /// Create from a numeric weight.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            5 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Ratings of 3 and above count as a successful recall.
    pub fn is_qualifying(self) -> bool {
        self.value() >= 3
    }
}

/// Learning state of a single card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Stable identifier matching an entry in the external catalog.
    pub card_id: String,
    /// Per-card interval multiplier; never drops below 1.3.
    pub ease_factor: f64,
    /// Days until the next review.
    pub interval: u32,
    /// Consecutive qualifying reviews; reset to 0 on failure.
    pub repetitions: u32,
    /// The card is due once the current time reaches this instant.
    pub next_review: DateTime<Utc>,
    /// Absent until the card has been reviewed at least once.
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl CardState {
    /// Whether the card is due for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_review
    }
}

/// Aggregate learning statistics, computed fresh from the full store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total_studied: usize,
    pub due_today: usize,
    /// Cards with 3 or more consecutive qualifying reviews.
    pub mastered: usize,
    pub learning: usize,
    /// Mean ease factor rounded to 2 decimals; 0.0 for an empty store.
    pub average_ease: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn rating_weights_are_fixed() {
        assert_eq!(Rating::Again.value(), 0);
        assert_eq!(Rating::Hard.value(), 2);
        assert_eq!(Rating::Good.value(), 3);
        assert_eq!(Rating::Easy.value(), 5);
    }

    #[test]
    fn rating_round_trips_through_value() {
        for rating in [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy] {
            assert_eq!(Rating::from_value(rating.value()), Some(rating));
        }
        assert_eq!(Rating::from_value(1), None);
        assert_eq!(Rating::from_value(4), None);
    }

    #[test]
    fn only_good_and_easy_qualify() {
        assert!(!Rating::Again.is_qualifying());
        assert!(!Rating::Hard.is_qualifying());
        assert!(Rating::Good.is_qualifying());
        assert!(Rating::Easy.is_qualifying());
    }

    #[test]
    fn card_is_due_once_next_review_passes() {
        let now = Utc::now();
        let state = CardState {
            card_id: "174".to_string(),
            ease_factor: 2.5,
            interval: 1,
            repetitions: 1,
            next_review: now,
            last_reviewed: Some(now - Duration::days(1)),
        };

        assert!(state.is_due(now));
        assert!(state.is_due(now + Duration::seconds(1)));
        assert!(!state.is_due(now - Duration::seconds(1)));
    }
}
