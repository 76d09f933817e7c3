//! SM-2 spaced repetition update rule.
//!
//! A variant of SuperMemo 2: the ease factor moves on every answer, while
//! the interval ladder (1 day, 6 days, then multiplicative growth) only
//! advances on qualifying ratings.

use crate::types::{CardState, Rating};
use chrono::{DateTime, Duration, Utc};

/// SM-2 parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
        }
    }
}

impl Sm2 {
    /// State for a card that has never been reviewed.
    ///
    /// `next_review = now` makes a fresh card immediately due, so the first
    /// review in the same sitting schedules it normally.
    pub fn initial_state(&self, card_id: impl Into<String>, now: DateTime<Utc>) -> CardState {
        CardState {
            card_id: card_id.into(),
            ease_factor: self.initial_ease,
            interval: 0,
            repetitions: 0,
            next_review: now,
            last_reviewed: None,
        }
    }

    /// Apply one review outcome, producing the card's next state.
    pub fn schedule(&self, state: &CardState, rating: Rating, now: DateTime<Utc>) -> CardState {
        // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floor 1.3.
        // Applied on every answer, failing ones included.
        let q = f64::from(rating.value());
        let new_ease = (state.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)))
            .max(self.minimum_ease);

        let (new_interval, new_repetitions) = if rating.is_qualifying() {
            let interval = match state.repetitions {
                0 => 1,
                1 => 6,
                // Interval growth uses the ease factor from *before* this
                // review's adjustment; the adjusted value is stored for the
                // next review.
                _ => (f64::from(state.interval) * state.ease_factor).round() as u32,
            };
            (interval, state.repetitions + 1)
        } else {
            (1, 0)
        };

        CardState {
            card_id: state.card_id.clone(),
            ease_factor: new_ease,
            interval: new_interval,
            repetitions: new_repetitions,
            next_review: now + Duration::days(i64::from(new_interval)),
            last_reviewed: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn first_qualifying_review_gives_one_day() {
        let sm2 = Sm2::default();
        let state = sm2.initial_state("174", now());

        for rating in [Rating::Good, Rating::Easy] {
            let next = sm2.schedule(&state, rating, now());
            assert_eq!(next.interval, 1);
            assert_eq!(next.repetitions, 1);
        }
    }

    #[test]
    fn second_qualifying_review_gives_six_days() {
        let sm2 = Sm2::default();
        let t = now();
        let state = sm2.schedule(&sm2.initial_state("174", t), Rating::Good, t);

        let next = sm2.schedule(&state, Rating::Good, t);
        assert_eq!(next.interval, 6);
        assert_eq!(next.repetitions, 2);
    }

    #[test]
    fn later_reviews_multiply_interval_by_ease() {
        let sm2 = Sm2::default();
        let t = now();
        let state = CardState {
            card_id: "174".to_string(),
            ease_factor: 2.5,
            interval: 6,
            repetitions: 2,
            next_review: t,
            last_reviewed: Some(t),
        };

        let next = sm2.schedule(&state, Rating::Good, t);
        assert_eq!(next.interval, 15); // round(6 * 2.5)
        assert_eq!(next.repetitions, 3);
    }

    #[test]
    fn easy_review_uses_ease_from_before_update() {
        // Ease 2.36 rated Easy becomes 2.46, but the interval multiplies
        // by the old 2.36: round(6 * 2.36) = 14, not round(6 * 2.46) = 15.
        let sm2 = Sm2::default();
        let t = now();
        let state = CardState {
            card_id: "174".to_string(),
            ease_factor: 2.36,
            interval: 6,
            repetitions: 2,
            next_review: t,
            last_reviewed: Some(t),
        };

        let next = sm2.schedule(&state, Rating::Easy, t);
        assert!((next.ease_factor - 2.46).abs() < 1e-9);
        assert_eq!(next.interval, 14);
        assert_eq!(next.repetitions, 3);
    }

    #[test]
    fn good_on_new_card_drops_ease_to_2_36() {
        // 2.5 + (0.1 - 2 * (0.08 + 2 * 0.02)) = 2.5 - 0.14 = 2.36
        let sm2 = Sm2::default();
        let t = now();
        let next = sm2.schedule(&sm2.initial_state("174", t), Rating::Good, t);
        assert!((next.ease_factor - 2.36).abs() < 1e-9);
    }

    #[test]
    fn failing_rating_resets_streak_and_interval() {
        let sm2 = Sm2::default();
        let t = now();
        let state = CardState {
            card_id: "174".to_string(),
            ease_factor: 2.46,
            interval: 14,
            repetitions: 3,
            next_review: t,
            last_reviewed: Some(t),
        };

        for rating in [Rating::Again, Rating::Hard] {
            let next = sm2.schedule(&state, rating, t);
            assert_eq!(next.repetitions, 0);
            assert_eq!(next.interval, 1);
        }
    }

    #[test]
    fn ease_moves_even_on_failing_ratings() {
        let sm2 = Sm2::default();
        let t = now();
        let state = sm2.initial_state("174", t);

        // Again: 2.5 + (0.1 - 5 * (0.08 + 5 * 0.02)) = 2.5 - 0.8 = 1.7
        let next = sm2.schedule(&state, Rating::Again, t);
        assert!((next.ease_factor - 1.7).abs() < 1e-9);
    }

    #[test]
    fn ease_never_drops_below_floor() {
        let sm2 = Sm2::default();
        let t = now();
        let mut state = sm2.initial_state("174", t);

        for _ in 0..20 {
            state = sm2.schedule(&state, Rating::Again, t);
            assert!(state.ease_factor >= sm2.minimum_ease);
        }
        assert_eq!(state.ease_factor, sm2.minimum_ease);
    }

    #[test]
    fn next_review_lands_interval_days_out() {
        let sm2 = Sm2::default();
        let t = now();
        let next = sm2.schedule(&sm2.initial_state("174", t), Rating::Good, t);

        assert_eq!(next.next_review, t + Duration::days(1));
        assert_eq!(next.last_reviewed, Some(t));
    }
}
