//! Card-state store and session selection logic.

use crate::sm2::Sm2;
use crate::types::{CardState, Rating, StudyStats};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Owns the learning state of every card ever reviewed.
///
/// Constructed once at startup from persisted data and handed to the host;
/// all mutation goes through [`Scheduler::review_card`]. Time-relative
/// queries take `now` explicitly so the due predicate is recomputed per
/// call rather than cached.
#[derive(Debug, Default)]
pub struct Scheduler {
    states: HashMap<String, CardState>,
    sm2: Sm2,
}

impl Scheduler {
    /// Build a scheduler around previously persisted card states.
    pub fn new(states: HashMap<String, CardState>) -> Self {
        Self {
            states,
            sm2: Sm2::default(),
        }
    }

    /// Apply a review outcome to a card, creating default state on first
    /// contact.
    ///
    /// Any `card_id` is accepted; an id the store has never seen starts
    /// from the default state (ease 2.5, no repetitions, due now). The
    /// updated state replaces the stored one and is returned.
    pub fn review_card(&mut self, card_id: &str, rating: Rating, now: DateTime<Utc>) -> CardState {
        let current = match self.states.get(card_id) {
            Some(state) => state.clone(),
            None => self.sm2.initial_state(card_id, now),
        };
        let updated = self.sm2.schedule(&current, rating, now);
        self.states.insert(card_id.to_string(), updated.clone());
        updated
    }

    /// Ids of every card due at `now`, earliest `next_review` first.
    pub fn get_due_cards(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut due: Vec<&CardState> = self
            .states
            .values()
            .filter(|state| state.is_due(now))
            .collect();
        // Tie-break on id so iteration order of the map never shows through.
        due.sort_by(|a, b| {
            a.next_review
                .cmp(&b.next_review)
                .then_with(|| a.card_id.cmp(&b.card_id))
        });
        due.into_iter().map(|state| state.card_id.clone()).collect()
    }

    /// Up to `limit` catalog ids that have never been studied, in catalog
    /// order.
    pub fn get_new_cards(&self, all_card_ids: &[String], limit: usize) -> Vec<String> {
        all_card_ids
            .iter()
            .filter(|id| !self.states.contains_key(id.as_str()))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Current state of a card, if it has ever been reviewed.
    ///
    /// Unlike [`Scheduler::review_card`] this never creates an entry.
    pub fn get_state(&self, card_id: &str) -> Option<&CardState> {
        self.states.get(card_id)
    }

    /// Aggregate statistics over the whole store.
    pub fn get_statistics(&self, now: DateTime<Utc>) -> StudyStats {
        let total_studied = self.states.len();
        if total_studied == 0 {
            return StudyStats {
                total_studied: 0,
                due_today: 0,
                mastered: 0,
                learning: 0,
                average_ease: 0.0,
            };
        }

        let due_today = self.states.values().filter(|s| s.is_due(now)).count();
        let mastered = self.states.values().filter(|s| s.repetitions >= 3).count();
        let ease_sum: f64 = self.states.values().map(|s| s.ease_factor).sum();
        let average_ease = (ease_sum / total_studied as f64 * 100.0).round() / 100.0;

        StudyStats {
            total_studied,
            due_today,
            mastered,
            learning: total_studied - mastered,
            average_ease,
        }
    }

    /// Read access to the full store, for the persistence collaborator.
    pub fn states(&self) -> &HashMap<String, CardState> {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn review_creates_state_for_unknown_card() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        let state = scheduler.review_card("13335", Rating::Good, now);
        assert_eq!(state.card_id, "13335");
        assert_eq!(state.interval, 1);
        assert_eq!(state.repetitions, 1);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn review_replaces_existing_state() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        scheduler.review_card("174", Rating::Good, now);
        let second = scheduler.review_card("174", Rating::Good, now);

        assert_eq!(second.interval, 6);
        assert_eq!(second.repetitions, 2);
        assert_eq!(scheduler.get_state("174"), Some(&second));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn get_state_does_not_create_entries() {
        let scheduler = Scheduler::default();
        assert_eq!(scheduler.get_state("174"), None);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn due_cards_sorted_by_next_review() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        // Reviewed at staggered times in the past; all due now, the card
        // reviewed longest ago (most overdue) first.
        scheduler.review_card("7018", Rating::Good, now - Duration::days(3));
        scheduler.review_card("174", Rating::Good, now - Duration::days(5));
        scheduler.review_card("3356", Rating::Good, now - Duration::days(4));

        assert_eq!(scheduler.get_due_cards(now), ids(&["174", "3356", "7018"]));
    }

    #[test]
    fn due_cards_excludes_future_reviews() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        scheduler.review_card("174", Rating::Good, now - Duration::days(2));
        // Scheduled one day out from now, not yet due.
        scheduler.review_card("3356", Rating::Good, now);

        assert_eq!(scheduler.get_due_cards(now), ids(&["174"]));
    }

    #[test]
    fn due_cards_empty_for_empty_store() {
        let scheduler = Scheduler::default();
        assert!(scheduler.get_due_cards(Utc::now()).is_empty());
    }

    #[test]
    fn new_cards_preserve_catalog_order_and_limit() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();
        let catalog = ids(&["3356", "174", "2914", "1299", "3257"]);

        scheduler.review_card("174", Rating::Good, now);

        assert_eq!(
            scheduler.get_new_cards(&catalog, 10),
            ids(&["3356", "2914", "1299", "3257"])
        );
        assert_eq!(scheduler.get_new_cards(&catalog, 2), ids(&["3356", "2914"]));
        assert!(scheduler.get_new_cards(&catalog, 0).is_empty());
    }

    #[test]
    fn statistics_on_empty_store() {
        let scheduler = Scheduler::default();
        let stats = scheduler.get_statistics(Utc::now());

        assert_eq!(stats.total_studied, 0);
        assert_eq!(stats.due_today, 0);
        assert_eq!(stats.mastered, 0);
        assert_eq!(stats.learning, 0);
        assert_eq!(stats.average_ease, 0.0);
    }

    #[test]
    fn statistics_partition_mastered_and_learning() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        // Three qualifying reviews masters a card.
        let t = now - Duration::days(30);
        scheduler.review_card("174", Rating::Good, t);
        scheduler.review_card("174", Rating::Good, t);
        scheduler.review_card("174", Rating::Good, t);
        scheduler.review_card("3356", Rating::Good, now);

        let stats = scheduler.get_statistics(now);
        assert_eq!(stats.total_studied, 2);
        assert_eq!(stats.mastered, 1);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.mastered + stats.learning, stats.total_studied);
    }

    #[test]
    fn statistics_average_ease_rounds_to_two_decimals() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        // One Good (2.36) and one Easy (2.6): mean 2.48.
        scheduler.review_card("174", Rating::Good, now);
        scheduler.review_card("3356", Rating::Easy, now);

        let stats = scheduler.get_statistics(now);
        assert_eq!(stats.average_ease, 2.48);
    }

    #[test]
    fn failed_card_comes_back_the_next_day() {
        let mut scheduler = Scheduler::default();
        let now = Utc::now();

        let state = scheduler.review_card("174", Rating::Again, now);
        assert_eq!(state.interval, 1);
        assert!(scheduler.get_due_cards(now).is_empty());
        assert_eq!(
            scheduler.get_due_cards(now + Duration::days(1)),
            ids(&["174"])
        );
    }
}
