//! Application context: scheduler plus persistence lifecycle.
//!
//! Built once at startup from the persisted store, passed down to the UI,
//! and replaced wholesale on reset. The scheduler itself never touches
//! disk; this context owns save timing.

use crate::catalog::{self, Network};
use crate::progress::ProgressStore;
use chrono::Utc;
use memo_core::{CardState, Rating, Scheduler, StudyStats};

/// New cards introduced per study session, so a fresh install is not
/// swamped by the whole catalog at once.
pub const NEW_CARDS_PER_SESSION: usize = 10;

pub struct App {
    pub scheduler: Scheduler,
    progress: ProgressStore,
}

impl App {
    /// Load persisted progress and build the scheduler around it.
    pub fn new(progress: ProgressStore) -> Self {
        let states = progress.load();
        Self {
            scheduler: Scheduler::new(states),
            progress,
        }
    }

    /// Candidate cards for one sitting: every due card (earliest first),
    /// then up to [`NEW_CARDS_PER_SESSION`] unseen ones in catalog order.
    ///
    /// Ids with no catalog entry (left over from an older catalog) are
    /// silently dropped from the session; their state stays in the store.
    pub fn session_cards(&self) -> Vec<&'static Network> {
        let now = Utc::now();
        let due = self.scheduler.get_due_cards(now);
        let new = self
            .scheduler
            .get_new_cards(&catalog::all_card_ids(), NEW_CARDS_PER_SESSION);

        due.iter()
            .chain(new.iter())
            .filter_map(|id| id.parse::<u32>().ok().and_then(catalog::network_by_asn))
            .collect()
    }

    /// Record a rating for a card and persist the updated store.
    pub fn review(&mut self, network: &Network, rating: Rating) -> CardState {
        let state = self
            .scheduler
            .review_card(&network.card_id(), rating, Utc::now());
        self.save_progress();
        state
    }

    /// Best-effort save; a failed write is logged, never fatal mid-session.
    pub fn save_progress(&self) {
        if let Err(err) = self.progress.save(self.scheduler.states()) {
            log::warn!("failed to save progress: {err}");
        }
    }

    /// Discard all learning progress, in memory and on disk.
    pub fn reset_progress(&mut self) {
        self.scheduler = Scheduler::default();
        if let Err(err) = self.progress.reset() {
            log::warn!("failed to delete progress file: {err}");
        }
    }

    pub fn statistics(&self) -> StudyStats {
        self.scheduler.get_statistics(Utc::now())
    }
}
