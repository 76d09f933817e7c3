//! UI state machine: one mode per screen, transitions driven by keys.

use crate::app::App;
use crate::catalog::{self, Network, Tier};
use memo_core::Rating;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Study,
    Browse,
    Stats,
    ResetConfirm,
}

pub const MENU_ITEMS: [&str; 5] = [
    "Study Due Cards [s]",
    "Browse All Cards [b]",
    "View Statistics [t]",
    "Reset Progress",
    "Quit [q]",
];

pub struct TuiState {
    pub app: App,
    pub mode: Mode,
    pub menu_selected: usize,

    // Study session: cards are popped from the front, never re-inserted.
    pub queue: VecDeque<&'static Network>,
    pub current: Option<&'static Network>,
    pub revealed: bool,
    pub completed: usize,
    pub session_total: usize,

    // Browse
    pub browse_tier: Tier,
    pub browse_row: usize,

    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        Self {
            app,
            mode: Mode::Menu,
            menu_selected: 0,
            queue: VecDeque::new(),
            current: None,
            revealed: false,
            completed: 0,
            session_total: 0,
            browse_tier: Tier::Tier1,
            browse_row: 0,
            flash_message: None,
            quit: false,
        }
    }

    // --- menu ---

    pub fn open_menu(&mut self) {
        self.mode = Mode::Menu;
    }

    pub fn menu_move_down(&mut self) {
        if self.menu_selected + 1 < MENU_ITEMS.len() {
            self.menu_selected += 1;
        }
    }

    pub fn menu_move_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn activate_menu_item(&mut self) {
        match self.menu_selected {
            0 => self.start_study(),
            1 => self.open_browse(),
            2 => self.mode = Mode::Stats,
            3 => self.mode = Mode::ResetConfirm,
            _ => self.quit = true,
        }
    }

    // --- study ---

    /// Assemble a session (due cards first, then new) and show the first
    /// card.
    pub fn start_study(&mut self) {
        let cards = self.app.session_cards();
        self.session_total = cards.len();
        self.completed = 0;
        self.queue = cards.into_iter().collect();
        self.mode = Mode::Study;
        self.advance_card();
    }

    fn advance_card(&mut self) {
        self.current = self.queue.pop_front();
        self.revealed = false;
    }

    /// A session with no current card is finished (or was empty to begin
    /// with).
    pub fn session_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn reveal(&mut self) {
        if self.current.is_some() {
            self.revealed = true;
        }
    }

    /// Rate the current card. Ignored until the answer has been revealed;
    /// rating records the review, saves, and moves on. A card rated Again
    /// is not re-shown this session.
    pub fn rate_current(&mut self, rating: Rating) {
        if !self.revealed {
            return;
        }
        let Some(network) = self.current else {
            return;
        };
        self.app.review(network, rating);
        self.completed += 1;
        self.advance_card();
    }

    // --- browse ---

    pub fn open_browse(&mut self) {
        self.mode = Mode::Browse;
        self.browse_tier = Tier::Tier1;
        self.browse_row = 0;
    }

    pub fn show_tier(&mut self, tier: Tier) {
        self.browse_tier = tier;
        self.browse_row = 0;
    }

    pub fn browse_networks(&self) -> Vec<&'static Network> {
        catalog::networks_by_tier(self.browse_tier)
    }

    pub fn browse_move_down(&mut self) {
        let len = self.browse_networks().len();
        if len > 0 && self.browse_row + 1 < len {
            self.browse_row += 1;
        }
    }

    pub fn browse_move_up(&mut self) {
        self.browse_row = self.browse_row.saturating_sub(1);
    }

    // --- reset ---

    pub fn confirm_reset(&mut self) {
        self.app.reset_progress();
        self.flash_message = Some("Progress reset successfully".to_string());
        self.mode = Mode::Menu;
    }

    pub fn cancel_reset(&mut self) {
        self.mode = Mode::Menu;
    }
}
