//! Key dispatch, one handler per screen.

use crossterm::event::{KeyCode, KeyEvent};
use memo_core::Rating;

use super::state::{Mode, TuiState};
use crate::catalog::Tier;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Any keypress clears a pending flash message.
    state.flash_message = None;

    match state.mode {
        Mode::Menu => handle_menu_key(state, key),
        Mode::Study => handle_study_key(state, key),
        Mode::Browse => handle_browse_key(state, key),
        Mode::Stats => handle_stats_key(state, key),
        Mode::ResetConfirm => handle_reset_key(state, key),
    }
}

fn handle_menu_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('s') => state.start_study(),
        KeyCode::Char('b') => state.open_browse(),
        KeyCode::Char('t') => state.mode = Mode::Stats,
        KeyCode::Char('j') | KeyCode::Down => state.menu_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.menu_move_up(),
        KeyCode::Enter => state.activate_menu_item(),
        _ => {}
    }
}

fn handle_study_key(state: &mut TuiState, key: KeyEvent) {
    if state.session_finished() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => state.open_menu(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.open_menu(),
        KeyCode::Char(' ') => state.reveal(),
        // Number keys 1-4 map onto the rating scale, not its weights.
        KeyCode::Char('1') => state.rate_current(Rating::Again),
        KeyCode::Char('2') => state.rate_current(Rating::Hard),
        KeyCode::Char('3') => state.rate_current(Rating::Good),
        KeyCode::Char('4') => state.rate_current(Rating::Easy),
        _ => {}
    }
}

fn handle_browse_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.open_menu(),
        KeyCode::Char('1') => state.show_tier(Tier::Tier1),
        KeyCode::Char('2') => state.show_tier(Tier::Tier2),
        KeyCode::Char('3') => state.show_tier(Tier::Tier3),
        KeyCode::Char('4') => state.show_tier(Tier::Cdn),
        KeyCode::Char('5') => state.show_tier(Tier::Cloud),
        KeyCode::Char('6') => state.show_tier(Tier::Ixp),
        KeyCode::Char('j') | KeyCode::Down => state.browse_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.browse_move_up(),
        _ => {}
    }
}

fn handle_stats_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.open_menu(),
        _ => {}
    }
}

fn handle_reset_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => state.confirm_reset(),
        KeyCode::Char('n') | KeyCode::Esc => state.cancel_reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::progress::ProgressStore;
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    fn press(state: &mut TuiState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn study_hotkeys_reveal_then_rate() {
        let dir = tempdir().unwrap();
        let mut state = TuiState::new(App::new(ProgressStore::new(
            dir.path().join("progress.json"),
        )));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.mode, Mode::Study);
        let first = state.current.unwrap().card_id();

        // Rating before reveal is a no-op.
        press(&mut state, KeyCode::Char('3'));
        assert!(state.app.scheduler.get_state(&first).is_none());

        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Char('3'));
        let reviewed = state.app.scheduler.get_state(&first).expect("reviewed");
        assert_eq!(reviewed.repetitions, 1);
    }

    #[test]
    fn reset_requires_explicit_confirmation() {
        let dir = tempdir().unwrap();
        let mut state = TuiState::new(App::new(ProgressStore::new(
            dir.path().join("progress.json"),
        )));
        state.mode = Mode::ResetConfirm;

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Menu);

        state.mode = Mode::ResetConfirm;
        press(&mut state, KeyCode::Char('y'));
        assert_eq!(state.mode, Mode::Menu);
        assert!(state.flash_message.is_some());
        assert!(state.app.scheduler.is_empty());
    }

    #[test]
    fn quit_from_menu() {
        let dir = tempdir().unwrap();
        let mut state = TuiState::new(App::new(ProgressStore::new(
            dir.path().join("progress.json"),
        )));

        press(&mut state, KeyCode::Char('q'));
        assert!(state.quit);
    }
}
