//! Play scene: owns the session, maps keys to play inputs, hosts the
//! pause modal.

use crate::core::logic::{process_input, update, PlayInput};
use crate::core::score::{read_best, KeyValueStore};
use crate::core::session::{Phase, Session};
use crate::scenes::{SceneKind, Transition};
use crossterm::event::KeyCode;

pub const PAUSE_ITEMS: [&str; 2] = ["Continue", "Exit"];

/// What the pause modal resolved to for one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseChoice {
    Stay,
    Continue,
    Exit,
}

/// The modal shown while the session is paused.
pub struct PauseMenu {
    pub selected: usize,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_input(&mut self, key: KeyCode) -> PauseChoice {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % PAUSE_ITEMS.len();
                PauseChoice::Stay
            }
            KeyCode::Enter => {
                if self.selected == 0 {
                    PauseChoice::Continue
                } else {
                    PauseChoice::Exit
                }
            }
            // Esc backs out of the modal the same as Continue
            KeyCode::Esc => PauseChoice::Continue,
            _ => PauseChoice::Stay,
        }
    }
}

impl Default for PauseMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PlayScene {
    pub session: Session,
    /// Present while the pause modal is open; gone during the
    /// countdown and normal play.
    pub pause_menu: Option<PauseMenu>,
}

impl PlayScene {
    pub fn new(store: &impl KeyValueStore) -> Self {
        let mut rng = rand::rng();
        let session = Session::new(read_best(store), &mut rng);
        Self {
            session,
            pause_menu: None,
        }
    }

    pub fn enter(&mut self, store: &impl KeyValueStore) {
        self.session.best = read_best(store);
    }

    pub fn exit(&mut self) {}

    pub fn handle_input(&mut self, key: KeyCode) -> Transition {
        if let Some(menu) = &mut self.pause_menu {
            match menu.handle_input(key) {
                PauseChoice::Stay => {}
                PauseChoice::Continue => {
                    self.pause_menu = None;
                    process_input(&mut self.session, PlayInput::Resume);
                }
                PauseChoice::Exit => return Transition::To(SceneKind::Menu),
            }
            return Transition::None;
        }

        match key {
            KeyCode::Char(' ') | KeyCode::Up => {
                process_input(&mut self.session, PlayInput::Flap);
            }
            KeyCode::Esc | KeyCode::Char('p') => {
                // Only live play can pause; the countdown window and the
                // game-over freeze ignore it
                if self.session.phase == Phase::Playing {
                    process_input(&mut self.session, PlayInput::Pause);
                    self.pause_menu = Some(PauseMenu::new());
                }
            }
            _ => {}
        }
        Transition::None
    }

    pub fn update(&mut self, dt_ms: u64, store: &mut impl KeyValueStore) -> Transition {
        let mut rng = rand::rng();
        update(&mut self.session, dt_ms, &mut rng, store);
        Transition::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::HIGH_SCORE_KEY;
    use crate::core::score::MemoryStore;

    fn scene() -> (PlayScene, MemoryStore) {
        let store = MemoryStore::new();
        (PlayScene::new(&store), store)
    }

    // ── Key mapping ──

    #[test]
    fn test_space_and_up_queue_a_flap() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Char(' '));
        assert!(play.session.flap_queued);

        play.session.flap_queued = false;
        play.handle_input(KeyCode::Up);
        assert!(play.session.flap_queued);
    }

    #[test]
    fn test_esc_pauses_and_opens_the_modal() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        assert_eq!(play.session.phase, Phase::Paused);
        assert!(play.pause_menu.is_some());
    }

    #[test]
    fn test_p_also_pauses() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Char('p'));
        assert_eq!(play.session.phase, Phase::Paused);
    }

    #[test]
    fn test_flap_keys_do_nothing_while_the_modal_is_open() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        play.handle_input(KeyCode::Char(' '));
        assert!(!play.session.flap_queued);
    }

    // ── Pause modal ──

    #[test]
    fn test_modal_selection_toggles() {
        let mut menu = PauseMenu::new();
        assert_eq!(menu.selected, 0);
        menu.handle_input(KeyCode::Down);
        assert_eq!(menu.selected, 1);
        menu.handle_input(KeyCode::Up);
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_continue_starts_the_resume_countdown() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        let t = play.handle_input(KeyCode::Enter);
        assert!(matches!(t, Transition::None));
        assert!(play.pause_menu.is_none());
        assert!(play.session.countdown.is_some());
        assert_eq!(play.session.phase, Phase::Paused, "paused until the count ends");
    }

    #[test]
    fn test_exit_returns_to_the_menu() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        play.handle_input(KeyCode::Down);
        let t = play.handle_input(KeyCode::Enter);
        assert!(matches!(t, Transition::To(SceneKind::Menu)));
    }

    #[test]
    fn test_esc_inside_the_modal_acts_as_continue() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        play.handle_input(KeyCode::Esc);
        assert!(play.pause_menu.is_none());
        assert!(play.session.countdown.is_some());
    }

    #[test]
    fn test_pause_keys_ignored_during_the_countdown() {
        let (mut play, _) = scene();
        play.handle_input(KeyCode::Esc);
        play.handle_input(KeyCode::Enter);

        // Countdown running, modal closed: Esc must not reopen it
        play.handle_input(KeyCode::Esc);
        assert!(play.pause_menu.is_none());
        assert!(play.session.countdown.is_some());
    }

    // ── Scene lifecycle ──

    #[test]
    fn test_new_reads_the_persisted_best() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "17");
        let play = PlayScene::new(&store);
        assert_eq!(play.session.best, 17);
    }

    #[test]
    fn test_update_advances_the_session() {
        let (mut play, mut store) = scene();
        let y = play.session.avatar.y;
        play.update(16, &mut store);
        assert!(play.session.avatar.y > y, "gravity acted");
    }
}
