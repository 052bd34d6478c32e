//! Title menu scene.

use crate::core::score::{read_best, KeyValueStore};
use crate::scenes::{SceneKind, Transition};
use crossterm::event::KeyCode;

pub const MENU_ITEMS: [&str; 3] = ["Play", "Score", "Exit"];

pub struct MenuScene {
    pub selected: usize,
    /// Persisted best, refreshed on enter for the footer.
    pub best: u32,
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            best: 0,
        }
    }

    pub fn enter(&mut self, store: &impl KeyValueStore) {
        self.best = read_best(store);
    }

    pub fn exit(&mut self) {}

    pub fn handle_input(&mut self, key: KeyCode) -> Transition {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                Transition::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % MENU_ITEMS.len();
                Transition::None
            }
            KeyCode::Enter => match self.selected {
                0 => Transition::To(SceneKind::Play),
                1 => Transition::To(SceneKind::Score),
                _ => Transition::Quit,
            },
            KeyCode::Char('q') | KeyCode::Esc => Transition::Quit,
            _ => Transition::None,
        }
    }

    pub fn update(&mut self, _dt_ms: u64) -> Transition {
        Transition::None
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}
