//! Best-score display scene.

use crate::core::score::{read_best, KeyValueStore};
use crate::scenes::{SceneKind, Transition};
use crossterm::event::KeyCode;

pub struct ScoreScene {
    pub best: u32,
}

impl ScoreScene {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn enter(&mut self, store: &impl KeyValueStore) {
        self.best = read_best(store);
    }

    pub fn exit(&mut self) {}

    pub fn handle_input(&mut self, key: KeyCode) -> Transition {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace => {
                Transition::To(SceneKind::Menu)
            }
            _ => Transition::None,
        }
    }

    pub fn update(&mut self, _dt_ms: u64) -> Transition {
        Transition::None
    }
}

impl Default for ScoreScene {
    fn default() -> Self {
        Self::new()
    }
}
