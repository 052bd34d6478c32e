//! Scenes and their explicit dispatch.
//!
//! Each scene is a plain struct with the same capability set (enter,
//! exit, handle_input, update); the runtime drives whichever variant is
//! active through a match, no trait objects involved.

pub mod menu;
pub mod play;
pub mod score;

pub use menu::MenuScene;
pub use play::PlayScene;
pub use score::ScoreScene;

use crate::core::score::KeyValueStore;
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Menu,
    Score,
    Play,
}

/// What a scene asked the runtime to do with this event or frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    To(SceneKind),
    Quit,
}

/// The active scene.
pub enum Scene {
    Menu(MenuScene),
    Score(ScoreScene),
    Play(PlayScene),
}

impl Scene {
    /// Construct a scene and run its enter hook.
    pub fn build(kind: SceneKind, store: &impl KeyValueStore) -> Self {
        match kind {
            SceneKind::Menu => {
                let mut s = MenuScene::new();
                s.enter(store);
                Scene::Menu(s)
            }
            SceneKind::Score => {
                let mut s = ScoreScene::new();
                s.enter(store);
                Scene::Score(s)
            }
            SceneKind::Play => {
                let mut s = PlayScene::new(store);
                s.enter(store);
                Scene::Play(s)
            }
        }
    }

    pub fn exit(&mut self) {
        match self {
            Scene::Menu(s) => s.exit(),
            Scene::Score(s) => s.exit(),
            Scene::Play(s) => s.exit(),
        }
    }

    pub fn handle_input(&mut self, key: KeyCode) -> Transition {
        match self {
            Scene::Menu(s) => s.handle_input(key),
            Scene::Score(s) => s.handle_input(key),
            Scene::Play(s) => s.handle_input(key),
        }
    }

    pub fn update(&mut self, dt_ms: u64, store: &mut impl KeyValueStore) -> Transition {
        match self {
            Scene::Menu(s) => s.update(dt_ms),
            Scene::Score(s) => s.update(dt_ms),
            Scene::Play(s) => s.update(dt_ms, store),
        }
    }
}
