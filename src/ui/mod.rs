//! Terminal rendering. One entry point, `draw`, dispatching on the
//! active scene; nothing in here mutates game state.

mod common;
mod menu_scene;
mod play_scene;
mod score_scene;

use crate::scenes::Scene;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, scene: &Scene) {
    let area = frame.size();
    match scene {
        Scene::Menu(menu) => menu_scene::render_menu(frame, area, menu),
        Scene::Score(score) => score_scene::render_score(frame, area, score),
        Scene::Play(play) => play_scene::render_play(frame, area, play),
    }
}
