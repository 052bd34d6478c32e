//! Gameplay simulation core: pure logic over plain data, driven by a
//! fixed timestep and an injected RNG and store.

pub mod avatar;
pub mod constants;
pub mod difficulty;
pub mod logic;
pub mod obstacle;
pub mod score;
pub mod session;
pub mod tasks;
