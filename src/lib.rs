//! Flap: a terminal one-button flyer.
//!
//! Gameplay lives in [`core`] as pure logic over plain state; [`scenes`]
//! wires input and transitions, [`ui`] renders, and [`sim`] replays the
//! same logic headlessly for balance checks.

pub mod build_info;
pub mod core;
pub mod scenes;
pub mod sim;
pub mod ui;
pub mod utils;
