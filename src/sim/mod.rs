//! Headless autoplay for balance analysis.
//!
//! Runs batches of scripted sessions through the real gameplay logic
//! and aggregates score and survival statistics, so difficulty tuning
//! can be checked without a terminal.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
