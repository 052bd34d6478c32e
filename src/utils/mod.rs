//! Shared utilities.

pub mod persistence;
