//! Clicksynth CLI library.
//!
//! Command implementations and logging setup for the `clicksynth` binary.

pub mod commands;
pub mod logging;
