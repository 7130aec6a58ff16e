//! Inspect command implementation
//!
//! Prints a variant's full preset (events, envelopes, volume, seed) as JSON.

use anyhow::{Context, Result};
use clicksynth_audio::Preset;
use std::process::ExitCode;

use super::generate::parse_variants;
use super::reporting;

/// Looks up the preset for a variant name.
pub fn preset_for(name: &str) -> Result<Preset> {
    let variants = parse_variants(&[name.to_string()])?;
    variants
        .first()
        .map(|v| v.preset())
        .context("No variant given")
}

/// Run the inspect command
pub fn run(name: &str, pretty: bool) -> Result<ExitCode> {
    let preset = preset_for(name)?;
    reporting::print_json(&preset, pretty)?;
    Ok(ExitCode::SUCCESS)
}
