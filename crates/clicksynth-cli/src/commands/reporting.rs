use anyhow::{Context, Result};
use clicksynth_audio::{GenerateResult, Variant};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// One written sound, as reported in JSON output.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GeneratedSound {
    pub variant: String,
    pub path: String,
    pub pcm_hash: String,
    pub num_samples: usize,
    pub duration_seconds: f64,
    pub num_events: usize,
    pub seed: u32,
}

impl GeneratedSound {
    pub(crate) fn new(result: &GenerateResult, path: &Path) -> Self {
        Self {
            variant: result.variant.name().to_string(),
            path: path.display().to_string(),
            pcm_hash: result.wav.pcm_hash.clone(),
            num_samples: result.wav.num_samples,
            duration_seconds: result.duration_seconds(),
            num_events: result.num_events,
            seed: result.seed,
        }
    }
}

/// A variant that could not be generated.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FailedSound {
    pub variant: String,
    pub error: String,
}

/// Output of a generate run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateReport {
    pub success: bool,
    pub out_dir: String,
    pub generated: Vec<GeneratedSound>,
    pub failed: Vec<FailedSound>,
}

pub(crate) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn print_generated(sound: &GeneratedSound) {
    println!(
        "  {} {} -> {} ({} samples, {:.3}s)",
        "SUCCESS".green(),
        sound.variant,
        sound.path,
        sound.num_samples,
        sound.duration_seconds
    );
    println!("    {} {}", "PCM hash:".dimmed(), sound.pcm_hash);
}

pub(crate) fn print_failed(variant: Variant, error: &str) {
    println!("  {} {} - {}", "FAILED".red(), variant, error);
}
