//! Main entry point for sound generation.
//!
//! This module takes a preset and renders it to WAV bytes deterministically.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::preset::{Preset, Variant};
use crate::rng::create_rng;
use crate::wav::{encode, EncodedAudio};

/// Result of rendering one preset.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Encoded WAV data.
    pub wav: EncodedAudio,
    /// Variant that was rendered.
    pub variant: Variant,
    /// Number of events mixed into the buffer.
    pub num_events: usize,
    /// Seed the random stream was created from.
    pub seed: u32,
}

impl GenerateResult {
    /// Length of the rendered audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.wav.duration_seconds()
    }

    /// Atomically writes the WAV into `dir` under the variant's file name.
    ///
    /// The directory is created if it does not exist.
    pub fn write_to_dir(&self, dir: &Path) -> SynthResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| SynthError::io(dir, e))?;
        let path = dir.join(self.variant.file_name());
        self.wav.write_atomic(&path)?;
        Ok(path)
    }
}

/// Renders a preset.
///
/// A fresh random stream is created from the preset's seed, so the same
/// preset always produces byte-identical output.
///
/// # Arguments
/// * `preset` - Composition, volume and seed to render
///
/// # Returns
/// Encoded WAV and metadata, or `InvalidParameter` for a malformed preset
pub fn generate(preset: &Preset) -> SynthResult<GenerateResult> {
    let mut rng = create_rng(preset.seed);
    let buffer = preset.composition.render(&mut rng)?;
    let wav = encode(buffer, preset.volume)?;

    debug!(
        variant = %preset.variant,
        seed = preset.seed,
        samples = wav.num_samples,
        hash = %wav.pcm_hash,
        "generated sound"
    );

    Ok(GenerateResult {
        wav,
        variant: preset.variant,
        num_events: preset.composition.event_count(),
        seed: preset.seed,
    })
}

/// Renders a variant with its built-in parameters.
pub fn generate_variant(variant: Variant) -> SynthResult<GenerateResult> {
    generate(&variant.preset())
}

/// Renders a preset and writes it into `dir`.
///
/// # Arguments
/// * `preset` - Preset to render
/// * `dir` - Output directory, created if missing
///
/// # Returns
/// Path of the written `<variant>.wav`
pub fn generate_to_dir(preset: &Preset, dir: &Path) -> SynthResult<PathBuf> {
    generate(preset)?.write_to_dir(dir)
}
