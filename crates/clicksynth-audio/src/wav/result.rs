//! Encoded WAV artifact and its atomic persistence.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{SynthError, SynthResult};

use super::format::WavFormat;
use super::writer::{pack_pcm16, quantize, write_wav_to_vec, HEADER_LEN};

/// A finished WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudio {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
    /// Largest absolute quantized sample.
    pub peak_amplitude: u16,
}

impl EncodedAudio {
    /// Quantizes already normalized and volume-scaled samples.
    pub(crate) fn from_normalized(samples: &[f64]) -> Self {
        let quantized = quantize(samples);
        let peak_amplitude = quantized
            .iter()
            .map(|v| v.unsigned_abs())
            .max()
            .unwrap_or(0);

        let pcm = pack_pcm16(&quantized);

        let format = WavFormat::OUTPUT;
        Self {
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            wav_data: write_wav_to_vec(&format, &pcm),
            sample_rate: format.sample_rate,
            num_samples: quantized.len(),
            peak_amplitude,
        }
    }

    /// PCM payload (little-endian i16 samples).
    pub fn pcm(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN..]
    }

    /// Decoded sample values of the payload.
    pub fn samples(&self) -> Vec<i16> {
        self.pcm()
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Returns true if every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.peak_amplitude == 0
    }

    /// Writes the file to `path` atomically.
    ///
    /// Bytes go to a temporary file in the destination directory which is
    /// synced and then renamed over `path`. On failure nothing is left at
    /// `path` and an existing file there is not modified.
    pub fn write_atomic(&self, path: &Path) -> SynthResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SynthError::io(path, e))?;
        tmp.write_all(&self.wav_data)
            .map_err(|e| SynthError::io(path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| SynthError::io(path, e))?;
        tmp.persist(path).map_err(|e| SynthError::io(path, e.error))?;

        info!(
            path = %path.display(),
            bytes = self.wav_data.len(),
            samples = self.num_samples,
            "wrote wav"
        );
        Ok(())
    }
}
