//! Additive waveform synthesis.
//!
//! A [`SoundBuffer`] is a zeroed, fixed-length mono sample buffer. Every
//! [`SoundEvent`] is rendered into it by addition only, so simultaneous
//! sources (switch click, keycap clack, housing resonance, mechanism noise)
//! superpose the way physical sounds do. Output is unclamped; limiting is the
//! encoder's job.

use std::f64::consts::TAU;

use rand_pcg::Pcg32;
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::event::{EventKind, SoundEvent};
use crate::rng::noise_sample;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples needed to hold `duration_seconds` of audio.
pub fn sample_count(duration_seconds: f64) -> usize {
    (duration_seconds * SAMPLE_RATE as f64).ceil() as usize
}

/// Mono floating-point sample buffer at [`SAMPLE_RATE`].
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer {
    samples: Vec<f64>,
}

impl SoundBuffer {
    /// Creates a silent buffer long enough for `total_duration_seconds`.
    pub fn silent(total_duration_seconds: f64) -> SynthResult<Self> {
        if !(total_duration_seconds.is_finite() && total_duration_seconds > 0.0) {
            return Err(SynthError::invalid_param(
                "total_duration_seconds",
                format!("must be a finite value > 0, got {}", total_duration_seconds),
            ));
        }
        Ok(Self {
            samples: vec![0.0; sample_count(total_duration_seconds)],
        })
    }

    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Buffer length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
    }

    /// Adds an already validated event.
    ///
    /// The event covers every sample whose time lies in
    /// `[start, start + duration)`; samples past the buffer end are dropped.
    /// Noise draws one value per covered sample, in ascending order.
    pub(crate) fn render_event(&mut self, event: &SoundEvent, rng: &mut Pcg32) {
        let sample_rate = SAMPLE_RATE as f64;
        let start = event.start_offset_seconds;
        let first = (start * sample_rate).floor() as usize;

        for i in first..self.samples.len() {
            let t = i as f64 / sample_rate - start;
            if t < 0.0 {
                continue;
            }
            if t >= event.duration_seconds {
                break;
            }

            let raw = match &event.kind {
                EventKind::Harmonic {
                    base_frequency_hz,
                    harmonics,
                } => harmonics
                    .iter()
                    .map(|p| p.weight * (TAU * base_frequency_hz * p.multiplier * t).sin())
                    .sum::<f64>(),
                EventKind::Noise => noise_sample(rng),
            };

            let envelope = event.envelope.amplitude(t, event.duration_seconds);
            self.samples[i] += raw * envelope * event.gain;
        }
    }
}

/// Renders `events` into a fresh buffer of `total_duration_seconds`.
///
/// All events are validated before any sample is produced. Noise events draw
/// from `rng` in event order.
///
/// # Arguments
/// * `events` - Events to mix, in rendering order
/// * `total_duration_seconds` - Buffer length; events running past it are truncated
/// * `rng` - Stream that noise events draw from
///
/// # Returns
/// The mixed, unclamped buffer, or `InvalidParameter` if the duration or any
/// event is malformed
pub fn synthesize(
    events: &[SoundEvent],
    total_duration_seconds: f64,
    rng: &mut Pcg32,
) -> SynthResult<SoundBuffer> {
    let mut buffer = SoundBuffer::silent(total_duration_seconds)?;
    for event in events {
        event.validate()?;
    }
    for event in events {
        buffer.render_event(event, rng);
    }

    let end = buffer.duration_seconds();
    debug!(
        events = events.len(),
        noise_events = events.iter().filter(|e| e.is_noise()).count(),
        truncated = events.iter().filter(|e| e.end_seconds() > end).count(),
        samples = buffer.len(),
        peak = buffer.peak(),
        "synthesized buffer"
    );
    Ok(buffer)
}
