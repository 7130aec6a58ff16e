//! Repeated click sequences with seeded timing and pitch jitter.
//!
//! A sequence renders the same template N times into one shared buffer.
//! Random draws happen in a fixed order on the caller's stream: all gaps
//! first, then for each click its frequency factor followed by whatever the
//! click's noise events consume.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{require_non_negative, require_positive, SynthError, SynthResult};
use crate::event::SoundEvent;
use crate::rng::jitter;
use crate::synthesis::SoundBuffer;

/// N jittered repetitions of a click template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickSequence {
    /// Events of one click, with offsets relative to the click start.
    pub template: Vec<SoundEvent>,
    /// Nominal length of one click.
    pub template_duration_seconds: f64,
    /// Number of clicks.
    pub count: usize,
    /// Silence between consecutive clicks before jitter.
    pub nominal_gap_seconds: f64,
    /// Full width of the uniform gap jitter.
    pub gap_jitter_range: f64,
    /// Full width of the uniform frequency jitter.
    pub freq_jitter_range: f64,
}

/// Timing drawn for one rendering of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceTiming {
    /// Gap after each click except the last.
    pub gaps: Vec<f64>,
    /// Start offset of each click.
    pub offsets: Vec<f64>,
    /// Total buffer duration.
    pub total_duration_seconds: f64,
}

impl ClickSequence {
    /// Creates a sequence with no gap and no jitter.
    pub fn new(template: Vec<SoundEvent>, template_duration_seconds: f64, count: usize) -> Self {
        Self {
            template,
            template_duration_seconds,
            count,
            nominal_gap_seconds: 0.0,
            gap_jitter_range: 0.0,
            freq_jitter_range: 0.0,
        }
    }

    /// Sets the nominal gap and its jitter range.
    pub fn with_gap(mut self, nominal_gap_seconds: f64, gap_jitter_range: f64) -> Self {
        self.nominal_gap_seconds = nominal_gap_seconds;
        self.gap_jitter_range = gap_jitter_range;
        self
    }

    /// Sets the frequency jitter range.
    pub fn with_freq_jitter(mut self, freq_jitter_range: f64) -> Self {
        self.freq_jitter_range = freq_jitter_range;
        self
    }

    /// Checks the sequence and every template event.
    pub fn validate(&self) -> SynthResult<()> {
        if self.template.is_empty() {
            return Err(SynthError::invalid_param(
                "template",
                "sequence template must contain at least one event",
            ));
        }
        if self.count == 0 {
            return Err(SynthError::invalid_param("count", "must be at least 1"));
        }
        require_positive("template_duration_seconds", self.template_duration_seconds)?;
        require_non_negative("nominal_gap_seconds", self.nominal_gap_seconds)?;
        require_non_negative("gap_jitter_range", self.gap_jitter_range)?;
        require_non_negative("freq_jitter_range", self.freq_jitter_range)?;
        if self.freq_jitter_range >= 2.0 {
            return Err(SynthError::invalid_param(
                "freq_jitter_range",
                format!(
                    "must be < 2.0 to keep frequencies positive, got {}",
                    self.freq_jitter_range
                ),
            ));
        }
        for event in &self.template {
            event.validate()?;
        }
        Ok(())
    }

    /// Draws one gap: `nominal_gap + U[-range/2, +range/2]`.
    pub fn draw_gap(&self, rng: &mut Pcg32) -> f64 {
        self.nominal_gap_seconds + jitter(rng, self.gap_jitter_range)
    }

    /// Draws one per-click frequency factor: `1 + U[-range/2, +range/2]`.
    pub fn draw_frequency_factor(&self, rng: &mut Pcg32) -> f64 {
        1.0 + jitter(rng, self.freq_jitter_range)
    }

    /// Draws all gaps and derives click offsets and the total duration.
    pub fn draw_timing(&self, rng: &mut Pcg32) -> SequenceTiming {
        let gaps: Vec<f64> = (1..self.count).map(|_| self.draw_gap(rng)).collect();

        let mut offsets = Vec::with_capacity(self.count);
        let mut position = 0.0;
        for k in 0..self.count {
            offsets.push(position);
            position += self.template_duration_seconds;
            if let Some(gap) = gaps.get(k) {
                position += gap;
            }
        }

        SequenceTiming {
            gaps,
            offsets,
            total_duration_seconds: position,
        }
    }

    /// Renders the whole sequence into a fresh buffer.
    ///
    /// # Arguments
    /// * `rng` - Stream for gap, frequency and noise draws, consumed in that order
    ///
    /// # Returns
    /// A buffer of `count` template durations plus the drawn gaps
    pub fn render(&self, rng: &mut Pcg32) -> SynthResult<SoundBuffer> {
        self.validate()?;

        let timing = self.draw_timing(rng);
        let mut buffer = SoundBuffer::silent(timing.total_duration_seconds)?;

        for &offset in &timing.offsets {
            let factor = self.draw_frequency_factor(rng);
            for event in &self.template {
                let instance = event.with_frequency_scale(factor).offset_by(offset);
                buffer.render_event(&instance, rng);
            }
        }

        debug!(
            clicks = self.count,
            samples = buffer.len(),
            total_seconds = timing.total_duration_seconds,
            "rendered click sequence"
        );
        Ok(buffer)
    }

    /// Total number of events rendered by this sequence.
    pub fn event_count(&self) -> usize {
        self.template.len() * self.count
    }
}
