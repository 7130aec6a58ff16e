//! Declarative description of timed oscillator and noise events.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{require_non_negative, require_positive, SynthError, SynthResult};

/// One sine partial of a harmonic event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partial {
    /// Frequency multiplier relative to the event's base frequency.
    pub multiplier: f64,
    /// Linear amplitude weight.
    pub weight: f64,
}

impl Partial {
    /// Creates a partial.
    pub const fn new(multiplier: f64, weight: f64) -> Self {
        Self { multiplier, weight }
    }
}

/// Builds a partial list from `(multiplier, weight)` pairs.
pub fn partials(pairs: &[(f64, f64)]) -> Vec<Partial> {
    pairs
        .iter()
        .map(|&(multiplier, weight)| Partial::new(multiplier, weight))
        .collect()
}

/// What an event sounds like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    /// Sum of weighted sines at multiples of a base frequency.
    Harmonic {
        /// Base frequency in Hz.
        base_frequency_hz: f64,
        /// Partials, in mixing order.
        harmonics: Vec<Partial>,
    },
    /// Uniform white noise in `[-1, 1)`.
    Noise,
}

/// A timed, enveloped contribution to a sound buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEvent {
    /// Buffer time at which the event begins.
    pub start_offset_seconds: f64,
    /// Length of the event's own envelope window.
    pub duration_seconds: f64,
    /// Oscillator or noise source.
    #[serde(flatten)]
    pub kind: EventKind,
    /// Amplitude envelope, evaluated on time since the event start.
    pub envelope: Envelope,
    /// Linear gain applied to the enveloped signal.
    pub gain: f64,
}

impl SoundEvent {
    /// Creates a harmonic event starting at 0 with unit gain.
    pub fn harmonic(
        base_frequency_hz: f64,
        harmonics: Vec<Partial>,
        duration_seconds: f64,
        envelope: Envelope,
    ) -> Self {
        Self {
            start_offset_seconds: 0.0,
            duration_seconds,
            kind: EventKind::Harmonic {
                base_frequency_hz,
                harmonics,
            },
            envelope,
            gain: 1.0,
        }
    }

    /// Creates a single pure tone starting at 0 with unit gain.
    pub fn tone(frequency_hz: f64, duration_seconds: f64, envelope: Envelope) -> Self {
        Self::harmonic(
            frequency_hz,
            vec![Partial::new(1.0, 1.0)],
            duration_seconds,
            envelope,
        )
    }

    /// Creates a noise burst starting at 0 with unit gain.
    pub fn noise(duration_seconds: f64, envelope: Envelope) -> Self {
        Self {
            start_offset_seconds: 0.0,
            duration_seconds,
            kind: EventKind::Noise,
            envelope,
            gain: 1.0,
        }
    }

    /// Sets the start offset in seconds.
    pub fn starting_at(mut self, start_offset_seconds: f64) -> Self {
        self.start_offset_seconds = start_offset_seconds;
        self
    }

    /// Sets the gain.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Time at which the event's window closes (exclusive).
    pub fn end_seconds(&self) -> f64 {
        self.start_offset_seconds + self.duration_seconds
    }

    /// Returns true for noise events.
    pub fn is_noise(&self) -> bool {
        matches!(self.kind, EventKind::Noise)
    }

    /// Returns a copy shifted later in time by `seconds`.
    pub fn offset_by(&self, seconds: f64) -> Self {
        let mut shifted = self.clone();
        shifted.start_offset_seconds += seconds;
        shifted
    }

    /// Returns a copy with every harmonic frequency scaled by `factor`.
    ///
    /// Noise events are returned unchanged.
    pub fn with_frequency_scale(&self, factor: f64) -> Self {
        let mut scaled = self.clone();
        if let EventKind::Harmonic {
            base_frequency_hz, ..
        } = &mut scaled.kind
        {
            *base_frequency_hz *= factor;
        }
        scaled
    }

    /// Checks that the event can be rendered.
    pub fn validate(&self) -> SynthResult<()> {
        require_non_negative("start_offset_seconds", self.start_offset_seconds)?;
        require_positive("duration_seconds", self.duration_seconds)?;
        if !self.gain.is_finite() {
            return Err(SynthError::invalid_param(
                "gain",
                format!("must be finite, got {}", self.gain),
            ));
        }
        self.envelope.validate()?;

        if let EventKind::Harmonic {
            base_frequency_hz,
            harmonics,
        } = &self.kind
        {
            require_positive("base_frequency_hz", *base_frequency_hz)?;
            for partial in harmonics {
                require_positive("harmonic.multiplier", partial.multiplier)?;
                require_non_negative("harmonic.weight", partial.weight)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn thock() -> SoundEvent {
        SoundEvent::harmonic(
            350.0,
            partials(&[(1.0, 1.0), (2.0, 0.5), (3.0, 0.3)]),
            0.05,
            Envelope::exponential(35.0),
        )
        .starting_at(0.004)
        .with_gain(0.9)
    }

    #[test]
    fn test_builder() {
        let event = thock();
        assert_eq!(event.start_offset_seconds, 0.004);
        assert_eq!(event.gain, 0.9);
        assert!((event.end_seconds() - 0.054).abs() < 1e-12);
        assert!(!event.is_noise());
    }

    #[test]
    fn test_frequency_scale_only_touches_base() {
        let scaled = thock().with_frequency_scale(1.02);
        match scaled.kind {
            EventKind::Harmonic {
                base_frequency_hz,
                harmonics,
            } => {
                assert!((base_frequency_hz - 357.0).abs() < 1e-9);
                assert_eq!(harmonics[1], Partial::new(2.0, 0.5));
            }
            EventKind::Noise => panic!("expected harmonic"),
        }

        let noise = SoundEvent::noise(0.008, Envelope::exponential(170.0));
        assert_eq!(noise.with_frequency_scale(1.5), noise);
    }

    #[test]
    fn test_offset_by() {
        let shifted = thock().offset_by(0.1);
        assert!((shifted.start_offset_seconds - 0.104).abs() < 1e-12);
        assert_eq!(shifted.duration_seconds, 0.05);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert!(thock().validate().is_ok());

        let mut event = thock();
        event.duration_seconds = 0.0;
        assert!(event.validate().is_err());

        let event = thock().starting_at(-0.001);
        assert!(event.validate().is_err());

        let event = SoundEvent::tone(0.0, 0.1, Envelope::exponential(10.0));
        assert!(event.validate().is_err());

        let event = SoundEvent::harmonic(
            440.0,
            partials(&[(1.0, -1.0)]),
            0.1,
            Envelope::exponential(10.0),
        );
        assert!(event.validate().is_err());

        let event = SoundEvent::noise(0.1, Envelope::exponential(0.0));
        let err = event.validate().unwrap_err();
        assert!(err.to_string().contains("decay_rate"));

        let event = thock().with_gain(f64::NAN);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_zero_gain_is_valid() {
        let event = SoundEvent::noise(0.1, Envelope::exponential(150.0)).with_gain(0.0);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(thock()).unwrap();
        assert_eq!(json["kind"], "harmonic");
        assert_eq!(json["base_frequency_hz"], 350.0);
        assert_eq!(json["envelope"]["type"], "exponential");

        let back: SoundEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, thock());
    }
}
