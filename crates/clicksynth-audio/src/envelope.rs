//! Amplitude envelopes.
//!
//! Every envelope is a pure function of the time elapsed since its event
//! started and of the event's window length, so an event can be rendered at
//! any buffer offset without carrying state between samples.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, SynthError, SynthResult};

/// Amplitude envelope applied to a single sound event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// `exp(-decay_rate * t)`.
    Exponential {
        /// Decay rate in 1/seconds.
        decay_rate: f64,
    },
    /// Linear fade in and fade out, expressed as fractions of the event window.
    Fade {
        /// Fraction of the window spent fading in.
        fade_in: f64,
        /// Fraction of the window spent fading out.
        fade_out: f64,
    },
    /// Squared attack followed by a `1 - p^2` decay to silence.
    KeyClick {
        /// Fraction of the window spent in the attack.
        attack: f64,
        /// Fraction of the window at which the decay starts.
        decay_start: f64,
    },
}

impl Envelope {
    /// Creates an exponential decay envelope.
    pub fn exponential(decay_rate: f64) -> Self {
        Envelope::Exponential { decay_rate }
    }

    /// Creates a linear fade envelope.
    pub fn fade(fade_in: f64, fade_out: f64) -> Self {
        Envelope::Fade { fade_in, fade_out }
    }

    /// Creates a key-click envelope.
    pub fn key_click(attack: f64, decay_start: f64) -> Self {
        Envelope::KeyClick {
            attack,
            decay_start,
        }
    }

    /// Checks that the envelope parameters describe a usable shape.
    pub fn validate(&self) -> SynthResult<()> {
        match *self {
            Envelope::Exponential { decay_rate } => require_positive("decay_rate", decay_rate),
            Envelope::Fade { fade_in, fade_out } => {
                require_positive("fade_in", fade_in)?;
                require_positive("fade_out", fade_out)?;
                if fade_in + fade_out > 1.0 {
                    return Err(SynthError::invalid_param(
                        "fade",
                        format!(
                            "fade_in + fade_out must not exceed 1.0, got {}",
                            fade_in + fade_out
                        ),
                    ));
                }
                Ok(())
            }
            Envelope::KeyClick {
                attack,
                decay_start,
            } => {
                require_positive("attack", attack)?;
                if !(attack <= decay_start && decay_start < 1.0) {
                    return Err(SynthError::invalid_param(
                        "decay_start",
                        format!(
                            "must satisfy attack <= decay_start < 1.0, got {} and {}",
                            attack, decay_start
                        ),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Returns the envelope level at local time `t` for a window of `duration` seconds.
    ///
    /// `t` is expected to lie in `[0, duration)`.
    #[inline]
    pub fn amplitude(&self, t: f64, duration: f64) -> f64 {
        match *self {
            Envelope::Exponential { decay_rate } => (-decay_rate * t).exp(),
            Envelope::Fade { fade_in, fade_out } => {
                let progress = t / duration;
                let mut level = 1.0;
                if progress < fade_in {
                    level *= progress / fade_in;
                }
                if progress > 1.0 - fade_out {
                    level *= (1.0 - progress) / fade_out;
                }
                level
            }
            Envelope::KeyClick {
                attack,
                decay_start,
            } => {
                let progress = t / duration;
                let mut level = 1.0;
                if progress < attack {
                    let a = progress / attack;
                    level *= a * a;
                }
                if progress > decay_start {
                    let d = (progress - decay_start) / (1.0 - decay_start);
                    level *= 1.0 - d * d;
                }
                level
            }
        }
    }
}
