//! Clicksynth audio engine
//!
//! Deterministic synthesis of short notification and keyboard sounds,
//! encoded as 16-bit mono WAV.
//!
//! # Overview
//!
//! A sound is described declaratively as a list of timed events. Each event is
//! either a weighted sum of sine partials or a white noise burst, shaped by an
//! envelope and a gain. Events are mixed by addition into one buffer, which
//! the encoder normalizes to full scale, scales by the output volume and
//! quantizes:
//!
//! - **Harmonic events** - sine partials at multiples of a base frequency
//! - **Noise events** - uniform white noise from the seeded stream
//! - **Envelopes** - exponential decay, linear fades and the key-click shape
//! - **Click sequences** - N repetitions of a template with jittered gaps and pitch
//!
//! # Determinism
//!
//! All synthesis is deterministic. Every call creates its own PCG32 stream
//! from the preset's seed, so the same preset always produces byte-identical
//! WAV data. The PCM payload is fingerprinted with BLAKE3.
//!
//! # Example
//!
//! ```no_run
//! use clicksynth_audio::{generate, Variant};
//!
//! let result = generate(&Variant::Thock.preset())?;
//! std::fs::write("thock.wav", &result.wav.wav_data)?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point: preset to WAV
//! - [`preset`] - The built-in variants
//! - [`event`] - Timed oscillator and noise events
//! - [`envelope`] - Amplitude envelopes
//! - [`sequence`] - Jittered click sequences
//! - [`synthesis`] - Additive mixing into sample buffers
//! - [`rng`] - Deterministic RNG
//! - [`wav`] - Normalization, quantization and WAV output

pub mod envelope;
pub mod error;
pub mod event;
pub mod generate;
pub mod preset;
pub mod rng;
pub mod sequence;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use envelope::Envelope;
pub use error::{SynthError, SynthResult};
pub use event::{partials, EventKind, Partial, SoundEvent};
pub use generate::{generate, generate_to_dir, generate_variant, GenerateResult};
pub use preset::{Composition, Preset, Variant};
pub use sequence::ClickSequence;
pub use synthesis::{synthesize, SoundBuffer, SAMPLE_RATE};
pub use wav::{encode, EncodedAudio};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::rng::create_rng;

    fn thock_only(gain: f64) -> Preset {
        Preset {
            variant: Variant::Thock,
            composition: Composition::Events {
                events: vec![
                    SoundEvent::tone(350.0, 0.05, Envelope::exponential(35.0)).with_gain(gain),
                ],
                total_duration_seconds: 0.08,
            },
            volume: 0.15,
            seed: 45,
        }
    }

    #[test]
    fn test_single_thock_scenario() {
        let result = generate(&thock_only(0.9)).unwrap();
        let samples = result.wav.samples();

        assert_eq!(samples.len(), 3528);
        assert!(samples[2205..].iter().all(|&s| s == 0));
        assert!(samples[..2205].iter().any(|&s| s != 0));

        let expected = (0.15_f64 * 32767.0).round() as i32;
        assert!((result.wav.peak_amplitude as i32 - expected).abs() <= 1);
    }

    #[test]
    fn test_zero_gain_noise_gives_silent_payload() {
        let preset = Preset {
            variant: Variant::Click,
            composition: Composition::Events {
                events: vec![SoundEvent::noise(0.05, Envelope::exponential(100.0)).with_gain(0.0)],
                total_duration_seconds: 0.05,
            },
            volume: 0.5,
            seed: 1,
        };

        let result = generate(&preset).unwrap();
        assert!(result.wav.is_silent());
        assert!(result.wav.pcm().iter().all(|&b| b == 0));
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
        assert_eq!(&result.wav.wav_data[8..12], b"WAVE");
    }

    #[test]
    fn test_gain_does_not_change_normalized_output() {
        let quiet = generate(&thock_only(0.1)).unwrap();
        let loud = generate(&thock_only(0.9)).unwrap();
        assert_eq!(quiet.wav.peak_amplitude, loud.wav.peak_amplitude);
    }

    #[test]
    fn test_every_variant_is_deterministic() {
        for variant in Variant::ALL {
            let a = generate_variant(variant).unwrap();
            let b = generate_variant(variant).unwrap();
            assert_eq!(a.wav.wav_data, b.wav.wav_data, "{} not deterministic", variant);
            assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        }
    }

    #[test]
    fn test_composition_matches_direct_synthesis() {
        let preset = Variant::Mech.preset();
        let buffer = preset.composition.render(&mut create_rng(preset.seed)).unwrap();
        let direct = encode(buffer, preset.volume).unwrap();
        let generated = generate(&preset).unwrap();
        assert_eq!(direct, generated.wav);
    }
}
