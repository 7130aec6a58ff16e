//! The fixed table of named sound variants.
//!
//! Each variant is pure data: a list of events (or a click sequence built
//! from a template), the final volume and the RNG seed. Rendering goes
//! through the same synthesizer and encoder for every variant.

use std::fmt;
use std::str::FromStr;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{SynthError, SynthResult};
use crate::event::{partials, SoundEvent};
use crate::sequence::ClickSequence;
use crate::synthesis::{synthesize, SoundBuffer};

/// Name of a preset sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Three-partial bell chord.
    Bell,
    /// C6 + E6 major third.
    Chime,
    /// Short quiet A5 pop.
    Subtle,
    /// Ascending C5-E5-G5 completion melody.
    Complete,
    /// Single keyboard click.
    Click,
    /// Three keyboard clicks.
    Clicks,
    /// Single mechanical switch press.
    Mech,
    /// Three mechanical switch presses.
    Mechs,
    /// Single low "thock" press.
    Thock,
    /// Three low "thock" presses.
    Thocks,
}

impl Variant {
    /// Every variant, in listing order.
    pub const ALL: [Variant; 10] = [
        Variant::Bell,
        Variant::Chime,
        Variant::Subtle,
        Variant::Complete,
        Variant::Click,
        Variant::Clicks,
        Variant::Mech,
        Variant::Mechs,
        Variant::Thock,
        Variant::Thocks,
    ];

    /// Stable identifier.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Bell => "bell",
            Variant::Chime => "chime",
            Variant::Subtle => "subtle",
            Variant::Complete => "complete",
            Variant::Click => "click",
            Variant::Clicks => "clicks",
            Variant::Mech => "mech",
            Variant::Mechs => "mechs",
            Variant::Thock => "thock",
            Variant::Thocks => "thocks",
        }
    }

    /// Output file name for this variant.
    pub fn file_name(self) -> String {
        format!("{}.wav", self.name())
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Variant::Bell => "Classic bell tone",
            Variant::Chime => "Pleasant high chime",
            Variant::Subtle => "Very short, quiet pop",
            Variant::Complete => "Ascending completion melody",
            Variant::Click => "Single keyboard key click",
            Variant::Clicks => "Multiple keyboard key clicks (typing)",
            Variant::Mech => "Mechanical switch: click, clack, thock and spring noise",
            Variant::Mechs => "Multiple mechanical switch presses",
            Variant::Thock => "Deep low-frequency thock with a hint of click",
            Variant::Thocks => "Multiple thock presses",
        }
    }

    /// The preset data for this variant.
    pub fn preset(self) -> Preset {
        let (composition, volume, seed) = match self {
            Variant::Bell => (
                Composition::Events {
                    events: vec![SoundEvent::harmonic(
                        800.0,
                        partials(&[(1.0, 1.0), (1.25, 1.0), (1.5, 1.0)]),
                        0.4,
                        TONE_FADE,
                    )
                    .with_gain(1.0 / 3.0)],
                    total_duration_seconds: 0.4,
                },
                level(7926),
                0,
            ),
            Variant::Chime => (
                Composition::Events {
                    events: vec![SoundEvent::harmonic(
                        C6,
                        partials(&[(1.0, 1.0), (E6 / C6, 1.0)]),
                        0.5,
                        TONE_FADE,
                    )
                    .with_gain(0.5)],
                    total_duration_seconds: 0.5,
                },
                level(9829),
                0,
            ),
            Variant::Subtle => (
                Composition::Events {
                    events: vec![SoundEvent::tone(880.0, 0.15, TONE_FADE)],
                    total_duration_seconds: 0.15,
                },
                level(6553),
                0,
            ),
            Variant::Complete => (
                Composition::Events {
                    events: vec![
                        SoundEvent::tone(523.25, 0.15, TONE_FADE).with_gain(0.25),
                        SoundEvent::tone(659.25, 0.15, TONE_FADE)
                            .starting_at(0.15)
                            .with_gain(0.25),
                        SoundEvent::tone(783.99, 0.3, TONE_FADE)
                            .starting_at(0.3)
                            .with_gain(0.25),
                    ],
                    total_duration_seconds: 0.6,
                },
                level(8191),
                0,
            ),
            Variant::Click => (keyboard_clicks(1), level(3408), 42),
            Variant::Clicks => (keyboard_clicks(3), level(3442), 43),
            Variant::Mech => (
                Composition::Events {
                    events: mechanical_template(),
                    total_duration_seconds: 0.06,
                },
                0.15,
                42,
            ),
            Variant::Mechs => (
                Composition::Sequence(
                    ClickSequence::new(mechanical_template(), 0.06, 3)
                        .with_gap(0.04, 0.02)
                        .with_freq_jitter(0.08),
                ),
                0.15,
                44,
            ),
            Variant::Thock => (
                Composition::Events {
                    events: thock_template(),
                    total_duration_seconds: 0.08,
                },
                0.15,
                45,
            ),
            Variant::Thocks => (
                Composition::Sequence(
                    ClickSequence::new(thock_template(), 0.08, 3)
                        .with_gap(0.045, 0.02)
                        .with_freq_jitter(0.08),
                ),
                0.15,
                46,
            ),
        };

        Preset {
            variant: self,
            composition,
            volume,
            seed,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SynthError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

/// Volume that puts the output peak at `peak` 16-bit steps.
///
/// The tone and key-click variants are pinned to the peaks of their earlier
/// recordings, which were mixed without normalization.
fn level(peak: u16) -> f64 {
    f64::from(peak) / f64::from(i16::MAX)
}

const C6: f64 = 1046.50;
const E6: f64 = 1318.51;

/// 5% linear fade in, 20% linear fade out.
const TONE_FADE: Envelope = Envelope::Fade {
    fade_in: 0.05,
    fade_out: 0.2,
};

/// Sharp squared attack over 10%, quadratic decay from 30%.
const KEY_CLICK: Envelope = Envelope::KeyClick {
    attack: 0.1,
    decay_start: 0.3,
};

/// One keyboard click: three bright partials plus a little noise.
fn keyboard_click_template() -> Vec<SoundEvent> {
    vec![
        SoundEvent::harmonic(
            3000.0,
            partials(&[(1.0, 1.0), (1.5, 1.0), (2.0, 1.0)]),
            0.025,
            KEY_CLICK,
        )
        .with_gain(0.25),
        SoundEvent::noise(0.025, KEY_CLICK).with_gain(0.01875),
    ]
}

fn keyboard_clicks(count: usize) -> Composition {
    Composition::Sequence(
        ClickSequence::new(keyboard_click_template(), 0.025, count)
            .with_gap(0.035, 0.0)
            .with_freq_jitter(0.1),
    )
}

/// Switch click, keycap clack, housing thock and spring noise.
fn mechanical_template() -> Vec<SoundEvent> {
    vec![
        SoundEvent::harmonic(
            4500.0,
            partials(&[(1.0, 1.0), (2.0, 0.5), (3.0, 0.3)]),
            0.008,
            Envelope::exponential(180.0),
        )
        .with_gain(0.6),
        SoundEvent::harmonic(
            2000.0,
            partials(&[(1.0, 1.0), (1.5, 0.4)]),
            0.015,
            Envelope::exponential(100.0),
        )
        .starting_at(0.003)
        .with_gain(0.5),
        SoundEvent::harmonic(
            400.0,
            partials(&[(1.0, 1.0), (2.0, 0.3)]),
            0.03,
            Envelope::exponential(50.0),
        )
        .starting_at(0.005)
        .with_gain(0.4),
        SoundEvent::noise(0.012, Envelope::exponential(150.0)).with_gain(0.15),
    ]
}

/// Same layers as the mechanical press, rebalanced toward the low thock.
fn thock_template() -> Vec<SoundEvent> {
    vec![
        SoundEvent::harmonic(
            4000.0,
            partials(&[(1.0, 1.0), (2.0, 0.3)]),
            0.006,
            Envelope::exponential(200.0),
        )
        .with_gain(0.3),
        SoundEvent::harmonic(
            1800.0,
            partials(&[(1.0, 1.0), (1.5, 0.3)]),
            0.012,
            Envelope::exponential(90.0),
        )
        .starting_at(0.003)
        .with_gain(0.4),
        SoundEvent::harmonic(
            350.0,
            partials(&[(1.0, 1.0), (2.0, 0.5), (3.0, 0.3)]),
            0.05,
            Envelope::exponential(35.0),
        )
        .starting_at(0.004)
        .with_gain(0.9),
        SoundEvent::noise(0.008, Envelope::exponential(170.0)).with_gain(0.08),
    ]
}

/// How a preset's buffer is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Composition {
    /// A fixed event list in a buffer of the given length.
    Events {
        /// Events to mix.
        events: Vec<SoundEvent>,
        /// Buffer length in seconds.
        total_duration_seconds: f64,
    },
    /// A jittered click sequence.
    Sequence(ClickSequence),
}

impl Composition {
    /// Synthesizes the composition.
    pub fn render(&self, rng: &mut Pcg32) -> SynthResult<SoundBuffer> {
        match self {
            Composition::Events {
                events,
                total_duration_seconds,
            } => synthesize(events, *total_duration_seconds, rng),
            Composition::Sequence(sequence) => sequence.render(rng),
        }
    }

    /// Number of events mixed into the buffer.
    pub fn event_count(&self) -> usize {
        match self {
            Composition::Events { events, .. } => events.len(),
            Composition::Sequence(sequence) => sequence.event_count(),
        }
    }
}

/// A complete, renderable sound description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Variant this preset belongs to.
    pub variant: Variant,
    /// Events or sequence to synthesize.
    pub composition: Composition,
    /// Final peak level as a fraction of full scale.
    pub volume: f64,
    /// Seed for noise and jitter.
    pub seed: u32,
}

impl Preset {
    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_and_file_names_are_stable() {
        let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec![
                "bell", "chime", "subtle", "complete", "click", "clicks", "mech", "mechs",
                "thock", "thocks"
            ]
        );
        assert_eq!(Variant::Thock.file_name(), "thock.wav");
        assert_eq!(Variant::Mechs.file_name(), "mechs.wav");
        assert_eq!(Variant::Click.to_string(), "click");
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("thock".parse::<Variant>().unwrap(), Variant::Thock);
        assert_eq!(" MECH ".parse::<Variant>().unwrap(), Variant::Mech);
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
        }

        let err = "boop".parse::<Variant>().unwrap_err();
        assert_eq!(err.code(), "SYNTH_003");
        assert!(err.to_string().contains("boop"));
    }

    #[test]
    fn test_every_preset_is_valid() {
        for variant in Variant::ALL {
            let preset = variant.preset();
            assert_eq!(preset.variant, variant);
            assert!((0.0..=1.0).contains(&preset.volume));
            match &preset.composition {
                Composition::Events { events, .. } => {
                    for event in events {
                        event.validate().unwrap();
                    }
                }
                Composition::Sequence(sequence) => sequence.validate().unwrap(),
            }
        }
    }

    #[test]
    fn test_noise_variant_seeds() {
        let seeds: Vec<u32> = [
            Variant::Click,
            Variant::Clicks,
            Variant::Mech,
            Variant::Mechs,
            Variant::Thock,
            Variant::Thocks,
        ]
        .iter()
        .map(|v| v.preset().seed)
        .collect();
        assert_eq!(seeds, vec![42, 43, 42, 44, 45, 46]);
    }

    #[test]
    fn test_thock_buffer_length() {
        let buffer = Variant::Thock
            .preset()
            .composition
            .render(&mut create_rng(45))
            .unwrap();
        assert_eq!(buffer.len(), 3528);
    }

    #[test]
    fn test_sequence_lengths() {
        let mechs = Variant::Mechs.preset();
        let buffer = mechs.composition.render(&mut create_rng(mechs.seed)).unwrap();
        // 3 * 60 ms + 2 gaps of 30..50 ms
        assert!(buffer.len() >= crate::synthesis::sample_count(0.24) - 1);
        assert!(buffer.len() <= crate::synthesis::sample_count(0.28) + 1);

        let clicks = Variant::Clicks.preset();
        let buffer = clicks.composition.render(&mut create_rng(clicks.seed)).unwrap();
        // 3 * 25 ms + 2 * 35 ms with no gap jitter
        assert_eq!(buffer.len(), crate::synthesis::sample_count(0.145));
    }

    #[test]
    fn test_event_counts() {
        assert_eq!(Variant::Complete.preset().composition.event_count(), 3);
        assert_eq!(Variant::Mech.preset().composition.event_count(), 4);
        assert_eq!(Variant::Thocks.preset().composition.event_count(), 12);
        assert_eq!(Variant::Click.preset().composition.event_count(), 2);
    }

    #[test]
    fn test_with_seed() {
        let preset = Variant::Thocks.preset().with_seed(7);
        assert_eq!(preset.seed, 7);
        assert_eq!(preset.variant, Variant::Thocks);
    }

    #[test]
    fn test_preset_serializes() {
        let json = serde_json::to_value(Variant::Thocks.preset()).unwrap();
        assert_eq!(json["variant"], "thocks");
        assert_eq!(json["composition"]["type"], "sequence");
        assert_eq!(json["composition"]["count"], 3);
        assert_eq!(json["composition"]["template"][2]["base_frequency_hz"], 350.0);

        let back: Preset = serde_json::from_value(json).unwrap();
        assert_eq!(back, Variant::Thocks.preset());
    }
}
