//! Normalize, scale and quantize a synthesized buffer.

use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::synthesis::SoundBuffer;

use super::result::EncodedAudio;

/// Scales `samples` so the loudest one reaches exactly ±1.0.
///
/// Silent input is left untouched. Returns the peak found before scaling.
pub fn normalize(samples: &mut [f64]) -> f64 {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);

    if peak > 0.0 {
        let gain = 1.0 / peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }

    peak
}

/// Multiplies every sample by `volume`.
pub fn apply_volume(samples: &mut [f64], volume: f64) {
    for sample in samples.iter_mut() {
        *sample *= volume;
    }
}

/// Encodes a buffer as a mono 16-bit 44100 Hz WAV.
///
/// The buffer is normalized to full scale first and only then scaled by
/// `volume`, so the output peak is `volume` of full scale however many
/// components were mixed into it.
///
/// # Arguments
/// * `buffer` - Synthesized samples, any finite amplitude
/// * `volume` - Output peak as a fraction of full scale, within `[0, 1]`
///
/// # Returns
/// The encoded WAV, or `InvalidParameter` if `volume` is out of range or the
/// buffer holds a non-finite sample (an overflowed mix)
pub fn encode(buffer: SoundBuffer, volume: f64) -> SynthResult<EncodedAudio> {
    if !(0.0..=1.0).contains(&volume) {
        return Err(SynthError::invalid_param(
            "volume",
            format!("must be within [0, 1], got {}", volume),
        ));
    }
    if let Some(index) = buffer.samples().iter().position(|s| !s.is_finite()) {
        return Err(SynthError::invalid_param(
            "samples",
            format!(
                "sample {} is {}; the mix overflowed and cannot be normalized",
                index,
                buffer.samples()[index]
            ),
        ));
    }

    let mut samples = buffer.into_samples();
    let peak = normalize(&mut samples);
    apply_volume(&mut samples, volume);

    let encoded = EncodedAudio::from_normalized(&samples);
    debug!(
        samples = encoded.num_samples,
        input_peak = peak,
        volume,
        output_peak = encoded.peak_amplitude,
        "encoded wav"
    );
    Ok(encoded)
}
