//! Container serialization and PCM quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical RIFF + fmt + data headers.
pub(crate) const HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    // RIFF size excludes the 8-byte "RIFF"+size prefix
    let riff_size = HEADER_LEN as u32 - 8 + data_size;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // PCM fmt chunk size
    writer.write_all(&1u16.to_le_bytes())?; // format tag 1 = linear PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Quantizes samples to signed 16-bit: `round(clamp(s, -1, 1) * 32767)`.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16)
        .collect()
}

/// Packs 16-bit values as little-endian bytes.
pub fn pack_pcm16(values: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(values.len() * 2);
    for value in values {
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Quantizes samples and packs them as little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    pack_pcm16(&quantize(samples))
}
