//! Sample encoder: normalization, volume, 16-bit quantization and WAV output.
//!
//! The container is always the canonical 44-byte-header RIFF/WAVE layout with
//! a single PCM `fmt ` chunk (mono, 16-bit, 44100 Hz) followed by the `data`
//! chunk. No timestamps or optional chunks are written, so identical samples
//! always give identical bytes.

mod encode;
mod format;
mod pcm;
mod result;
mod writer;


pub use encode::{apply_volume, encode, normalize};
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::EncodedAudio;
pub use writer::{pack_pcm16, quantize, samples_to_pcm16, write_wav, write_wav_to_vec};
