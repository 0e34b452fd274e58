//! Canonical WAV encoding
//!
//! Serializes a clip to an uncompressed 16-bit PCM RIFF/WAVE byte stream.
//! The layout is fixed and byte-exact for a given input:
//!
//! ```text
//! "RIFF" | u32 chunk_size = 36 + data_bytes | "WAVE"
//! "fmt " | u32 16 | u16 format = 1 (PCM) | u16 channels | u32 sample_rate
//!        | u32 byte_rate | u16 block_align | u16 bits_per_sample = 16
//! "data" | u32 data_bytes | interleaved i16 samples
//! ```
//!
//! All integers little-endian; chunk tags are exactly four ASCII bytes with
//! no terminator. Gain is expected to have been applied during rendering;
//! encoding only quantizes, rounding half away from zero and clamping to the
//! i16 range.

use crate::engine::clip::SampleClip;

const BYTES_PER_SAMPLE: u32 = 2;
const PCM_FORMAT: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Encode a clip as a complete WAV byte stream
pub fn encode(clip: &SampleClip) -> Vec<u8> {
    let sample_count = clip.samples().len() as u32;
    let data_bytes = sample_count * BYTES_PER_SAMPLE;
    let channels = u32::from(clip.channels());
    let sample_rate = clip.sample_rate();

    let mut bytes = Vec::with_capacity(44 + data_bytes as usize);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_bytes).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&PCM_FORMAT.to_le_bytes());
    bytes.extend_from_slice(&clip.channels().to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * channels * BYTES_PER_SAMPLE).to_le_bytes());
    bytes.extend_from_slice(&((channels * BYTES_PER_SAMPLE) as u16).to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_bytes.to_le_bytes());

    for &sample in clip.samples() {
        bytes.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    bytes
}

/// Convert a float sample to i16, rounding then clamping
fn quantize(sample: f32) -> i16 {
    (sample * i16::MAX as f32).round().clamp(-32768.0, 32767.0) as i16
}
