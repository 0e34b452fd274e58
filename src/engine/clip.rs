//! Sample clip buffer
//!
//! Interleaved float samples plus the per-clip facts (channel count, sample
//! rate). Samples are stored as [L0, R0, L1, R1, ...], matching common audio
//! file layouts. Values are logically in [-1,1] but are not clamped until
//! encoding.

use crate::error::{ClipsmithError, Result};

/// An owned audio clip: interleaved samples plus metadata
///
/// Construction validates the metadata, so every `SampleClip` in circulation
/// satisfies `samples.len() == frames * channels`, `channels >= 1` and
/// `sample_rate > 0`, and is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleClip {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl SampleClip {
    /// Create a clip from interleaved samples
    pub fn from_interleaved(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(ClipsmithError::invalid_parameter("channels", channels, ">= 1"));
        }
        if sample_rate == 0 {
            return Err(ClipsmithError::invalid_parameter(
                "sample_rate",
                sample_rate,
                "> 0",
            ));
        }
        if samples.is_empty() {
            return Err(ClipsmithError::EmptyInput);
        }
        if samples.len() % channels as usize != 0 {
            return Err(ClipsmithError::InvalidAudio {
                reason: format!(
                    "sample count {} is not divisible by channel count {}",
                    samples.len(),
                    channels
                ),
                source: None,
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of sample frames (one frame spans all channels)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// All interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Mutable access to the interleaved samples
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Sample at the given frame and channel
    pub fn get(&self, frame: usize, channel: u16) -> Option<f32> {
        if frame < self.frames() && channel < self.channels {
            Some(self.samples[frame * self.channels as usize + channel as usize])
        } else {
            None
        }
    }

    /// Highest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
    }
}
