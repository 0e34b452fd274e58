//! Clip render pass
//!
//! Produces a new clip from a source clip and a set of edit parameters:
//! selected range, fade-in/out envelopes, gain, filter, and pitch. This is
//! the one place the DSP primitives compose, and the only operation that
//! interprets the edit parameters as a whole.
//!
//! All gain (volume and fades) is applied here exactly once; the WAV encoder
//! only quantizes.

use serde::{Deserialize, Serialize};

use crate::dsp::{BiquadCoeffs, BiquadState, FadeCurve, FadeDirection, FadeShape, FilterSpec};
use crate::engine::clip::SampleClip;
use crate::error::{ClipsmithError, Result};

/// Selected portion of a clip, as percentages of its frame count
///
/// Both ratios live in [0,100]. A degenerate selection (equal ratios, or one
/// that floors to zero frames) renders a single frame rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start_ratio: f32,
    pub end_ratio: f32,
}

impl Range {
    /// Create a range, rejecting inverted bounds
    pub fn new(start_ratio: f32, end_ratio: f32) -> Result<Self> {
        let range = Self {
            start_ratio,
            end_ratio,
        };
        range.validate()?;
        Ok(range)
    }

    /// The whole clip
    pub fn full() -> Self {
        Self {
            start_ratio: 0.0,
            end_ratio: 100.0,
        }
    }

    /// Reject inverted bounds before any clamping happens
    pub fn validate(&self) -> Result<()> {
        if !self.start_ratio.is_finite() || !self.end_ratio.is_finite() {
            return Err(ClipsmithError::invalid_parameter(
                "range",
                format!("{}..{}", self.start_ratio, self.end_ratio),
                "finite ratios in [0,100]",
            ));
        }
        if self.start_ratio > self.end_ratio {
            return Err(ClipsmithError::invalid_parameter(
                "range",
                format!("{}..{}", self.start_ratio, self.end_ratio),
                "start_ratio <= end_ratio",
            ));
        }
        Ok(())
    }

    /// Convert to a frame window `(start_frame, frame_count)` over a clip of
    /// `frames` total frames. The window always has at least one frame and
    /// stays in bounds.
    pub fn frame_window(&self, frames: usize) -> (usize, usize) {
        let start = (frames as f64 * f64::from(self.start_ratio.clamp(0.0, 100.0)) / 100.0)
            .floor() as usize;
        let end =
            (frames as f64 * f64::from(self.end_ratio.clamp(0.0, 100.0)) / 100.0).floor() as usize;

        let count = if end > start { end - start } else { 1 };
        // A selection pinned to the very end still needs one frame of data
        let start = start.min(frames.saturating_sub(count));
        (start, count)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::full()
    }
}

/// Fade envelope settings for one direction
///
/// `amount` is a percentage of the selected range's frame count, not of the
/// whole clip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FadeSpec {
    pub amount: f32,
    pub shape: FadeShape,
}

impl FadeSpec {
    pub fn new(amount: f32, shape: FadeShape) -> Self {
        Self { amount, shape }
    }

    fn frames(&self, frame_count: usize) -> usize {
        (frame_count as f64 * f64::from(self.amount.clamp(0.0, 100.0)) / 100.0).floor() as usize
    }
}

/// Everything one render pass needs
///
/// Fully determines the output for a given source clip; no state leaks
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditParams {
    pub range: Range,
    pub fade_in: FadeSpec,
    pub fade_out: FadeSpec,
    /// Linear gain, typically in [0,1]
    pub volume: f32,
    /// Playback-rate factor. The output keeps the frame count and declares
    /// `round(source_rate * pitch)` as its sample rate, so pitch and
    /// duration change together (varispeed).
    pub pitch: f32,
    pub filter: FilterSpec,
}

impl Default for EditParams {
    fn default() -> Self {
        Self {
            range: Range::full(),
            fade_in: FadeSpec::default(),
            fade_out: FadeSpec::default(),
            volume: 1.0,
            pitch: 1.0,
            filter: FilterSpec::default(),
        }
    }
}

impl EditParams {
    /// Validate the parameter aggregate
    pub fn validate(&self) -> Result<()> {
        self.range.validate()?;
        if self.pitch <= 0.0 || !self.pitch.is_finite() {
            return Err(ClipsmithError::invalid_parameter(
                "pitch",
                self.pitch,
                "> 0",
            ));
        }
        Ok(())
    }
}

/// Render a new clip from `clip` under `params`
///
/// The output covers the selected range (at least one frame), with fades,
/// volume and filtering applied per channel. Each channel gets its own
/// filter state, zeroed at the start of the pass.
pub fn render(clip: &SampleClip, params: &EditParams) -> Result<SampleClip> {
    params.validate()?;

    let channels = clip.channels() as usize;
    let (start_frame, frame_count) = params.range.frame_window(clip.frames());

    let fade_in_frames = params.fade_in.frames(frame_count);
    let fade_out_frames = params.fade_out.frames(frame_count);
    let fade_in_curve = FadeCurve::for_fade(params.fade_in.shape, FadeDirection::In);
    let fade_out_curve = FadeCurve::for_fade(params.fade_out.shape, FadeDirection::Out);

    let coeffs = if params.filter.is_active() {
        Some(BiquadCoeffs::for_spec(&params.filter, clip.sample_rate())?)
    } else {
        None
    };

    let source = clip.samples();
    let mut samples = vec![0.0f32; frame_count * channels];

    for channel in 0..channels {
        let mut state = BiquadState::default();

        for frame in 0..frame_count {
            let raw = source[(start_frame + frame) * channels + channel];

            let fade_in_gain = if fade_in_frames > 0 && frame < fade_in_frames {
                fade_in_curve.evaluate(frame as f32 / fade_in_frames as f32)
            } else {
                1.0
            };

            let fade_out_gain = if fade_out_frames > 0 && frame >= frame_count - fade_out_frames {
                1.0 - fade_out_curve.evaluate((frame_count - frame) as f32 / fade_out_frames as f32)
            } else {
                1.0
            };

            let gain = params.volume * fade_in_gain * fade_out_gain;
            let shaped = match &coeffs {
                Some(coeffs) => state.process(raw, coeffs) * gain,
                None => raw * gain,
            };

            samples[frame * channels + channel] = shaped;
        }
    }

    let output_rate = (f64::from(clip.sample_rate()) * f64::from(params.pitch)).round() as u32;
    if output_rate == 0 {
        return Err(ClipsmithError::invalid_parameter(
            "pitch",
            params.pitch,
            "a factor yielding a positive sample rate",
        ));
    }

    SampleClip::from_interleaved(samples, clip.channels(), output_rate)
}
