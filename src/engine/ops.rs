//! Whole-buffer operations
//!
//! Peak normalization, frame-order reversal, and bit-depth crushing. All
//! value-returning; callers decide whether to replace their stored clip.

use crate::engine::clip::SampleClip;
use crate::error::{ClipsmithError, Result};

/// Headroom subtracted from the normalization factor, keeping the rescaled
/// peak just under full scale
const NORMALIZE_HEADROOM: f32 = 0.01;

/// Rescale so the peak lands just below full scale
///
/// The scale factor is `1/peak - 0.01`, so the output peak is
/// `1 - 0.01 * peak`. A silent clip is returned unchanged rather than
/// failing. Callers tracking a separate volume multiplier should reset it to
/// 1; the normalization has absorbed it.
pub fn normalize(clip: &SampleClip) -> SampleClip {
    let peak = clip.peak();
    if peak == 0.0 {
        return clip.clone();
    }

    let factor = 1.0 / peak - NORMALIZE_HEADROOM;
    let mut out = clip.clone();
    for sample in out.samples_mut() {
        *sample *= factor;
    }
    out
}

/// Reverse frame order, keeping channel interleaving intact
///
/// Frames swap as whole interleaved groups. Reversing per scalar instead of
/// per frame would swap channels on multi-channel audio.
pub fn reverse(clip: &SampleClip) -> SampleClip {
    let channels = clip.channels() as usize;
    let frames = clip.frames();

    let mut out = clip.clone();
    let samples = out.samples_mut();
    for frame in 0..frames / 2 {
        let a = frame * channels;
        let b = (frames - 1 - frame) * channels;
        for ch in 0..channels {
            samples.swap(a + ch, b + ch);
        }
    }
    out
}

/// Quantize samples to the given bit depth
///
/// Maps each sample onto `2^bits - 1` levels and back, the classic lo-fi
/// crush. Depth must be in [1,16].
pub fn crush(clip: &SampleClip, bit_depth: u32) -> Result<SampleClip> {
    if !(1..=16).contains(&bit_depth) {
        return Err(ClipsmithError::invalid_parameter(
            "bit_depth",
            bit_depth,
            "1 to 16",
        ));
    }

    let levels = (2.0f32).powi(bit_depth as i32) - 1.0;
    let mut out = clip.clone();
    for sample in out.samples_mut() {
        *sample = (*sample * levels).round() / levels;
    }
    Ok(out)
}
