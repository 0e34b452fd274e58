//! Integration Tests
//!
//! End-to-end tests for the Clipsmith transform pipeline: render passes over
//! real-sized clips, file round trips, and the JSON parameter path.

use std::f32::consts::PI;

use clipsmith::dsp::{FadeShape, FilterKind, FilterSpec};
use clipsmith::engine::render::{FadeSpec, Range};
use clipsmith::engine::{self, EditParams, EditSession, SampleClip};

/// Helper to create a mono sine clip
fn sine_clip(frequency: f32, sample_rate: u32, frames: usize) -> SampleClip {
    let samples: Vec<f32> = (0..frames)
        .map(|i| (2.0 * PI * frequency * i as f32 / sample_rate as f32).sin())
        .collect();
    SampleClip::from_interleaved(samples, 1, sample_rate).unwrap()
}

/// Helper to create a constant-amplitude mono clip
fn constant_clip(value: f32, sample_rate: u32, frames: usize) -> SampleClip {
    SampleClip::from_interleaved(vec![value; frames], 1, sample_rate).unwrap()
}

// === Render Scenarios ===

#[test]
fn test_one_second_edit_scenario() {
    // One second of mono audio, middle half selected, 10% smooth fades,
    // volume 0.8, no filter, no pitch change
    let clip = constant_clip(1.0, 44100, 44100);
    let params = EditParams {
        range: Range::new(25.0, 75.0).unwrap(),
        fade_in: FadeSpec::new(10.0, FadeShape::Smooth),
        fade_out: FadeSpec::new(10.0, FadeShape::Smooth),
        volume: 0.8,
        ..Default::default()
    };

    let out = engine::render(&clip, &params).unwrap();

    assert_eq!(out.frames(), 22050);
    assert_eq!(out.sample_rate(), 44100);

    let samples = out.samples();
    let fade_frames = 2205;

    // Envelope rises across the fade-in window
    for i in 1..fade_frames {
        assert!(
            samples[i] > samples[i - 1],
            "fade-in envelope not increasing at frame {}",
            i
        );
    }

    // Envelope falls across the fade-out window
    for i in (22050 - fade_frames + 1)..22050 {
        assert!(
            samples[i] < samples[i - 1],
            "fade-out envelope not decreasing at frame {}",
            i
        );
    }

    // Volume caps every sample at 0.8 of the input amplitude
    for (i, &s) in samples.iter().enumerate() {
        assert!(
            s.abs() <= 0.8 + 1e-6,
            "sample {} exceeds volume ceiling: {}",
            i,
            s
        );
    }
}

#[test]
fn test_render_then_filter_differs_from_unfiltered() {
    let clip = sine_clip(8000.0, 44100, 44100);

    let unfiltered = engine::render(&clip, &EditParams::default()).unwrap();
    let filtered = engine::render(
        &clip,
        &EditParams {
            filter: FilterSpec::new(FilterKind::LowPass, 80.0),
            ..Default::default()
        },
    )
    .unwrap();

    let rms = |clip: &SampleClip| -> f32 {
        let sum: f32 = clip.samples().iter().map(|s| s * s).sum();
        (sum / clip.samples().len() as f32).sqrt()
    };

    // A high tone through a nearly-closed low-pass loses most of its energy
    assert!(rms(&filtered) < rms(&unfiltered) * 0.5);
}

#[test]
fn test_stereo_pipeline_preserves_channel_identity() {
    // Left channel carries a tone, right channel is silent
    let frames = 4410;
    let mut samples = vec![0.0f32; frames * 2];
    for frame in 0..frames {
        samples[frame * 2] = (2.0 * PI * 440.0 * frame as f32 / 44100.0).sin();
    }
    let clip = SampleClip::from_interleaved(samples, 2, 44100).unwrap();

    let params = EditParams {
        fade_in: FadeSpec::new(20.0, FadeShape::Convex),
        filter: FilterSpec::new(FilterKind::LowPass, 30.0),
        volume: 0.9,
        ..Default::default()
    };
    let out = engine::render(&clip, &params).unwrap();

    for frame in 0..out.frames() {
        assert_eq!(
            out.get(frame, 1),
            Some(0.0),
            "silent right channel picked up signal at frame {}",
            frame
        );
    }
}

#[test]
fn test_varispeed_octave_up_halves_duration() {
    let clip = sine_clip(440.0, 44100, 44100);
    let params = EditParams {
        pitch: 2.0,
        ..Default::default()
    };

    let out = engine::render(&clip, &params).unwrap();

    assert_eq!(out.frames(), clip.frames());
    assert_eq!(out.sample_rate(), 88200);
    // Same data played twice as fast: half the duration
    assert!((out.duration_secs() - 0.5).abs() < 1e-9);
}

// === Session Pipeline ===

#[test]
fn test_session_normalize_then_render_then_encode() {
    let quiet = sine_clip(440.0, 44100, 4410);
    let scaled: Vec<f32> = quiet.samples().iter().map(|s| s * 0.2).collect();
    let mut session =
        EditSession::new(SampleClip::from_interleaved(scaled, 1, 44100).unwrap());

    session.normalize();
    assert!(session.clip().peak() > 0.95);

    session.params_mut().range = Range::new(0.0, 50.0).unwrap();
    session.params_mut().fade_out = FadeSpec::new(50.0, FadeShape::Concave);

    let bytes = session.encode().unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");

    // 2205 frames of mono 16-bit data plus the 44-byte header
    assert_eq!(bytes.len(), 44 + 2205 * 2);
}

#[test]
fn test_reverse_is_involution_through_session() {
    let clip = sine_clip(880.0, 22050, 2000);
    let mut session = EditSession::new(clip.clone());

    session.reverse();
    session.reverse();

    assert_eq!(session.clip(), &clip);
}

// === File Round Trips ===

#[test]
fn test_render_to_file_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("source.wav");
    let output_path = dir.path().join("rendered.wav");

    let clip = sine_clip(440.0, 44100, 44100);
    engine::export_wav(&clip, &source_path).unwrap();

    let imported = engine::import_wav(&source_path).unwrap();
    let params = EditParams {
        range: Range::new(0.0, 25.0).unwrap(),
        volume: 0.5,
        ..Default::default()
    };
    let rendered = engine::render(&imported, &params).unwrap();
    engine::export_wav(&rendered, &output_path).unwrap();

    let readback = engine::import_wav(&output_path).unwrap();
    assert_eq!(readback.frames(), 11025);
    assert_eq!(readback.sample_rate(), 44100);
    assert_eq!(readback.channels(), 1);
    assert!(readback.peak() <= 0.5 + 1e-3);
}

#[test]
fn test_pitch_shift_survives_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pitched.wav");

    let clip = sine_clip(440.0, 44100, 4410);
    let rendered = engine::render(
        &clip,
        &EditParams {
            pitch: 0.5,
            ..Default::default()
        },
    )
    .unwrap();
    engine::export_wav(&rendered, &path).unwrap();

    let readback = engine::import_wav(&path).unwrap();
    assert_eq!(readback.sample_rate(), 22050);
    assert_eq!(readback.frames(), 4410);
}

// === JSON Parameter Path ===

#[test]
fn test_edit_params_json_round_trip() {
    let params = EditParams {
        range: Range::new(10.0, 90.0).unwrap(),
        fade_in: FadeSpec::new(15.0, FadeShape::Convex),
        fade_out: FadeSpec::new(25.0, FadeShape::Concave),
        volume: 0.7,
        pitch: 1.25,
        filter: FilterSpec::new(FilterKind::HighPass, 35.0),
    };

    let json = serde_json::to_string(&params).unwrap();
    let restored: EditParams = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, params);
}

#[test]
fn test_partial_json_params_fill_defaults() {
    let restored: EditParams =
        serde_json::from_str(r#"{ "volume": 0.25, "pitch": 1.5 }"#).unwrap();

    assert_eq!(restored.volume, 0.25);
    assert_eq!(restored.pitch, 1.5);
    assert_eq!(restored.range, Range::full());
    assert_eq!(restored.filter.kind, FilterKind::None);
}
