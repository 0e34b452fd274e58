//! Second-order IIR filter
//!
//! Low-pass and high-pass biquads driven by a single 0-100 "amount" control
//! instead of a raw cutoff frequency. The amount maps to Hz through a power
//! curve, so mid slider positions land on audible mid frequencies rather
//! than a linear sweep.
//!
//! Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (a0 + a1*z^-1 + a2*z^-2)
//! Coefficients are normalized by a0 at construction time.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::error::{ClipsmithError, Result};

/// Cutoff range endpoints for the amount-to-Hz mapping
const CUTOFF_MAX_HZ: f32 = 20000.0;
const CUTOFF_MIN_HZ: f32 = 20.0;

/// Exponent of the perceptual amount curve
const CUTOFF_CURVE_EXP: f32 = 0.2;

/// Filter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// No filtering
    #[default]
    None,
    /// Attenuate above the cutoff
    LowPass,
    /// Attenuate below the cutoff
    HighPass,
}

/// Filter configuration: kind plus a 0-100 strength amount
///
/// For `HighPass` the effective strength is `100 - amount`, so the slider
/// feels the same in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub kind: FilterKind,
    pub amount: f32,
}

impl FilterSpec {
    pub fn new(kind: FilterKind, amount: f32) -> Self {
        Self { kind, amount }
    }

    /// Whether this spec filters at all
    pub fn is_active(&self) -> bool {
        self.kind != FilterKind::None
    }

    /// Cutoff frequency in Hz for this spec
    pub fn cutoff_hz(&self) -> f32 {
        let effective = match self.kind {
            FilterKind::HighPass => 100.0 - self.amount,
            _ => self.amount,
        };
        let t = (effective.clamp(0.0, 100.0) / 100.0).powf(CUTOFF_CURVE_EXP);
        CUTOFF_MAX_HZ + (CUTOFF_MIN_HZ - CUTOFF_MAX_HZ) * t
    }
}

/// Biquad filter coefficients, pre-normalized by a0
#[derive(Debug, Clone, Copy, Default)]
pub struct BiquadCoeffs {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
}

impl BiquadCoeffs {
    /// Calculate coefficients for a filter spec at the given sample rate
    ///
    /// A spec with `FilterKind::None` yields unity (bypass) coefficients.
    /// The sample rate must be positive.
    pub fn for_spec(spec: &FilterSpec, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(ClipsmithError::invalid_parameter(
                "sample_rate",
                sample_rate,
                "> 0",
            ));
        }

        if !spec.is_active() {
            return Ok(BiquadCoeffs {
                b0: 1.0,
                ..Default::default()
            });
        }

        let omega = 2.0 * PI * spec.cutoff_hz() / sample_rate as f32;
        let sin_o = omega.sin();
        let cos_o = omega.cos();

        let a0 = 1.0 + sin_o / 2.0;
        let a1 = -2.0 * cos_o;
        let a2 = 1.0 - sin_o / 2.0;

        let (b0, b1, b2) = match spec.kind {
            FilterKind::LowPass => ((1.0 - cos_o) / 2.0, 1.0 - cos_o, (1.0 - cos_o) / 2.0),
            FilterKind::HighPass => ((1.0 + cos_o) / 2.0, -(1.0 + cos_o), (1.0 + cos_o) / 2.0),
            FilterKind::None => unreachable!("handled above"),
        };

        Ok(BiquadCoeffs {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        })
    }

    /// Whether these coefficients pass audio through unchanged
    pub fn is_bypass(&self) -> bool {
        (self.b0 - 1.0).abs() < 1e-10
            && self.b1.abs() < 1e-10
            && self.b2.abs() < 1e-10
            && self.a1.abs() < 1e-10
            && self.a2.abs() < 1e-10
    }
}

/// Running filter state for one channel
///
/// Holds two samples of input history and two of output history. One state
/// per channel; reset at the start of each full-buffer pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiquadState {
    in1: f32,
    in2: f32,
    out1: f32,
    out2: f32,
}

impl BiquadState {
    /// Process a single sample, updating the delay line
    pub fn process(&mut self, input: f32, coeffs: &BiquadCoeffs) -> f32 {
        let output = coeffs.b0 * input + coeffs.b1 * self.in1 + coeffs.b2 * self.in2
            - coeffs.a1 * self.out1
            - coeffs.a2 * self.out2;

        self.in2 = self.in1;
        self.in1 = input;
        self.out2 = self.out1;
        self.out1 = output;

        output
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        *self = BiquadState::default();
    }
}
