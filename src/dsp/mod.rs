//! DSP primitives
//!
//! Envelope curves and the biquad filter used by the render pass. These are
//! stateless or per-call-state building blocks; buffer-level operations live
//! in [`crate::engine`].

mod biquad;
mod envelope;

pub use biquad::{BiquadCoeffs, BiquadState, FilterKind, FilterSpec};
pub use envelope::{FadeCurve, FadeDirection, FadeShape};
