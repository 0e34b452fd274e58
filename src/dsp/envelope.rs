//! Fade envelope curves
//!
//! Maps normalized progress in [0,1] to a gain multiplier in [0,1]. Each
//! curve is a single cubic Hermite segment defined by its endpoint values and
//! tangents, so fade-in and fade-out pairs stay audibly symmetric.
//!
//! There are six curves in total: three shapes, each with a distinct
//! fade-in and fade-out definition (the endpoint values differ, 0->1 vs
//! 1->0). Selection is by enum, so the in/out variants can never be
//! confused for one another.

use serde::{Deserialize, Serialize};

/// Fade curve shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeShape {
    /// Steep start that eases out near the end
    Convex,
    /// Symmetric S-curve (ease-in-out)
    #[default]
    Smooth,
    /// Slow start with a steep finish
    Concave,
}

/// Whether a curve ramps gain up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    /// Gain ramps 0 -> 1
    In,
    /// Gain ramps 1 -> 0
    Out,
}

/// A cubic Hermite gain curve over normalized time [0,1]
///
/// `start`/`end` are the endpoint gain values, `start_tangent`/`end_tangent`
/// the endpoint derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeCurve {
    start: f32,
    end: f32,
    start_tangent: f32,
    end_tangent: f32,
}

impl FadeCurve {
    const fn new(start: f32, end: f32, start_tangent: f32, end_tangent: f32) -> Self {
        Self {
            start,
            end,
            start_tangent,
            end_tangent,
        }
    }

    /// Look up the curve for a shape and direction
    pub fn for_fade(shape: FadeShape, direction: FadeDirection) -> Self {
        match (shape, direction) {
            (FadeShape::Convex, FadeDirection::In) => Self::new(0.0, 1.0, 3.0, 0.0),
            (FadeShape::Convex, FadeDirection::Out) => Self::new(1.0, 0.0, -3.0, 0.0),
            (FadeShape::Smooth, FadeDirection::In) => Self::new(0.0, 1.0, 0.0, 0.0),
            (FadeShape::Smooth, FadeDirection::Out) => Self::new(1.0, 0.0, 0.0, 0.0),
            (FadeShape::Concave, FadeDirection::In) => Self::new(0.0, 1.0, 0.0, 3.0),
            (FadeShape::Concave, FadeDirection::Out) => Self::new(1.0, 0.0, 0.0, -3.0),
        }
    }

    /// Evaluate the curve at `t`, clamping both input and output to [0,1]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let t2 = t * t;
        let t3 = t2 * t;

        // Hermite basis functions
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        let value = h00 * self.start
            + h10 * self.start_tangent
            + h01 * self.end
            + h11 * self.end_tangent;

        value.clamp(0.0, 1.0)
    }
}
