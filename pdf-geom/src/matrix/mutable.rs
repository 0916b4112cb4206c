use std::fmt;

use super::{fmt_values, ops, Matrix, MatrixValues, ScaleToFit};
use crate::rect::FloatRectValues;

/// In-place transform. Every modifier updates `self` and returns it so calls
/// can be chained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutableMatrix {
    values: [f32; 9],
}

impl MutableMatrix {
    pub fn new(values: [f32; 9]) -> Self {
        MutableMatrix { values }
    }

    pub fn reset(&mut self) -> &mut Self {
        self.values = ops::IDENTITY;
        self
    }

    pub fn set(&mut self, other: &impl MatrixValues) -> &mut Self {
        self.values = *other.values();
        self
    }

    pub fn set_values(&mut self, values: [f32; 9]) -> &mut Self {
        self.values = values;
        self
    }

    /// Overwrites a single component, see the `M*` index constants.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn set_value(&mut self, index: usize, value: f32) -> &mut Self {
        self.values[index] = value;
        self
    }

    pub fn set_translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.values = ops::translation(dx, dy);
        self
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.set_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn set_scale_about(&mut self, sx: f32, sy: f32, px: f32, py: f32) -> &mut Self {
        self.values = ops::scaling(sx, sy, px, py);
        self
    }

    pub fn set_rotate(&mut self, degrees: f32) -> &mut Self {
        self.set_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn set_rotate_about(&mut self, degrees: f32, px: f32, py: f32) -> &mut Self {
        self.values = ops::rotation(degrees, px, py);
        self
    }

    pub fn set_sin_cos(&mut self, sin: f32, cos: f32) -> &mut Self {
        self.values = ops::sin_cos(sin, cos, 0.0, 0.0);
        self
    }

    pub fn set_skew(&mut self, kx: f32, ky: f32) -> &mut Self {
        self.set_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn set_skew_about(&mut self, kx: f32, ky: f32, px: f32, py: f32) -> &mut Self {
        self.values = ops::skewing(kx, ky, px, py);
        self
    }

    /// `self = a · b`.
    pub fn set_concat(&mut self, a: &impl MatrixValues, b: &impl MatrixValues) -> &mut Self {
        self.values = ops::concat(a.values(), b.values());
        self
    }

    /// Maps `src` onto `dst`. Returns `false` and leaves `self` untouched when
    /// `src` has no area.
    pub fn set_rect_to_rect(
        &mut self,
        src: &impl FloatRectValues,
        dst: &impl FloatRectValues,
        fit: ScaleToFit,
    ) -> bool {
        match ops::rect_to_rect(src.to_float_array(), dst.to_float_array(), fit) {
            Some(values) => {
                self.values = values;
                true
            }
            None => false,
        }
    }

    pub fn pre_translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.pre_concat(&ops::translation(dx, dy))
    }

    pub fn pre_scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.pre_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn pre_scale_about(&mut self, sx: f32, sy: f32, px: f32, py: f32) -> &mut Self {
        self.pre_concat(&ops::scaling(sx, sy, px, py))
    }

    pub fn pre_rotate(&mut self, degrees: f32) -> &mut Self {
        self.pre_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn pre_rotate_about(&mut self, degrees: f32, px: f32, py: f32) -> &mut Self {
        self.pre_concat(&ops::rotation(degrees, px, py))
    }

    pub fn pre_skew(&mut self, kx: f32, ky: f32) -> &mut Self {
        self.pre_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn pre_skew_about(&mut self, kx: f32, ky: f32, px: f32, py: f32) -> &mut Self {
        self.pre_concat(&ops::skewing(kx, ky, px, py))
    }

    /// `self = self · other`.
    pub fn pre_concat(&mut self, other: &impl MatrixValues) -> &mut Self {
        ops::pre_concat(&mut self.values, other.values());
        self
    }

    pub fn post_translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.post_concat(&ops::translation(dx, dy))
    }

    pub fn post_scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.post_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn post_scale_about(&mut self, sx: f32, sy: f32, px: f32, py: f32) -> &mut Self {
        self.post_concat(&ops::scaling(sx, sy, px, py))
    }

    pub fn post_rotate(&mut self, degrees: f32) -> &mut Self {
        self.post_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn post_rotate_about(&mut self, degrees: f32, px: f32, py: f32) -> &mut Self {
        self.post_concat(&ops::rotation(degrees, px, py))
    }

    pub fn post_skew(&mut self, kx: f32, ky: f32) -> &mut Self {
        self.post_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn post_skew_about(&mut self, kx: f32, ky: f32, px: f32, py: f32) -> &mut Self {
        self.post_concat(&ops::skewing(kx, ky, px, py))
    }

    /// `self = other · self`.
    pub fn post_concat(&mut self, other: &impl MatrixValues) -> &mut Self {
        ops::post_concat(&mut self.values, other.values());
        self
    }

    /// Writes the inverse into `dst`. On a singular matrix returns `false` and
    /// leaves `dst` untouched.
    pub fn invert_into(&self, dst: &mut MutableMatrix) -> bool {
        match ops::invert(&self.values) {
            Some(values) => {
                dst.values = values;
                true
            }
            None => false,
        }
    }

    pub fn to_immutable(&self) -> Matrix {
        Matrix::new(self.values)
    }
}

impl Default for MutableMatrix {
    fn default() -> Self {
        MutableMatrix::new(ops::IDENTITY)
    }
}

impl MatrixValues for MutableMatrix {
    fn values(&self) -> &[f32; 9] {
        &self.values
    }
}

impl fmt::Display for MutableMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_values(&self.values, f)
    }
}
