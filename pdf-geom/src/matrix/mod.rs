//! Row-major homogeneous 2D transforms.
//!
//! ```text
//! | scaleX  skewX   transX |
//! | skewY   scaleY  transY |
//! | persp0  persp1  persp2 |
//! ```
//!
//! Points are column vectors: `p' = M · [x, y, 1]ᵗ`. `pre_*` operations take
//! effect before the existing transform when mapping a point, `post_*`
//! operations after it.

use std::fmt;

use crate::point::{FloatPointValues, PointF};
use crate::rect::{FloatRectValues, MutableRectF, RectF};

mod mutable;
pub(crate) mod ops;

pub use mutable::MutableMatrix;

pub const MSCALE_X: usize = 0;
pub const MSKEW_X: usize = 1;
pub const MTRANS_X: usize = 2;
pub const MSKEW_Y: usize = 3;
pub const MSCALE_Y: usize = 4;
pub const MTRANS_Y: usize = 5;
pub const MPERSP_0: usize = 6;
pub const MPERSP_1: usize = 7;
pub const MPERSP_2: usize = 8;

/// How `set_rect_to_rect` distributes a source rect inside a destination rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleToFit {
    /// Scale each axis independently to fill the destination.
    #[default]
    Fill,
    /// Uniform scale, aligned to the left/top edges.
    Start,
    /// Uniform scale, centred.
    Center,
    /// Uniform scale, aligned to the right/bottom edges.
    End,
}

/// Read access to the nine matrix components, with every mapping operation
/// built on top of it.
pub trait MatrixValues {
    fn values(&self) -> &[f32; 9];

    fn get(&self, index: usize) -> f32 {
        self.values()[index]
    }

    fn scale_x(&self) -> f32 {
        self.values()[MSCALE_X]
    }

    fn skew_x(&self) -> f32 {
        self.values()[MSKEW_X]
    }

    fn trans_x(&self) -> f32 {
        self.values()[MTRANS_X]
    }

    fn skew_y(&self) -> f32 {
        self.values()[MSKEW_Y]
    }

    fn scale_y(&self) -> f32 {
        self.values()[MSCALE_Y]
    }

    fn trans_y(&self) -> f32 {
        self.values()[MTRANS_Y]
    }

    /// True when all nine components equal the identity exactly.
    fn is_identity(&self) -> bool {
        ops::is_identity(self.values())
    }

    /// True when the perspective row is `(0, 0, 1)`.
    fn is_affine(&self) -> bool {
        ops::is_affine(self.values())
    }

    /// PDF `[a b c d e f]` layout: scaleX, skewY, skewX, scaleY, transX, transY.
    /// The perspective row is dropped.
    fn to_affine(&self) -> [f32; 6] {
        let v = self.values();
        [
            v[MSCALE_X],
            v[MSKEW_Y],
            v[MSKEW_X],
            v[MSCALE_Y],
            v[MTRANS_X],
            v[MTRANS_Y],
        ]
    }

    fn map_point(&self, point: &impl FloatPointValues) -> PointF {
        let (x, y) = ops::map_point(self.values(), point.x(), point.y());
        PointF::new(x, y)
    }

    /// Maps `(x, y)` pairs in place. A trailing odd value is left untouched.
    fn map_points(&self, pts: &mut [f32]) {
        ops::map_points_in_place(self.values(), pts)
    }

    /// Maps every pair of `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`.
    fn map_points_into(&self, dst: &mut [f32], src: &[f32]) {
        ops::map_points(self.values(), dst, 0, src, 0, src.len() / 2)
    }

    /// Maps `count` points starting at float index `src_index` into `dst`
    /// starting at float index `dst_index`.
    ///
    /// # Panics
    ///
    /// Panics if either range runs past the end of its slice.
    fn map_points_range(
        &self,
        dst: &mut [f32],
        dst_index: usize,
        src: &[f32],
        src_index: usize,
        count: usize,
    ) {
        ops::map_points(self.values(), dst, dst_index, src, src_index, count)
    }

    /// Like [`MatrixValues::map_points`] but ignoring translation.
    fn map_vectors(&self, vecs: &mut [f32]) {
        ops::map_points_in_place(&ops::without_translation(self.values()), vecs)
    }

    fn map_vectors_into(&self, dst: &mut [f32], src: &[f32]) {
        let linear = ops::without_translation(self.values());
        ops::map_points(&linear, dst, 0, src, 0, src.len() / 2)
    }

    fn map_vectors_range(
        &self,
        dst: &mut [f32],
        dst_index: usize,
        src: &[f32],
        src_index: usize,
        count: usize,
    ) {
        let linear = ops::without_translation(self.values());
        ops::map_points(&linear, dst, dst_index, src, src_index, count)
    }

    /// Geometric mean of the lengths of `(radius, 0)` and `(0, radius)` mapped
    /// through the linear part of the matrix.
    fn map_radius(&self, radius: f32) -> f32 {
        ops::map_radius(self.values(), radius)
    }

    /// Axis-aligned bounds of the four mapped corners of `rect`.
    fn map_rect(&self, rect: &impl FloatRectValues) -> RectF {
        RectF::from(ops::map_rect(self.values(), rect.to_float_array()))
    }

    fn map_rect_into(&self, dst: &mut MutableRectF, src: &impl FloatRectValues) {
        let [l, t, r, b] = ops::map_rect(self.values(), src.to_float_array());
        dst.set(l, t, r, b);
    }

    fn invert(&self) -> Option<Matrix> {
        ops::invert(self.values()).map(Matrix::new)
    }
}

impl MatrixValues for [f32; 9] {
    fn values(&self) -> &[f32; 9] {
        self
    }
}

/// Immutable transform. Every modifier returns a new matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    values: [f32; 9],
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        values: ops::IDENTITY,
    };

    pub const fn new(values: [f32; 9]) -> Self {
        Matrix { values }
    }

    pub fn from_translate(dx: f32, dy: f32) -> Self {
        Matrix::new(ops::translation(dx, dy))
    }

    pub fn from_scale(sx: f32, sy: f32) -> Self {
        Matrix::from_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn from_scale_about(sx: f32, sy: f32, px: f32, py: f32) -> Self {
        Matrix::new(ops::scaling(sx, sy, px, py))
    }

    pub fn from_rotate(degrees: f32) -> Self {
        Matrix::from_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn from_rotate_about(degrees: f32, px: f32, py: f32) -> Self {
        Matrix::new(ops::rotation(degrees, px, py))
    }

    /// Rotation from a precomputed sine and cosine.
    pub fn from_sin_cos(sin: f32, cos: f32) -> Self {
        Matrix::new(ops::sin_cos(sin, cos, 0.0, 0.0))
    }

    pub fn from_skew(kx: f32, ky: f32) -> Self {
        Matrix::from_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn from_skew_about(kx: f32, ky: f32, px: f32, py: f32) -> Self {
        Matrix::new(ops::skewing(kx, ky, px, py))
    }

    /// `a · b`.
    pub fn from_concat(a: &impl MatrixValues, b: &impl MatrixValues) -> Self {
        Matrix::new(ops::concat(a.values(), b.values()))
    }

    /// Maps `src` onto `dst`, or `None` when `src` has no area.
    pub fn from_rect_to_rect(
        src: &impl FloatRectValues,
        dst: &impl FloatRectValues,
        fit: ScaleToFit,
    ) -> Option<Self> {
        ops::rect_to_rect(src.to_float_array(), dst.to_float_array(), fit).map(Matrix::new)
    }

    pub fn reset(&self) -> Self {
        Matrix::IDENTITY
    }

    /// A copy of `other`. `self` is unchanged.
    pub fn set(&self, other: &impl MatrixValues) -> Self {
        Matrix::new(*other.values())
    }

    pub fn pre_translate(&self, dx: f32, dy: f32) -> Self {
        self.pre_concat(&ops::translation(dx, dy))
    }

    pub fn pre_scale(&self, sx: f32, sy: f32) -> Self {
        self.pre_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn pre_scale_about(&self, sx: f32, sy: f32, px: f32, py: f32) -> Self {
        self.pre_concat(&ops::scaling(sx, sy, px, py))
    }

    pub fn pre_rotate(&self, degrees: f32) -> Self {
        self.pre_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn pre_rotate_about(&self, degrees: f32, px: f32, py: f32) -> Self {
        self.pre_concat(&ops::rotation(degrees, px, py))
    }

    pub fn pre_skew(&self, kx: f32, ky: f32) -> Self {
        self.pre_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn pre_skew_about(&self, kx: f32, ky: f32, px: f32, py: f32) -> Self {
        self.pre_concat(&ops::skewing(kx, ky, px, py))
    }

    /// `self · other`.
    pub fn pre_concat(&self, other: &impl MatrixValues) -> Self {
        Matrix::new(ops::concat(&self.values, other.values()))
    }

    pub fn post_translate(&self, dx: f32, dy: f32) -> Self {
        self.post_concat(&ops::translation(dx, dy))
    }

    pub fn post_scale(&self, sx: f32, sy: f32) -> Self {
        self.post_scale_about(sx, sy, 0.0, 0.0)
    }

    pub fn post_scale_about(&self, sx: f32, sy: f32, px: f32, py: f32) -> Self {
        self.post_concat(&ops::scaling(sx, sy, px, py))
    }

    pub fn post_rotate(&self, degrees: f32) -> Self {
        self.post_rotate_about(degrees, 0.0, 0.0)
    }

    pub fn post_rotate_about(&self, degrees: f32, px: f32, py: f32) -> Self {
        self.post_concat(&ops::rotation(degrees, px, py))
    }

    pub fn post_skew(&self, kx: f32, ky: f32) -> Self {
        self.post_skew_about(kx, ky, 0.0, 0.0)
    }

    pub fn post_skew_about(&self, kx: f32, ky: f32, px: f32, py: f32) -> Self {
        self.post_concat(&ops::skewing(kx, ky, px, py))
    }

    /// `other · self`.
    pub fn post_concat(&self, other: &impl MatrixValues) -> Self {
        Matrix::new(ops::concat(other.values(), &self.values))
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        self.pre_translate(dx, dy)
    }

    pub fn scale(&self, sx: f32, sy: f32) -> Self {
        self.pre_scale(sx, sy)
    }

    pub fn rotate(&self, degrees: f32) -> Self {
        self.pre_rotate(degrees)
    }

    pub fn skew(&self, kx: f32, ky: f32) -> Self {
        self.pre_skew(kx, ky)
    }

    pub fn concat(&self, other: &impl MatrixValues) -> Self {
        self.pre_concat(other)
    }

    pub fn to_mutable(&self) -> MutableMatrix {
        MutableMatrix::new(self.values)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl MatrixValues for Matrix {
    fn values(&self) -> &[f32; 9] {
        &self.values
    }
}

pub(crate) fn fmt_values(values: &[f32; 9], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in values.chunks_exact(3) {
        write!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
    }
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_values(&self.values, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let m = Matrix::default();
        assert!(m.is_identity());
        assert!(m.is_affine());
        assert_eq!(m, Matrix::IDENTITY);
    }

    #[test]
    fn test_set_scale_with_pivot() {
        let m = Matrix::from_scale_about(2.0, 3.0, 10.0, 10.0);
        assert_eq!(m.scale_x(), 2.0);
        assert_eq!(m.scale_y(), 3.0);
        assert_eq!(m.trans_x(), -10.0);
        assert_eq!(m.trans_y(), -20.0);
    }

    #[test]
    fn test_set_rotate() {
        let expected = [
            (0.0, 1.0, 0.0),
            (45.0, 0.70710677, 0.70710677),
            (90.0, 0.0, 1.0),
            (180.0, -1.0, 0.0),
            (270.0, 0.0, -1.0),
        ];
        for (degrees, cos, sin) in expected {
            let m = Matrix::from_rotate(degrees);
            assert!((m.scale_x() - cos).abs() < 1e-4, "{} {}", degrees, m);
            assert!((m.skew_x() + sin).abs() < 1e-4, "{} {}", degrees, m);
            assert!((m.skew_y() - sin).abs() < 1e-4, "{} {}", degrees, m);
            assert!((m.scale_y() - cos).abs() < 1e-4, "{} {}", degrees, m);
        }
    }

    #[test]
    fn test_set_skew() {
        let m = Matrix::from_skew(0.5, 0.5);
        assert_eq!(m.skew_x(), 0.5);
        assert_eq!(m.skew_y(), 0.5);
        assert_eq!(m.scale_x(), 1.0);
        assert_eq!(m.scale_y(), 1.0);
    }

    #[test]
    fn test_reset_and_set_return_new_values() {
        let m = Matrix::from_rotate(30.0);
        assert_eq!(m.reset(), Matrix::IDENTITY);
        let other = MutableMatrix::new(*Matrix::from_skew(0.5, 0.0).values());
        assert_eq!(m.set(&other), Matrix::from_skew(0.5, 0.0));
        assert_eq!(m, Matrix::from_rotate(30.0));
    }

    #[test]
    fn test_concat() {
        let a = Matrix::from_translate(10.0, 0.0);
        let b = Matrix::from_scale(2.0, 1.0);
        let c = a.pre_concat(&b);
        assert_eq!(c.scale_x(), 2.0);
        assert_eq!(c.trans_x(), 10.0);
        assert_eq!(Matrix::from_concat(&a, &b), c);
    }

    #[test]
    fn test_pre_and_post_translate() {
        let m = Matrix::from_translate(10.0, 10.0);
        assert_eq!(m.pre_translate(5.0, 5.0).trans_x(), 15.0);
        assert_eq!(m.post_translate(5.0, 5.0).trans_y(), 15.0);
    }

    #[test]
    fn test_pre_and_post_scale() {
        let m = Matrix::from_translate(10.0, 10.0);
        let pre = m.pre_scale(2.0, 2.0);
        assert_eq!(pre.to_affine(), [2.0, 0.0, 0.0, 2.0, 10.0, 10.0]);
        let post = m.post_scale(2.0, 2.0);
        assert_eq!(post.to_affine(), [2.0, 0.0, 0.0, 2.0, 20.0, 20.0]);
    }

    #[test]
    fn test_pre_and_post_skew() {
        let m = Matrix::from_translate(10.0, 10.0);
        let pre = m.pre_skew(1.0, 0.0);
        assert_eq!(pre.scale_x(), 1.0);
        assert_eq!(pre.skew_x(), 1.0);
        assert_eq!(pre.trans_x(), 10.0);
        let post = m.post_skew(1.0, 0.0);
        assert_eq!(post.scale_x(), 1.0);
        assert_eq!(post.skew_x(), 1.0);
        assert_eq!(post.trans_x(), 20.0);
    }

    #[test]
    fn test_is_identity_checks_perspective() {
        let mut values = ops::IDENTITY;
        values[MPERSP_0] = 0.1;
        let m = Matrix::new(values);
        assert!(!m.is_identity());
        assert!(!m.is_affine());

        values = ops::IDENTITY;
        values[MPERSP_2] = 0.5;
        assert!(!Matrix::new(values).is_affine());
    }

    #[test]
    fn test_invert() {
        let m = Matrix::from_scale(2.0, 2.0).post_translate(10.0, 20.0);
        let inv = m.invert().unwrap();
        assert!(m.pre_concat(&inv).is_identity());
        assert!(Matrix::from_scale(0.0, 2.0).invert().is_none());
    }

    #[test]
    fn test_map_points_ranged() {
        let m = Matrix::from_translate(1.0, 2.0);
        let src = [9.0, 9.0, 1.0, 1.0, 2.0, 2.0, 9.0];
        let mut dst = [0.0; 6];
        m.map_points_range(&mut dst, 2, &src, 2, 2);
        assert_eq!(dst, [0.0, 0.0, 2.0, 3.0, 3.0, 4.0]);
    }

    #[test]
    fn test_map_vectors_ignores_translation() {
        let m = Matrix::from_scale(2.0, 3.0).post_translate(100.0, 100.0);
        let mut vecs = [1.0, 1.0, -1.0, 0.5];
        m.map_vectors(&mut vecs);
        assert_eq!(vecs, [2.0, 3.0, -2.0, 1.5]);

        let mut pts = [1.0, 1.0];
        m.map_points(&mut pts);
        assert_eq!(pts, [102.0, 103.0]);
    }

    #[test]
    fn test_map_vectors_ranged() {
        let m = Matrix::from_scale(2.0, 3.0).post_translate(100.0, 100.0);
        let src = [9.0, 9.0, 1.0, 1.0, 2.0, 2.0];
        let mut dst = [0.0; 6];
        m.map_vectors_range(&mut dst, 2, &src, 2, 2);
        assert_eq!(dst, [0.0, 0.0, 2.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_map_points_perspective() {
        let m = Matrix::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0]);
        let mut pts = [4.0, 6.0];
        m.map_points(&mut pts);
        assert_eq!(pts, [2.0, 3.0]);
    }

    #[test]
    fn test_map_points_propagates_nan() {
        let m = Matrix::from_scale(2.0, 2.0).post_rotate(30.0);
        let mut pts = [f32::NAN, 1.0, f32::INFINITY, 0.0];
        m.map_points(&mut pts);
        assert!(pts[0].is_nan());
        assert!(pts[1].is_nan());
        assert!(pts[2].is_infinite());
    }

    #[test]
    fn test_map_radius() {
        assert_eq!(Matrix::IDENTITY.map_radius(5.0), 5.0);
        assert!((Matrix::from_scale(2.0, 8.0).map_radius(1.0) - 4.0).abs() < 1e-6);
        let rotated = Matrix::from_rotate(30.0).post_scale(3.0, 3.0);
        assert!((rotated.map_radius(2.0) - 6.0).abs() < 1e-5);
        // translation has no effect
        assert_eq!(Matrix::from_translate(50.0, 50.0).map_radius(3.0), 3.0);
    }

    #[test]
    fn test_map_rect_rotated() {
        let m = Matrix::from_rotate(90.0);
        let mapped = m.map_rect(&RectF::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(mapped, RectF::new(-20.0, 0.0, 0.0, 10.0));

        let mut dst = MutableRectF::default();
        m.map_rect_into(&mut dst, &RectF::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(dst.to_immutable(), mapped);
    }

    #[test]
    fn test_rect_to_rect() {
        let src = RectF::new(0.0, 0.0, 100.0, 200.0);
        let dst = RectF::new(0.0, 0.0, 400.0, 400.0);
        let fill = Matrix::from_rect_to_rect(&src, &dst, ScaleToFit::Fill).unwrap();
        assert_eq!(fill, Matrix::from_scale(4.0, 2.0));
        let start = Matrix::from_rect_to_rect(&src, &dst, ScaleToFit::Start).unwrap();
        assert_eq!(start, Matrix::from_scale(2.0, 2.0));
        let center = Matrix::from_rect_to_rect(&src, &dst, ScaleToFit::Center).unwrap();
        assert_eq!(center.trans_x(), 100.0);
        let end = Matrix::from_rect_to_rect(&src, &dst, ScaleToFit::End).unwrap();
        assert_eq!(end.trans_x(), 200.0);
        assert_eq!(end.trans_y(), 0.0);
        assert!(Matrix::from_rect_to_rect(&RectF::EMPTY, &dst, ScaleToFit::Fill).is_none());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_translate(1.5, -2.0);
        assert_eq!(m.to_string(), "[1, 0, 1.5][0, 1, -2][0, 0, 1]");
    }
}
