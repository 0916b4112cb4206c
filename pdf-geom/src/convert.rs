//! Conversions between the value types and to and from flat data.
//!
//! Typed conversions are plain `From` impls and never fail. Only untyped
//! input (slices, strings) goes through `TryFrom`/`FromStr`.

use std::str::FromStr;

use log::warn;

use crate::error::{GeomError, Result};
use crate::matrix::{Matrix, MatrixValues, MutableMatrix};
use crate::page::{Size, SizeF};
use crate::point::{FloatPointValues, IntPointValues, MutablePoint, MutablePointF, Point, PointF};
use crate::rect::{FloatRectValues, IntRectValues, MutableRect, MutableRectF, Rect, RectF};

impl From<[f32; 9]> for Matrix {
    fn from(values: [f32; 9]) -> Self {
        Matrix::new(values)
    }
}

impl From<Matrix> for [f32; 9] {
    fn from(m: Matrix) -> Self {
        *m.values()
    }
}

impl From<[f32; 9]> for MutableMatrix {
    fn from(values: [f32; 9]) -> Self {
        MutableMatrix::new(values)
    }
}

impl From<MutableMatrix> for [f32; 9] {
    fn from(m: MutableMatrix) -> Self {
        *m.values()
    }
}

impl From<Matrix> for MutableMatrix {
    fn from(m: Matrix) -> Self {
        m.to_mutable()
    }
}

impl From<MutableMatrix> for Matrix {
    fn from(m: MutableMatrix) -> Self {
        m.to_immutable()
    }
}

impl From<&MutableMatrix> for Matrix {
    fn from(m: &MutableMatrix) -> Self {
        m.to_immutable()
    }
}

fn check_len(values: &[f32], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(GeomError::InvalidLength {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

impl TryFrom<&[f32]> for Matrix {
    type Error = GeomError;

    fn try_from(values: &[f32]) -> Result<Self> {
        check_len(values, 9)?;
        let mut out = [0.0; 9];
        out.copy_from_slice(values);
        Ok(Matrix::new(out))
    }
}

impl TryFrom<&[f32]> for MutableMatrix {
    type Error = GeomError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Matrix::try_from(values).map(MutableMatrix::from)
    }
}

/// Expands the PDF `[a b c d e f]` layout to nine components.
fn affine_to_values(affine: [f32; 6]) -> [f32; 9] {
    let [a, b, c, d, e, f] = affine;
    [a, c, e, b, d, f, 0.0, 0.0, 1.0]
}

impl Matrix {
    /// Builds a matrix from the PDF `[a b c d e f]` layout used by `cm` and
    /// `/Matrix` entries.
    pub fn from_affine(affine: [f32; 6]) -> Self {
        Matrix::new(affine_to_values(affine))
    }
}

impl MutableMatrix {
    pub fn set_affine(&mut self, affine: [f32; 6]) -> &mut Self {
        self.set_values(affine_to_values(affine))
    }
}

impl From<Point> for MutablePoint {
    fn from(p: Point) -> Self {
        p.to_mutable()
    }
}

impl From<MutablePoint> for Point {
    fn from(p: MutablePoint) -> Self {
        p.to_immutable()
    }
}

impl From<PointF> for MutablePointF {
    fn from(p: PointF) -> Self {
        p.to_mutable()
    }
}

impl From<MutablePointF> for PointF {
    fn from(p: MutablePointF) -> Self {
        p.to_immutable()
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        PointF::new(p.x() as f32, p.y() as f32)
    }
}

impl From<MutablePoint> for MutablePointF {
    fn from(p: MutablePoint) -> Self {
        MutablePointF::new(p.x as f32, p.y as f32)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        p.to_int_array()
    }
}

impl From<[i32; 2]> for MutablePoint {
    fn from([x, y]: [i32; 2]) -> Self {
        MutablePoint::new(x, y)
    }
}

impl From<[f32; 2]> for PointF {
    fn from([x, y]: [f32; 2]) -> Self {
        PointF::new(x, y)
    }
}

impl From<PointF> for [f32; 2] {
    fn from(p: PointF) -> Self {
        p.to_float_array()
    }
}

impl From<[f32; 2]> for MutablePointF {
    fn from([x, y]: [f32; 2]) -> Self {
        MutablePointF::new(x, y)
    }
}

impl From<Rect> for MutableRect {
    fn from(r: Rect) -> Self {
        r.to_mutable()
    }
}

impl From<MutableRect> for Rect {
    fn from(r: MutableRect) -> Self {
        r.to_immutable()
    }
}

impl From<RectF> for MutableRectF {
    fn from(r: RectF) -> Self {
        r.to_mutable()
    }
}

impl From<MutableRectF> for RectF {
    fn from(r: MutableRectF) -> Self {
        r.to_immutable()
    }
}

/// Exact for every coordinate up to 2^24 in magnitude.
impl From<Rect> for RectF {
    fn from(r: Rect) -> Self {
        RectF::from(r.to_int_array().map(|v| v as f32))
    }
}

impl From<MutableRect> for MutableRectF {
    fn from(r: MutableRect) -> Self {
        let [l, t, rt, b] = r.to_int_array().map(|v| v as f32);
        MutableRectF::new(l, t, rt, b)
    }
}

impl From<[i32; 4]> for Rect {
    fn from([l, t, r, b]: [i32; 4]) -> Self {
        Rect::new(l, t, r, b)
    }
}

impl From<Rect> for [i32; 4] {
    fn from(r: Rect) -> Self {
        r.to_int_array()
    }
}

impl From<[i32; 4]> for MutableRect {
    fn from([l, t, r, b]: [i32; 4]) -> Self {
        MutableRect::new(l, t, r, b)
    }
}

impl From<[f32; 4]> for RectF {
    fn from([l, t, r, b]: [f32; 4]) -> Self {
        RectF::new(l, t, r, b)
    }
}

impl From<RectF> for [f32; 4] {
    fn from(r: RectF) -> Self {
        r.to_float_array()
    }
}

impl From<[f32; 4]> for MutableRectF {
    fn from([l, t, r, b]: [f32; 4]) -> Self {
        MutableRectF::new(l, t, r, b)
    }
}

/// Flattens rects to `left, top, right, bottom` quadruples.
pub fn rects_to_floats(rects: &[impl FloatRectValues]) -> Vec<f32> {
    rects.iter().flat_map(|r| r.to_float_array()).collect()
}

pub fn floats_to_rects(values: &[f32]) -> Result<Vec<RectF>> {
    if values.len() % 4 != 0 {
        return Err(GeomError::InvalidLength {
            expected: values.len() - values.len() % 4 + 4,
            actual: values.len(),
        });
    }
    Ok(values
        .chunks_exact(4)
        .map(|c| RectF::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Six PDF affine values per matrix. Perspective rows are dropped.
pub fn matrices_to_affine_floats(matrices: &[impl MatrixValues]) -> Vec<f32> {
    matrices.iter().flat_map(|m| m.to_affine()).collect()
}

/// `scaleX, transX, transY` per matrix, the layout the batch page renderer
/// consumes.
///
/// The encoding only carries a uniform scale and a translation. Matrices
/// with anything else are still encoded but a warning is logged.
pub fn encode_batch_matrices(matrices: &[impl MatrixValues]) -> Vec<f32> {
    let mut out = Vec::with_capacity(matrices.len() * 3);
    for (index, m) in matrices.iter().enumerate() {
        let skewed = m.skew_x() != 0.0 || m.skew_y() != 0.0;
        if !m.is_affine() || skewed || m.scale_x() != m.scale_y() {
            warn!(
                "batch matrix {} loses data in scale-translate encoding: {:?}",
                index,
                m.values()
            );
        }
        out.extend_from_slice(&[m.scale_x(), m.trans_x(), m.trans_y()]);
    }
    out
}

fn split_values(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Parses a comma or whitespace separated list of floats.
pub fn parse_floats(s: &str) -> Result<Vec<f32>> {
    split_values(s)
        .map(|v| {
            v.parse::<f32>()
                .map_err(|e| GeomError::Parse(format!("{}: {}", v, e)))
        })
        .collect()
}

pub fn parse_ints(s: &str) -> Result<Vec<i32>> {
    split_values(s)
        .map(|v| {
            v.parse::<i32>()
                .map_err(|e| GeomError::Parse(format!("{}: {}", v, e)))
        })
        .collect()
}

fn exact<T: Copy + Default, const N: usize>(values: Vec<T>) -> Result<[T; N]> {
    if values.len() != N {
        return Err(GeomError::InvalidLength {
            expected: N,
            actual: values.len(),
        });
    }
    let mut out = [T::default(); N];
    out.copy_from_slice(&values);
    Ok(out)
}

/// Nine row-major components, or the six PDF affine values.
impl FromStr for Matrix {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let values = parse_floats(s)?;
        match values.len() {
            6 => Ok(Matrix::from_affine(exact(values)?)),
            _ => Matrix::try_from(values.as_slice()),
        }
    }
}

impl FromStr for RectF {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        exact::<f32, 4>(parse_floats(s)?).map(RectF::from)
    }
}

impl FromStr for Rect {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        exact::<i32, 4>(parse_ints(s)?).map(Rect::from)
    }
}

impl FromStr for PointF {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        exact::<f32, 2>(parse_floats(s)?).map(PointF::from)
    }
}

impl FromStr for SizeF {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let [width, height] = exact::<f32, 2>(parse_floats(s)?)?;
        Ok(SizeF::new(width, height))
    }
}

impl FromStr for Size {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let [width, height] = exact::<i32, 2>(parse_ints(s)?)?;
        Ok(Size::new(width, height))
    }
}
