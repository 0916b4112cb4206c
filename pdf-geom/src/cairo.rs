//! Interop with cairo's native matrix and rectangle types.
//!
//! `cairo::Matrix` only holds the six affine components, so the perspective
//! row is dropped on export and reset to `(0, 0, 1)` on import.

use crate::matrix::{Matrix, MatrixValues, MutableMatrix};
use crate::rect::{FloatRectValues, RectF};

impl From<&Matrix> for cairo::Matrix {
    fn from(m: &Matrix) -> Self {
        to_cairo(m)
    }
}

impl From<Matrix> for cairo::Matrix {
    fn from(m: Matrix) -> Self {
        to_cairo(&m)
    }
}

impl From<&MutableMatrix> for cairo::Matrix {
    fn from(m: &MutableMatrix) -> Self {
        to_cairo(m)
    }
}

fn to_cairo(m: &impl MatrixValues) -> cairo::Matrix {
    cairo::Matrix::new(
        m.scale_x() as f64,
        m.skew_y() as f64,
        m.skew_x() as f64,
        m.scale_y() as f64,
        m.trans_x() as f64,
        m.trans_y() as f64,
    )
}

impl From<cairo::Matrix> for Matrix {
    fn from(m: cairo::Matrix) -> Self {
        Matrix::from_affine([
            m.xx() as f32,
            m.yx() as f32,
            m.xy() as f32,
            m.yy() as f32,
            m.x0() as f32,
            m.y0() as f32,
        ])
    }
}

impl From<cairo::Matrix> for MutableMatrix {
    fn from(m: cairo::Matrix) -> Self {
        Matrix::from(m).to_mutable()
    }
}

impl From<RectF> for cairo::Rectangle {
    fn from(r: RectF) -> Self {
        cairo::Rectangle::new(
            r.left() as f64,
            r.top() as f64,
            r.width() as f64,
            r.height() as f64,
        )
    }
}

impl From<cairo::Rectangle> for RectF {
    fn from(r: cairo::Rectangle) -> Self {
        let left = r.x() as f32;
        let top = r.y() as f32;
        RectF::new(left, top, left + r.width() as f32, top + r.height() as f32)
    }
}
