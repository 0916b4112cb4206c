//! Matrix algorithms over a plain row-major `[f32; 9]`.
//!
//! `Matrix` and `MutableMatrix` are thin shells over these functions: the
//! immutable one copies and applies, the mutable one applies in place.

use log::debug;

use super::{
    ScaleToFit, MPERSP_0, MPERSP_1, MPERSP_2, MSCALE_X, MSCALE_Y, MSKEW_X, MSKEW_Y, MTRANS_X,
    MTRANS_Y,
};

pub(crate) type Values = [f32; 9];

pub(crate) const IDENTITY: Values = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Sines and cosines at or below this magnitude are treated as zero.
const NEARLY_ZERO: f32 = 1.0 / 4096.0;

const DET_TOLERANCE: f64 = (NEARLY_ZERO as f64) * (NEARLY_ZERO as f64) * (NEARLY_ZERO as f64);

/// Coarse classification used to pick the cheapest mapping path.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Identity,
    ScaleTranslate,
    Affine,
    Perspective,
}

impl Kind {
    fn of(m: &Values) -> Self {
        if !is_affine(m) {
            Kind::Perspective
        } else if m[MSKEW_X] != 0.0 || m[MSKEW_Y] != 0.0 {
            Kind::Affine
        } else if is_identity(m) {
            Kind::Identity
        } else {
            Kind::ScaleTranslate
        }
    }
}

pub(crate) fn is_identity(m: &Values) -> bool {
    *m == IDENTITY
}

pub(crate) fn is_affine(m: &Values) -> bool {
    m[MPERSP_0] == 0.0 && m[MPERSP_1] == 0.0 && m[MPERSP_2] == 1.0
}

pub(crate) fn translation(dx: f32, dy: f32) -> Values {
    [1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0]
}

pub(crate) fn scaling(sx: f32, sy: f32, px: f32, py: f32) -> Values {
    [sx, 0.0, px - sx * px, 0.0, sy, py - sy * py, 0.0, 0.0, 1.0]
}

pub(crate) fn rotation(degrees: f32, px: f32, py: f32) -> Values {
    let (sin, cos) = (degrees as f64).to_radians().sin_cos();
    sin_cos(snap_to_zero(sin as f32), snap_to_zero(cos as f32), px, py)
}

pub(crate) fn sin_cos(sin: f32, cos: f32, px: f32, py: f32) -> Values {
    let one_minus_cos = 1.0 - cos;
    [
        cos,
        -sin,
        sin * py + one_minus_cos * px,
        sin,
        cos,
        -sin * px + one_minus_cos * py,
        0.0,
        0.0,
        1.0,
    ]
}

pub(crate) fn skewing(kx: f32, ky: f32, px: f32, py: f32) -> Values {
    [1.0, kx, -kx * py, ky, 1.0, -ky * px, 0.0, 0.0, 1.0]
}

fn snap_to_zero(v: f32) -> f32 {
    if v.abs() <= NEARLY_ZERO {
        0.0
    } else {
        v
    }
}

#[inline]
fn muladdmul(a: f32, b: f32, c: f32, d: f32) -> f32 {
    (a as f64 * b as f64 + c as f64 * d as f64) as f32
}

/// `a · b`: the result maps a point through `b` first, then `a`.
pub(crate) fn concat(a: &Values, b: &Values) -> Values {
    if is_affine(a) && is_affine(b) {
        return [
            muladdmul(a[MSCALE_X], b[MSCALE_X], a[MSKEW_X], b[MSKEW_Y]),
            muladdmul(a[MSCALE_X], b[MSKEW_X], a[MSKEW_X], b[MSCALE_Y]),
            muladdmul(a[MSCALE_X], b[MTRANS_X], a[MSKEW_X], b[MTRANS_Y]) + a[MTRANS_X],
            muladdmul(a[MSKEW_Y], b[MSCALE_X], a[MSCALE_Y], b[MSKEW_Y]),
            muladdmul(a[MSKEW_Y], b[MSKEW_X], a[MSCALE_Y], b[MSCALE_Y]),
            muladdmul(a[MSKEW_Y], b[MTRANS_X], a[MSCALE_Y], b[MTRANS_Y]) + a[MTRANS_Y],
            0.0,
            0.0,
            1.0,
        ];
    }
    let mut out = [0.0; 9];
    for row in 0..3 {
        for col in 0..3 {
            let sum: f64 = (0..3)
                .map(|k| a[row * 3 + k] as f64 * b[k * 3 + col] as f64)
                .sum();
            out[row * 3 + col] = sum as f32;
        }
    }
    out
}

pub(crate) fn pre_concat(m: &mut Values, other: &Values) {
    *m = concat(m, other);
}

pub(crate) fn post_concat(m: &mut Values, other: &Values) {
    *m = concat(other, m);
}

fn determinant(v: &[f64; 9], perspective: bool) -> f64 {
    if perspective {
        v[0] * (v[4] * v[8] - v[5] * v[7]) - v[1] * (v[3] * v[8] - v[5] * v[6])
            + v[2] * (v[3] * v[7] - v[4] * v[6])
    } else {
        v[0] * v[4] - v[1] * v[3]
    }
}

/// Algebraic inverse, or `None` when the determinant is nearly zero or the
/// inverse would carry non-finite components.
pub(crate) fn invert(m: &Values) -> Option<Values> {
    let perspective = !is_affine(m);
    let v = m.map(f64::from);
    let det = determinant(&v, perspective);
    if !det.is_finite() || det.abs() <= DET_TOLERANCE {
        debug!("matrix is not invertible, determinant {}", det);
        return None;
    }
    let inv_det = 1.0 / det;
    let inverse = if perspective {
        [
            (v[4] * v[8] - v[5] * v[7]) * inv_det,
            (v[2] * v[7] - v[1] * v[8]) * inv_det,
            (v[1] * v[5] - v[2] * v[4]) * inv_det,
            (v[5] * v[6] - v[3] * v[8]) * inv_det,
            (v[0] * v[8] - v[2] * v[6]) * inv_det,
            (v[2] * v[3] - v[0] * v[5]) * inv_det,
            (v[3] * v[7] - v[4] * v[6]) * inv_det,
            (v[1] * v[6] - v[0] * v[7]) * inv_det,
            (v[0] * v[4] - v[1] * v[3]) * inv_det,
        ]
    } else {
        [
            v[4] * inv_det,
            -v[1] * inv_det,
            (v[1] * v[5] - v[4] * v[2]) * inv_det,
            -v[3] * inv_det,
            v[0] * inv_det,
            (v[3] * v[2] - v[0] * v[5]) * inv_det,
            0.0,
            0.0,
            1.0,
        ]
    };
    let inverse = inverse.map(|x| x as f32);
    if inverse.iter().all(|x| x.is_finite()) {
        Some(inverse)
    } else {
        debug!("matrix inverse overflows: {:?}", inverse);
        None
    }
}

#[inline]
fn map_xy(m: &Values, kind: Kind, x: f32, y: f32) -> (f32, f32) {
    match kind {
        Kind::Identity => (x, y),
        Kind::ScaleTranslate => (x * m[MSCALE_X] + m[MTRANS_X], y * m[MSCALE_Y] + m[MTRANS_Y]),
        Kind::Affine => (
            m[MSCALE_X] * x + m[MSKEW_X] * y + m[MTRANS_X],
            m[MSKEW_Y] * x + m[MSCALE_Y] * y + m[MTRANS_Y],
        ),
        Kind::Perspective => {
            let w = m[MPERSP_0] * x + m[MPERSP_1] * y + m[MPERSP_2];
            (
                (m[MSCALE_X] * x + m[MSKEW_X] * y + m[MTRANS_X]) / w,
                (m[MSKEW_Y] * x + m[MSCALE_Y] * y + m[MTRANS_Y]) / w,
            )
        }
    }
}

pub(crate) fn map_point(m: &Values, x: f32, y: f32) -> (f32, f32) {
    map_xy(m, Kind::of(m), x, y)
}

/// Maps `count` points read from `src[src_index..]` into `dst[dst_index..]`.
/// Indices count floats, not points.
pub(crate) fn map_points(
    m: &Values,
    dst: &mut [f32],
    dst_index: usize,
    src: &[f32],
    src_index: usize,
    count: usize,
) {
    let kind = Kind::of(m);
    for i in 0..count {
        let si = src_index + i * 2;
        let di = dst_index + i * 2;
        let (x, y) = map_xy(m, kind, src[si], src[si + 1]);
        dst[di] = x;
        dst[di + 1] = y;
    }
}

pub(crate) fn map_points_in_place(m: &Values, pts: &mut [f32]) {
    let kind = Kind::of(m);
    for pt in pts.chunks_exact_mut(2) {
        let (x, y) = map_xy(m, kind, pt[0], pt[1]);
        pt[0] = x;
        pt[1] = y;
    }
}

/// The same matrix with `transX`/`transY` zeroed, used to map vectors.
pub(crate) fn without_translation(m: &Values) -> Values {
    let mut linear = *m;
    linear[MTRANS_X] = 0.0;
    linear[MTRANS_Y] = 0.0;
    linear
}

pub(crate) fn map_radius(m: &Values, radius: f32) -> f32 {
    let d0 = (m[MSCALE_X] * radius).hypot(m[MSKEW_Y] * radius);
    let d1 = (m[MSKEW_X] * radius).hypot(m[MSCALE_Y] * radius);
    (d0 * d1).sqrt()
}

/// Bounding box of the four mapped corners of `[left, top, right, bottom]`.
pub(crate) fn map_rect(m: &Values, src: [f32; 4]) -> [f32; 4] {
    let kind = Kind::of(m);
    let [l, t, r, b] = src;
    let corners = [
        map_xy(m, kind, l, t),
        map_xy(m, kind, r, t),
        map_xy(m, kind, r, b),
        map_xy(m, kind, l, b),
    ];
    let (x0, y0) = corners[0];
    let mut out = [x0, y0, x0, y0];
    for &(x, y) in &corners[1..] {
        out[0] = min_nan(out[0], x);
        out[1] = min_nan(out[1], y);
        out[2] = max_nan(out[2], x);
        out[3] = max_nan(out[3], y);
    }
    out
}

// f32::min/max drop a NaN operand; bounds must keep it.
fn min_nan(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.min(b)
    }
}

fn max_nan(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.max(b)
    }
}

/// Scale and translate `src` onto `dst`. `None` for a source with no area.
pub(crate) fn rect_to_rect(src: [f32; 4], dst: [f32; 4], fit: ScaleToFit) -> Option<Values> {
    let src_width = src[2] - src[0];
    let src_height = src[3] - src[1];
    if !(src_width > 0.0 && src_height > 0.0) {
        debug!("skip rect to rect mapping from degenerate source {:?}", src);
        return None;
    }
    let dst_width = dst[2] - dst[0];
    let dst_height = dst[3] - dst[1];

    let mut sx = dst_width / src_width;
    let mut sy = dst_height / src_height;
    let mut x_larger = false;
    if fit != ScaleToFit::Fill {
        if sx > sy {
            x_larger = true;
            sx = sy;
        } else {
            sy = sx;
        }
    }

    let mut tx = dst[0] - src[0] * sx;
    let mut ty = dst[1] - src[1] * sy;
    if matches!(fit, ScaleToFit::Center | ScaleToFit::End) {
        let mut diff = if x_larger {
            dst_width - src_width * sy
        } else {
            dst_height - src_height * sy
        };
        if fit == ScaleToFit::Center {
            diff *= 0.5;
        }
        if x_larger {
            tx += diff;
        } else {
            ty += diff;
        }
    }
    Some([sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rotation() {
        let m = rotation(90.0, 0.0, 0.0);
        assert_eq!(m, [0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let m = rotation(180.0, 0.0, 0.0);
        assert_eq!(m, [-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_concat_perspective() {
        let mut p = IDENTITY;
        p[MPERSP_0] = 0.5;
        let t = translation(2.0, 3.0);
        let out = concat(&p, &t);
        // bottom row picks up the translation through persp0
        assert_eq!(out[MPERSP_2], 2.0);
        assert_eq!(out[MTRANS_X], 2.0);
    }

    #[test]
    fn test_invert_singular() {
        assert!(invert(&scaling(0.0, 2.0, 0.0, 0.0)).is_none());
        assert!(invert(&[1.0, 2.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 1.0]).is_none());
        assert!(invert(&[0.0; 9]).is_none());
    }

    #[test]
    fn test_invert_perspective() {
        let m = [2.0, 0.0, 1.0, 0.0, 4.0, 2.0, 0.5, 0.0, 1.0];
        let inv = invert(&m).unwrap();
        let product = concat(&m, &inv);
        for (got, want) in product.iter().zip(IDENTITY.iter()) {
            assert!((got - want).abs() < 1e-6, "{:?}", product);
        }
    }

    #[test]
    fn test_map_identity_keeps_special_values() {
        let (x, y) = map_point(&IDENTITY, f32::INFINITY, f32::NAN);
        assert_eq!(x, f32::INFINITY);
        assert!(y.is_nan());
    }

    #[test]
    fn test_map_rect_keeps_nan_bounds() {
        let out = map_rect(&IDENTITY, [f32::NAN, 0.0, 10.0, 10.0]);
        assert!(out[0].is_nan());
        assert!(out[2].is_nan());
        assert_eq!((out[1], out[3]), (0.0, 10.0));

        let m = scaling(2.0, 2.0, 0.0, 0.0);
        let out = map_rect(&m, [0.0, 0.0, 5.0, f32::NAN]);
        assert_eq!((out[0], out[2]), (0.0, 10.0));
        assert!(out[1].is_nan());
        assert!(out[3].is_nan());
    }

    #[test]
    fn test_rect_to_rect_degenerate() {
        let dst = [0.0, 0.0, 10.0, 10.0];
        assert!(rect_to_rect([0.0, 0.0, 0.0, 5.0], dst, ScaleToFit::Fill).is_none());
        assert!(rect_to_rect([0.0, 5.0, 5.0, 5.0], dst, ScaleToFit::Start).is_none());
    }
}
