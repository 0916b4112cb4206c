use pdf_geom::matrix::MatrixValues;
use pdf_geom::rect::{FloatRectValues, IntRectValues};

pub mod fit;
pub mod invert;
pub mod mappoints;
pub mod maprect;
pub mod pagetodevice;
pub mod resolution;

/// Comma separated, so the output can be passed back as an argument.
pub(crate) fn join(values: &[f32], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn matrix_line(m: &impl MatrixValues, precision: usize) -> String {
    join(m.values(), precision)
}

pub(crate) fn rectf_line(r: &impl FloatRectValues, precision: usize) -> String {
    join(&r.to_float_array(), precision)
}

pub(crate) fn rect_line(r: &impl IntRectValues) -> String {
    r.to_int_array()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
