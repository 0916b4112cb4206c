//! Axis aligned boxes stored as `left, top, right, bottom`.
//!
//! Nothing forces `left <= right` or `top <= bottom`; width and height are
//! signed and an inverted rect simply reports itself as empty.

use crate::point::round_to_i32;

/// Exact `f64` view of any rect, so containment and intersection work
/// across the integer and float domains.
pub trait RectBounds {
    /// `[left, top, right, bottom]`.
    fn bounds(&self) -> [f64; 4];

    /// True when `other` lies fully inside `self`, edges included.
    fn contains_rect(&self, other: &impl RectBounds) -> bool {
        let [l, t, r, b] = self.bounds();
        let [ol, ot, or, ob] = other.bounds();
        l <= ol && t <= ot && r >= or && b >= ob
    }

    /// True when the overlap has a positive area. Rects that only share an
    /// edge do not intersect.
    fn intersects(&self, other: &impl RectBounds) -> bool {
        let [l, t, r, b] = self.bounds();
        let [ol, ot, or, ob] = other.bounds();
        l.max(ol) < r.min(or) && t.max(ot) < b.min(ob)
    }
}

pub trait IntRectValues {
    fn left(&self) -> i32;
    fn top(&self) -> i32;
    fn right(&self) -> i32;
    fn bottom(&self) -> i32;

    /// `right - left` with two's complement wrapping.
    fn width(&self) -> i32 {
        self.right().wrapping_sub(self.left())
    }

    fn height(&self) -> i32 {
        self.bottom().wrapping_sub(self.top())
    }

    fn center_x(&self) -> i32 {
        midpoint(self.left(), self.right())
    }

    fn center_y(&self) -> i32 {
        midpoint(self.top(), self.bottom())
    }

    fn is_empty(&self) -> bool {
        is_empty_i(self.to_int_array())
    }

    /// Near edges inclusive, far edges exclusive.
    fn contains(&self, x: i32, y: i32) -> bool {
        self.left() <= x && x < self.right() && self.top() <= y && y < self.bottom()
    }

    fn to_int_array(&self) -> [i32; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }
}

pub trait FloatRectValues {
    fn left(&self) -> f32;
    fn top(&self) -> f32;
    fn right(&self) -> f32;
    fn bottom(&self) -> f32;

    fn width(&self) -> f32 {
        self.right() - self.left()
    }

    fn height(&self) -> f32 {
        self.bottom() - self.top()
    }

    fn center_x(&self) -> f32 {
        ((self.left() as f64 + self.right() as f64) * 0.5) as f32
    }

    fn center_y(&self) -> f32 {
        ((self.top() as f64 + self.bottom() as f64) * 0.5) as f32
    }

    fn is_empty(&self) -> bool {
        is_empty_f(self.to_float_array())
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        self.left() <= x && x < self.right() && self.top() <= y && y < self.bottom()
    }

    fn to_float_array(&self) -> [f32; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}

fn is_empty_i(r: [i32; 4]) -> bool {
    r[2].wrapping_sub(r[0]) <= 0 || r[3].wrapping_sub(r[1]) <= 0
}

fn is_empty_f(r: [f32; 4]) -> bool {
    // written so that NaN extents count as empty
    !(r[2] - r[0] > 0.0 && r[3] - r[1] > 0.0)
}

fn union_i(a: [i32; 4], b: [i32; 4]) -> [i32; 4] {
    match (is_empty_i(a), is_empty_i(b)) {
        (true, true) => [0; 4],
        (true, false) => b,
        (false, true) => a,
        (false, false) => [
            a[0].min(b[0]),
            a[1].min(b[1]),
            a[2].max(b[2]),
            a[3].max(b[3]),
        ],
    }
}

fn union_f(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    match (is_empty_f(a), is_empty_f(b)) {
        (true, true) => [0.0; 4],
        (true, false) => b,
        (false, true) => a,
        (false, false) => [
            a[0].min(b[0]),
            a[1].min(b[1]),
            a[2].max(b[2]),
            a[3].max(b[3]),
        ],
    }
}

fn offset_i(r: [i32; 4], dx: i32, dy: i32) -> [i32; 4] {
    [
        r[0].wrapping_add(dx),
        r[1].wrapping_add(dy),
        r[2].wrapping_add(dx),
        r[3].wrapping_add(dy),
    ]
}

fn offset_f(r: [f32; 4], dx: f32, dy: f32) -> [f32; 4] {
    [r[0] + dx, r[1] + dy, r[2] + dx, r[3] + dy]
}

fn round_out_f(r: [f32; 4]) -> [i32; 4] {
    [
        r[0].floor() as i32,
        r[1].floor() as i32,
        r[2].ceil() as i32,
        r[3].ceil() as i32,
    ]
}

fn round_f(r: [f32; 4]) -> [i32; 4] {
    r.map(round_to_i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    pub const EMPTY: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Smallest rect enclosing both. Empty operands are ignored.
    pub fn union(&self, other: &impl IntRectValues) -> Self {
        Rect::from(union_i(self.to_int_array(), other.to_int_array()))
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Rect::from(offset_i(self.to_int_array(), dx, dy))
    }

    pub fn set_empty(&self) -> Self {
        Rect::EMPTY
    }

    pub fn set(&self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect::new(left, top, right, bottom)
    }

    pub fn set_from(&self, other: &impl IntRectValues) -> Self {
        Rect::from(other.to_int_array())
    }

    pub fn to_mutable(&self) -> MutableRect {
        MutableRect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl IntRectValues for Rect {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.right
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutableRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl MutableRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        MutableRect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn set(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> &mut Self {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        self
    }

    pub fn set_from(&mut self, other: &impl IntRectValues) -> &mut Self {
        self.set(other.left(), other.top(), other.right(), other.bottom())
    }

    pub fn set_empty(&mut self) -> &mut Self {
        self.set(0, 0, 0, 0)
    }

    pub fn union(&mut self, other: &impl IntRectValues) -> &mut Self {
        let [l, t, r, b] = union_i(self.to_int_array(), other.to_int_array());
        self.set(l, t, r, b)
    }

    pub fn offset(&mut self, dx: i32, dy: i32) -> &mut Self {
        let [l, t, r, b] = offset_i(self.to_int_array(), dx, dy);
        self.set(l, t, r, b)
    }

    pub fn to_immutable(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl IntRectValues for MutableRect {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.right
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectF {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl RectF {
    pub const EMPTY: RectF = RectF::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        RectF {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn union(&self, other: &impl FloatRectValues) -> Self {
        RectF::from(union_f(self.to_float_array(), other.to_float_array()))
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        RectF::from(offset_f(self.to_float_array(), dx, dy))
    }

    pub fn set_empty(&self) -> Self {
        RectF::EMPTY
    }

    pub fn set(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        RectF::new(left, top, right, bottom)
    }

    pub fn set_from(&self, other: &impl FloatRectValues) -> Self {
        RectF::from(other.to_float_array())
    }

    /// Floors the near edges and ceils the far edges, so the result encloses
    /// `self`.
    pub fn round_out(&self) -> Rect {
        Rect::from(round_out_f(self.to_float_array()))
    }

    /// Rounds each edge to the nearest integer independently.
    pub fn round(&self) -> Rect {
        Rect::from(round_f(self.to_float_array()))
    }

    pub fn to_mutable(&self) -> MutableRectF {
        MutableRectF::new(self.left, self.top, self.right, self.bottom)
    }
}

impl FloatRectValues for RectF {
    fn left(&self) -> f32 {
        self.left
    }

    fn top(&self) -> f32 {
        self.top
    }

    fn right(&self) -> f32 {
        self.right
    }

    fn bottom(&self) -> f32 {
        self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutableRectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl MutableRectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        MutableRectF {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn set(&mut self, left: f32, top: f32, right: f32, bottom: f32) -> &mut Self {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        self
    }

    pub fn set_from(&mut self, other: &impl FloatRectValues) -> &mut Self {
        self.set(other.left(), other.top(), other.right(), other.bottom())
    }

    pub fn set_empty(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0, 0.0)
    }

    pub fn union(&mut self, other: &impl FloatRectValues) -> &mut Self {
        let [l, t, r, b] = union_f(self.to_float_array(), other.to_float_array());
        self.set(l, t, r, b)
    }

    pub fn offset(&mut self, dx: f32, dy: f32) -> &mut Self {
        let [l, t, r, b] = offset_f(self.to_float_array(), dx, dy);
        self.set(l, t, r, b)
    }

    pub fn round_out(&self) -> Rect {
        Rect::from(round_out_f(self.to_float_array()))
    }

    pub fn round(&self) -> Rect {
        Rect::from(round_f(self.to_float_array()))
    }

    pub fn to_immutable(&self) -> RectF {
        RectF::new(self.left, self.top, self.right, self.bottom)
    }
}

impl FloatRectValues for MutableRectF {
    fn left(&self) -> f32 {
        self.left
    }

    fn top(&self) -> f32 {
        self.top
    }

    fn right(&self) -> f32 {
        self.right
    }

    fn bottom(&self) -> f32 {
        self.bottom
    }
}

impl RectBounds for Rect {
    fn bounds(&self) -> [f64; 4] {
        self.to_int_array().map(f64::from)
    }
}

impl RectBounds for MutableRect {
    fn bounds(&self) -> [f64; 4] {
        self.to_int_array().map(f64::from)
    }
}

impl RectBounds for RectF {
    fn bounds(&self) -> [f64; 4] {
        self.to_float_array().map(f64::from)
    }
}

impl RectBounds for MutableRectF {
    fn bounds(&self) -> [f64; 4] {
        self.to_float_array().map(f64::from)
    }
}
