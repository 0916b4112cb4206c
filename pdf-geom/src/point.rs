//! Coordinate pairs in the integer and floating point domains.

/// Read access to an `i32` point.
pub trait IntPointValues {
    fn x(&self) -> i32;
    fn y(&self) -> i32;

    fn to_int_array(&self) -> [i32; 2] {
        [self.x(), self.y()]
    }

    /// Euclidean distance from the origin.
    fn length(&self) -> f32 {
        (self.x() as f64).hypot(self.y() as f64) as f32
    }
}

/// Read access to an `f32` point.
pub trait FloatPointValues {
    fn x(&self) -> f32;
    fn y(&self) -> f32;

    fn to_float_array(&self) -> [f32; 2] {
        [self.x(), self.y()]
    }

    fn length(&self) -> f32 {
        self.x().hypot(self.y())
    }
}

/// Float to integer cast: nearest, ties towards positive infinity,
/// saturating, NaN as 0.
pub(crate) fn round_to_i32(v: f32) -> i32 {
    (v as f64 + 0.5).floor() as i32
}

fn offset_i(p: [i32; 2], dx: i32, dy: i32) -> [i32; 2] {
    [p[0].wrapping_add(dx), p[1].wrapping_add(dy)]
}

fn negate_i(p: [i32; 2]) -> [i32; 2] {
    [p[0].wrapping_neg(), p[1].wrapping_neg()]
}

fn offset_f(p: [f32; 2], dx: f32, dy: f32) -> [f32; 2] {
    [p[0] + dx, p[1] + dy]
}

fn negate_f(p: [f32; 2]) -> [f32; 2] {
    [-p[0], -p[1]]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn set(&self, x: i32, y: i32) -> Self {
        Point::new(x, y)
    }

    pub fn set_from(&self, other: &impl IntPointValues) -> Self {
        Point::new(other.x(), other.y())
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Point::from(offset_i(self.to_int_array(), dx, dy))
    }

    pub fn negate(&self) -> Self {
        Point::from(negate_i(self.to_int_array()))
    }

    pub fn to_mutable(&self) -> MutablePoint {
        MutablePoint::new(self.x, self.y)
    }
}

impl IntPointValues for Point {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutablePoint {
    pub x: i32,
    pub y: i32,
}

impl MutablePoint {
    pub fn new(x: i32, y: i32) -> Self {
        MutablePoint { x, y }
    }

    pub fn set(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from(&mut self, other: &impl IntPointValues) -> &mut Self {
        self.set(other.x(), other.y())
    }

    pub fn offset(&mut self, dx: i32, dy: i32) -> &mut Self {
        let [x, y] = offset_i(self.to_int_array(), dx, dy);
        self.set(x, y)
    }

    pub fn negate(&mut self) -> &mut Self {
        let [x, y] = negate_i(self.to_int_array());
        self.set(x, y)
    }

    pub fn to_immutable(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl IntPointValues for MutablePoint {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointF {
    x: f32,
    y: f32,
}

impl PointF {
    pub const ZERO: PointF = PointF { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        PointF { x, y }
    }

    pub fn set(&self, x: f32, y: f32) -> Self {
        PointF::new(x, y)
    }

    pub fn set_from(&self, other: &impl FloatPointValues) -> Self {
        PointF::new(other.x(), other.y())
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        PointF::from(offset_f(self.to_float_array(), dx, dy))
    }

    pub fn negate(&self) -> Self {
        PointF::from(negate_f(self.to_float_array()))
    }

    /// Rounds each coordinate to the nearest integer.
    pub fn round(&self) -> Point {
        Point::new(round_to_i32(self.x), round_to_i32(self.y))
    }

    pub fn to_mutable(&self) -> MutablePointF {
        MutablePointF::new(self.x, self.y)
    }
}

impl FloatPointValues for PointF {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutablePointF {
    pub x: f32,
    pub y: f32,
}

impl MutablePointF {
    pub fn new(x: f32, y: f32) -> Self {
        MutablePointF { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_from(&mut self, other: &impl FloatPointValues) -> &mut Self {
        self.set(other.x(), other.y())
    }

    pub fn offset(&mut self, dx: f32, dy: f32) -> &mut Self {
        let [x, y] = offset_f(self.to_float_array(), dx, dy);
        self.set(x, y)
    }

    pub fn negate(&mut self) -> &mut Self {
        let [x, y] = negate_f(self.to_float_array());
        self.set(x, y)
    }

    pub fn round(&self) -> Point {
        Point::new(round_to_i32(self.x), round_to_i32(self.y))
    }

    pub fn to_immutable(&self) -> PointF {
        PointF::new(self.x, self.y)
    }
}

impl FloatPointValues for MutablePointF {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}
