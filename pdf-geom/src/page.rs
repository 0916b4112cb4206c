//! Page space to device space.
//!
//! PDF page space has its origin at the bottom left with y growing upwards.
//! Device space has its origin at the top left of the viewport with y growing
//! downwards.

use crate::matrix::{Matrix, MatrixValues};
use crate::rect::{FloatRectValues, IntRectValues, Rect, RectF};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const fn new(width: f32, height: f32) -> Self {
        SizeF { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl From<Size> for SizeF {
    fn from(size: Size) -> Self {
        SizeF::new(size.width as f32, size.height as f32)
    }
}

/// Clockwise rotation of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Any number of clockwise quarter turns, negative counts included.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }

    pub fn quarter_turns(&self) -> i32 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }

    pub fn degrees(&self) -> i32 {
        self.quarter_turns() * 90
    }
}

impl From<i32> for Rotation {
    fn from(turns: i32) -> Self {
        Rotation::from_quarter_turns(turns)
    }
}

/// Maps page space onto `viewport`, the page image turned clockwise by
/// `rotation`. `None` when the page has no area.
pub fn page_to_device(
    page: SizeF,
    viewport: &impl IntRectValues,
    rotation: Rotation,
) -> Option<Matrix> {
    if page.is_empty() {
        return None;
    }
    let left = viewport.left() as f32;
    let top = viewport.top() as f32;
    let right = viewport.right() as f32;
    let bottom = viewport.bottom() as f32;

    // device images of the page origin, of (0, height) and of (width, 0)
    let ((x0, y0), (x1, y1), (x2, y2)) = match rotation {
        Rotation::Rotate0 => ((left, bottom), (left, top), (right, bottom)),
        Rotation::Rotate90 => ((left, top), (right, top), (left, bottom)),
        Rotation::Rotate180 => ((right, top), (right, bottom), (left, top)),
        Rotation::Rotate270 => ((right, bottom), (left, bottom), (right, top)),
    };
    Some(Matrix::from_affine([
        (x2 - x0) / page.width,
        (y2 - y0) / page.width,
        (x1 - x0) / page.height,
        (y1 - y0) / page.height,
        x0,
        y0,
    ]))
}

pub fn device_to_page(
    page: SizeF,
    viewport: &impl IntRectValues,
    rotation: Rotation,
) -> Option<Matrix> {
    page_to_device(page, viewport, rotation)?.invert()
}

/// Device bounding box of a page rect, each edge rounded to the nearest pixel.
pub fn map_rect_to_device(
    page: SizeF,
    viewport: &impl IntRectValues,
    rotation: Rotation,
    rect: &impl FloatRectValues,
) -> Option<Rect> {
    let m = page_to_device(page, viewport, rotation)?;
    Some(m.map_rect(rect).round())
}

/// Page space bounding box of a device rect. The result is normalised, so
/// `top` holds the smaller page y.
pub fn map_rect_to_page(
    page: SizeF,
    viewport: &impl IntRectValues,
    rotation: Rotation,
    rect: &impl IntRectValues,
) -> Option<RectF> {
    let m = device_to_page(page, viewport, rotation)?;
    Some(m.map_rect(&RectF::from(Rect::from(rect.to_int_array()))))
}

/// User space to device space at `x_res` by `y_res` dots per inch.
///
/// `media_box` keeps the PDF array order, `[llx lly urx ury]` stored as
/// `left, top, right, bottom`.
pub fn resolution_transform(media_box: &impl FloatRectValues, x_res: f32, y_res: f32) -> Matrix {
    let sx = x_res / 72.0;
    let sy = y_res / 72.0;
    Matrix::from_affine([
        sx,
        0.0,
        0.0,
        -sy,
        -sx * media_box.left(),
        sy * media_box.bottom(),
    ])
}

/// Pixel size of `media_box` rendered at the given resolution.
pub fn device_size(media_box: &impl FloatRectValues, x_res: f32, y_res: f32) -> Size {
    let sx = x_res / 72.0;
    let sy = y_res / 72.0;
    Size::new(
        (sx * (media_box.width() + 0.5)) as i32,
        (sy * (media_box.height() + 0.5)) as i32,
    )
}

/// Uniform scale fitting `page` inside `surface`, centred on whole pixels.
/// `None` when either size has no area.
pub fn fit_centered(page: SizeF, surface: Size) -> Option<Matrix> {
    if page.is_empty() || surface.is_empty() {
        return None;
    }
    let scale = (surface.width as f32 / page.width).min(surface.height as f32 / page.height);
    let width = (page.width * scale) as i32;
    let height = (page.height * scale) as i32;
    let start_x = (surface.width - width) / 2;
    let start_y = (surface.height - height) / 2;
    Some(Matrix::from_scale(scale, scale).post_translate(start_x as f32, start_y as f32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{FloatPointValues, PointF};

    const LETTER: SizeF = SizeF::new(612.0, 792.0);

    fn map(m: &Matrix, x: f32, y: f32) -> (f32, f32) {
        let p = m.map_point(&PointF::new(x, y));
        (p.x(), p.y())
    }

    #[test]
    fn test_rotation_from_quarter_turns() {
        assert_eq!(Rotation::from(0), Rotation::Rotate0);
        assert_eq!(Rotation::from(5), Rotation::Rotate90);
        assert_eq!(Rotation::from(-1), Rotation::Rotate270);
        assert_eq!(Rotation::Rotate180.degrees(), 180);
    }

    #[test]
    fn test_page_to_device_upright() {
        let viewport = Rect::new(0, 0, 612, 792);
        let m = page_to_device(LETTER, &viewport, Rotation::Rotate0).unwrap();
        assert_eq!(map(&m, 0.0, 0.0), (0.0, 792.0));
        assert_eq!(map(&m, 612.0, 792.0), (612.0, 0.0));
    }

    #[test]
    fn test_page_to_device_rotated() {
        let viewport = Rect::new(10, 20, 802, 632);
        let m = page_to_device(LETTER, &viewport, Rotation::Rotate90).unwrap();
        // page origin lands on the viewport's top left
        assert_eq!(map(&m, 0.0, 0.0), (10.0, 20.0));
        // page top left lands on the top right
        assert_eq!(map(&m, 0.0, 792.0), (802.0, 20.0));

        let m = page_to_device(LETTER, &viewport, Rotation::Rotate180).unwrap();
        assert_eq!(map(&m, 0.0, 0.0), (802.0, 20.0));
        let m = page_to_device(LETTER, &viewport, Rotation::Rotate270).unwrap();
        assert_eq!(map(&m, 0.0, 0.0), (802.0, 632.0));
    }

    #[test]
    fn test_empty_page() {
        let viewport = Rect::new(0, 0, 100, 100);
        assert!(page_to_device(SizeF::new(0.0, 10.0), &viewport, Rotation::Rotate0).is_none());
        assert!(device_to_page(SizeF::default(), &viewport, Rotation::Rotate0).is_none());
    }

    #[test]
    fn test_map_rect_round_trip() {
        let viewport = Rect::new(0, 0, 1224, 1584);
        let link = RectF::new(72.0, 100.0, 144.0, 120.0);
        for turns in 0..4 {
            let rotation = Rotation::from(turns);
            let viewport = if turns % 2 == 1 {
                Rect::new(0, 0, 1584, 1224)
            } else {
                viewport
            };
            let device = map_rect_to_device(LETTER, &viewport, rotation, &link).unwrap();
            assert!(!device.is_empty());
            let back = map_rect_to_page(LETTER, &viewport, rotation, &device).unwrap();
            let (got, want) = (back.to_float_array(), link.to_float_array());
            for i in 0..4 {
                assert!((got[i] - want[i]).abs() < 1e-3, "{:?} {:?}", back, link);
            }
        }
    }

    #[test]
    fn test_resolution_transform() {
        let media = RectF::new(0.0, 0.0, 612.0, 792.0);
        let m = resolution_transform(&media, 144.0, 144.0);
        assert_eq!(map(&m, 0.0, 0.0), (0.0, 1584.0));
        assert_eq!(map(&m, 612.0, 792.0), (1224.0, 0.0));
        assert_eq!(device_size(&media, 144.0, 144.0), Size::new(1225, 1585));
    }

    #[test]
    fn test_fit_centered() {
        let m = fit_centered(SizeF::new(100.0, 200.0), Size::new(400, 300)).unwrap();
        assert_eq!(m.scale_x(), 1.5);
        assert_eq!(m.scale_y(), 1.5);
        assert_eq!(m.trans_x(), 125.0);
        assert_eq!(m.trans_y(), 0.0);
        assert!(fit_centered(LETTER, Size::new(0, 10)).is_none());
    }
}
