use pdf_geom::matrix::{MatrixValues, MutableMatrix, ScaleToFit};
use pdf_geom::page::{self, Rotation, Size, SizeF};
use pdf_geom::rect::{FloatRectValues, IntRectValues, Rect, RectBounds, RectF};

const A4: SizeF = SizeF::new(595.0, 842.0);

#[test]
fn test_link_box_hit_testing() {
    let viewport = Rect::new(0, 0, 1190, 1684);
    let link = RectF::new(100.0, 700.0, 200.0, 720.0);
    let device = page::map_rect_to_device(A4, &viewport, Rotation::Rotate0, &link).unwrap();
    // page y grows upwards, device y downwards
    assert_eq!(device, Rect::new(200, 244, 400, 284));

    let tap = Rect::new(250, 250, 251, 251);
    assert!(device.contains_rect(&tap));
    let on_page = page::map_rect_to_page(A4, &viewport, Rotation::Rotate0, &tap).unwrap();
    assert!(link.contains_rect(&on_page));
}

#[test]
fn test_rotated_viewport_swaps_axes() {
    let viewport = Rect::new(0, 0, 842, 595);
    let full = RectF::new(0.0, 0.0, A4.width, A4.height);
    for turns in [1, 3, -1] {
        let device = page::map_rect_to_device(A4, &viewport, Rotation::from(turns), &full).unwrap();
        assert_eq!(device, viewport);
    }
}

#[test]
fn test_fit_centered_matches_rect_to_rect() {
    let surface = Size::new(1000, 1000);
    let fit = page::fit_centered(A4, surface).unwrap();
    let page_rect = RectF::new(0.0, 0.0, A4.width, A4.height);
    let mapped = fit.map_rect(&page_rect);
    assert!((mapped.height() - 1000.0).abs() < 1e-3);
    assert!((mapped.center_x() - 500.0).abs() <= 1.0);

    let mut centered = MutableMatrix::default();
    assert!(centered.set_rect_to_rect(
        &page_rect,
        &RectF::new(0.0, 0.0, 1000.0, 1000.0),
        ScaleToFit::Center
    ));
    assert_eq!(centered.scale_x(), fit.scale_x());
    // fit_centered snaps the offset to whole pixels
    assert!((centered.trans_x() - fit.trans_x()).abs() < 1.0);
}

#[test]
fn test_resolution_device_size() {
    let media_box: RectF = "0 0 595 842".parse().unwrap();
    let size = page::device_size(&media_box, 72.0, 72.0);
    assert_eq!(size, Size::new(595, 842));
    let m = page::resolution_transform(&media_box, 72.0, 72.0);
    let device = m.map_rect(&media_box).round();
    assert_eq!(device.width(), size.width);
    assert_eq!(device.height(), size.height);
}
