use clap::Parser;
use log::info;

use pdf_geom::error::{GeomError, Result};
use pdf_geom::page::{self, Rotation, SizeF};
use pdf_geom::rect::{Rect, RectF};

use super::{matrix_line, rect_line};

#[derive(Debug, Parser)]
pub struct Config {
    /// Page width,height in points.
    #[arg(long)]
    pub(crate) page: SizeF,

    /// Device viewport left,top,right,bottom in pixels.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) viewport: Rect,

    /// Clockwise quarter turns.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub(crate) rotate: i32,

    /// Page rect to map into the viewport.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) rect: Option<RectF>,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    let rotation = Rotation::from(cfg.rotate);
    info!(
        "page {:?} into viewport {:?} rotated {} degrees",
        cfg.page,
        cfg.viewport,
        rotation.degrees()
    );
    let no_area = || GeomError::Degenerate("page has no area".to_string());
    let m = page::page_to_device(cfg.page, &cfg.viewport, rotation).ok_or_else(no_area)?;
    println!("{}", matrix_line(&m, precision));
    if let Some(rect) = cfg.rect {
        if let Some(device) = page::map_rect_to_device(cfg.page, &cfg.viewport, rotation, &rect) {
            println!("{}", rect_line(&device));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_is_an_error() {
        let cfg = Config {
            page: SizeF::new(0.0, 792.0),
            viewport: Rect::new(0, 0, 100, 100),
            rotate: 0,
            rect: None,
        };
        assert!(matches!(command(cfg, 2), Err(GeomError::Degenerate(_))));
    }
}
