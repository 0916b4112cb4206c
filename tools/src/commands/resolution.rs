use clap::Parser;
use log::info;

use pdf_geom::error::Result;
use pdf_geom::page;
use pdf_geom::rect::RectF;

use super::matrix_line;

#[derive(Debug, Parser)]
pub struct Config {
    /// llx,lly,urx,ury as written in the PDF.
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) media_box: RectF,

    #[arg(short, long, default_value_t = 72.0)]
    pub(crate) dpi: f32,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    info!("media box {:?} at {} dpi", cfg.media_box, cfg.dpi);
    let m = page::resolution_transform(&cfg.media_box, cfg.dpi, cfg.dpi);
    let size = page::device_size(&cfg.media_box, cfg.dpi, cfg.dpi);
    println!("{}", matrix_line(&m, precision));
    println!("{},{}", size.width, size.height);
    Ok(())
}
