use clap::Parser;
use log::info;

use pdf_geom::error::{GeomError, Result};
use pdf_geom::matrix::{Matrix, MatrixValues};
use pdf_geom::rect::RectF;

use super::{rect_line, rectf_line};

#[derive(Debug, Parser)]
pub struct Config {
    /// Nine row-major components or six PDF affine values.
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) matrix: Matrix,

    /// left,top,right,bottom
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) rect: RectF,

    /// Map through the inverse of the matrix.
    #[arg(short, long)]
    pub(crate) inverse: bool,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    let matrix = if cfg.inverse {
        let singular = || GeomError::Degenerate("matrix is not invertible".to_string());
        cfg.matrix.invert().ok_or_else(singular)?
    } else {
        cfg.matrix
    };
    info!("map rect {:?} through {}", cfg.rect, matrix);
    let mapped = matrix.map_rect(&cfg.rect);
    println!("{}", rectf_line(&mapped, precision));
    println!("{}", rect_line(&mapped.round_out()));
    Ok(())
}
