use clap::Parser;

use pdf_geom::error::{GeomError, Result};
use pdf_geom::matrix::{Matrix, MatrixValues};

use super::matrix_line;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) matrix: Matrix,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    let singular = || GeomError::Degenerate("matrix is singular".to_string());
    let inverse = cfg.matrix.invert().ok_or_else(singular)?;
    println!("{}", matrix_line(&inverse, precision));
    Ok(())
}
