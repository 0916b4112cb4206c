use clap::Parser;
use log::info;

use pdf_geom::error::{GeomError, Result};
use pdf_geom::matrix::{Matrix, MatrixValues};

use super::join;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) matrix: Matrix,

    /// x,y pairs.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub(crate) points: Vec<f32>,

    /// Treat the pairs as vectors and ignore translation.
    #[arg(short, long)]
    pub(crate) vectors: bool,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    let mut pts = cfg.points;
    if pts.len() % 2 != 0 {
        return Err(GeomError::InvalidLength {
            expected: pts.len() + 1,
            actual: pts.len(),
        });
    }
    info!("map {} pairs through {}", pts.len() / 2, cfg.matrix);
    if cfg.vectors {
        cfg.matrix.map_vectors(&mut pts);
    } else {
        cfg.matrix.map_points(&mut pts);
    }
    println!("{}", join(&pts, precision));
    Ok(())
}
