use clap::{Parser, ValueEnum};

use pdf_geom::error::{GeomError, Result};
use pdf_geom::matrix::{Matrix, ScaleToFit};
use pdf_geom::rect::RectF;

use super::matrix_line;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    Fill,
    Start,
    Center,
    End,
}

impl From<Mode> for ScaleToFit {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Fill => ScaleToFit::Fill,
            Mode::Start => ScaleToFit::Start,
            Mode::Center => ScaleToFit::Center,
            Mode::End => ScaleToFit::End,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) src: RectF,

    #[arg(short, long, allow_hyphen_values = true)]
    pub(crate) dst: RectF,

    #[arg(short, long, value_enum, default_value_t = Mode::Fill)]
    pub(crate) mode: Mode,
}

pub fn command(cfg: Config, precision: usize) -> Result<()> {
    let fit: ScaleToFit = cfg.mode.into();
    let no_area = || GeomError::Degenerate("source rect has no area".to_string());
    let m = Matrix::from_rect_to_rect(&cfg.src, &cfg.dst, fit).ok_or_else(no_area)?;
    println!("{}", matrix_line(&m, precision));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_an_error() {
        let cfg = Config {
            src: RectF::new(5.0, 5.0, 5.0, 9.0),
            dst: RectF::new(0.0, 0.0, 10.0, 10.0),
            mode: Mode::Center,
        };
        assert!(matches!(command(cfg, 2), Err(GeomError::Degenerate(_))));
    }
}
