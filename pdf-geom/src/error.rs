use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("Invalid length: expected {expected} values, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Parse error: '{0}'")]
    Parse(String),

    #[error("Degenerate geometry: '{0}'")]
    Degenerate(String),
}

pub type Result<T> = std::result::Result<T, GeomError>;
