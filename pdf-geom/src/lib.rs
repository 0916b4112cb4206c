#[cfg(feature = "cairo")]
mod cairo;

pub mod convert;
pub mod error;
pub mod matrix;
pub mod page;
pub mod point;
pub mod rect;
