// error.rs - Error kinds reported by the grid and the controller

use thiserror::Error;

/// Recoverable input-validation failures. None of these are fatal; callers
/// report or ignore them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: usize, height: usize },
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimension { width: usize, height: usize },
    #[error("tick interval must be greater than zero")]
    InvalidInterval,
}

pub type Result<T> = std::result::Result<T, LifeError>;
