use shared::domain::UnknownHeading;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("invalid command '{symbol}' at position {index}, expected one of f, b, l, r")]
    InvalidCommand { symbol: char, index: usize },
    #[error(transparent)]
    InvalidHeading(#[from] UnknownHeading),
}
