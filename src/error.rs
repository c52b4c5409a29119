use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised at construction boundaries.
///
/// The resolution cycle itself is total: empty series, degenerate price
/// ranges, and out-of-bounds interaction all resolve by policy instead of
/// erroring.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
