//! Grid-subsystem error type.

use thiserror::Error;

use gw_core::GridCoord;

/// Errors produced while building a [`GridMap`](crate::GridMap).
///
/// Planning never fails: an unreachable goal is an empty
/// [`Route`](crate::Route), not an error.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid cell size {0} (must be finite and > 0)")]
    InvalidCellSize(f32),

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(GridCoord),

    #[error("ASCII map line {line}: {reason}")]
    Ascii { line: usize, reason: String },
}

pub type GridResult<T> = Result<T, GridError>;
