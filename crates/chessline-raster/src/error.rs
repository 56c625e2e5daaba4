#![warn(missing_docs)]

//! Error types for the raster library.

use core::fmt;

/// Errors that can occur when building a line from untrusted coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// A coordinate was NaN, infinite, fractional, or outside the `i32` range.
    /// Returned before any cell is computed.
    InvalidInput(&'static str),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl core::error::Error for RasterError {}
