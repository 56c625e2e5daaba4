//! This module defines the error types used by the `chessline-board` crate.

#![warn(missing_docs)]

use chessline_raster::{GridPoint, RasterError};

/// Error type for board and session operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Error for invalid board dimensions.
    /// Returned when the grid size is zero or odd.
    InvalidDimensions(&'static str),
    /// Error for a tile outside the board.
    /// Returned when selecting or querying a tile beyond the board edge.
    OutOfBounds(GridPoint),
    /// Error for coordinates rejected by the rasterizer.
    Raster(RasterError),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions(msg) => write!(f, "Invalid board dimensions: {}", msg),
            BoardError::OutOfBounds(p) => write!(f, "Tile {} is outside the board", p),
            BoardError::Raster(e) => write!(f, "{}", e),
        }
    }
}

impl core::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            BoardError::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for BoardError {
    fn from(e: RasterError) -> Self {
        BoardError::Raster(e)
    }
}
