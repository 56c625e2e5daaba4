#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` Bresenham line rasterizer for integer grids."]
#![doc = ""]
#![doc = "Given two lattice points, [`raster_line`] returns the inclusive sequence of cells"]
#![doc = "approximating the segment between them using only integer arithmetic and unit steps."]

extern crate alloc;

pub mod error;
pub mod line;
pub mod point;

pub use error::RasterError;
pub use line::{raster_line, try_raster_line, RasterLine};
pub use point::{GridPoint, Path};
