//! Board model and selection session for the chessline demo.
//!
//! A [`Board`] is a square, origin-centered grid of checkered tiles. A
//! [`Session`] tracks the two-pick selection cycle on it: each pair of picks
//! is rasterized with [`chessline_raster::raster_line`] and the resulting
//! cells stay highlighted until the session is reset.

pub mod board;
pub mod error;
pub mod session;

pub use board::{Board, TileShade};
pub use error::BoardError;
pub use session::{SelectOutcome, Segment, Selection, Session, TileView};

pub use chessline_raster::{GridPoint, Path};
