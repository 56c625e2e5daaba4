//! Board geometry: square bounds around the origin, checkered tile shades
//! and their colors.

#![warn(missing_docs)]

use chessline_raster::GridPoint;

use crate::error::BoardError;

/// Checkered shade of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileShade {
    /// Tiles whose coordinate sum is even, including the origin.
    Dark,
    /// Tiles whose coordinate sum is odd.
    Light,
}

impl TileShade {
    /// Shade of the tile at `p` on an unbounded checkerboard.
    pub fn at(p: GridPoint) -> Self {
        if (i64::from(p.x) + i64::from(p.y)).rem_euclid(2) == 0 {
            TileShade::Dark
        } else {
            TileShade::Light
        }
    }

    /// Display color as `0xRRGGBB`.
    pub const fn rgb(self) -> u32 {
        match self {
            TileShade::Dark => 0x0b2c1a,
            TileShade::Light => 0x9f6f27,
        }
    }
}

impl std::fmt::Display for TileShade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileShade::Dark => write!(f, "Dark"),
            TileShade::Light => write!(f, "Light"),
        }
    }
}

/// A square board centered on the origin.
///
/// A board of grid size `n` spans `-n/2 ..= n/2` on both axes, so it holds
/// `(n + 1)²` tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    /// Distance in squares from one edge to the other.
    grid_size: u32,
    /// Largest coordinate on either axis.
    half_extent: i32,
    /// Total number of tiles.
    tile_count: usize,
}

impl Board {
    /// Creates a new board.
    ///
    /// # Arguments
    /// * `grid_size` - Distance in squares between opposite edges. Must be even and non-zero.
    ///
    /// # Returns
    /// * `Result<Self, BoardError>` - The board or an error if the size is invalid
    pub fn new(grid_size: u32) -> Result<Self, BoardError> {
        if grid_size == 0 {
            return Err(BoardError::InvalidDimensions("Grid size must be non-zero"));
        }
        if grid_size % 2 != 0 {
            return Err(BoardError::InvalidDimensions("Grid size must be even"));
        }

        let side = usize::try_from(u64::from(grid_size) + 1)
            .map_err(|_| BoardError::InvalidDimensions("Board side does not fit in memory"))?;
        let tile_count = side
            .checked_mul(side)
            .ok_or(BoardError::InvalidDimensions("Board dimensions too large, would cause overflow"))?;

        Ok(Board {
            grid_size,
            // Even u32 halved always fits in i32.
            half_extent: (grid_size / 2) as i32,
            tile_count,
        })
    }

    /// Distance in squares between opposite edges.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Largest coordinate on either axis.
    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Number of tiles along one edge.
    pub fn side(&self) -> u64 {
        u64::from(self.grid_size) + 1
    }

    /// Total number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether `p` lies on the board.
    pub fn contains(&self, p: GridPoint) -> bool {
        let h = self.half_extent;
        (-h..=h).contains(&p.x) && (-h..=h).contains(&p.y)
    }

    /// Shade of the tile at `p`.
    ///
    /// # Returns
    /// * `Result<TileShade, BoardError>` - The shade or `OutOfBounds` if `p` is off the board
    pub fn shade(&self, p: GridPoint) -> Result<TileShade, BoardError> {
        if self.contains(p) {
            Ok(TileShade::at(p))
        } else {
            Err(BoardError::OutOfBounds(p))
        }
    }

    /// Every tile on the board, column by column from the lowest x, each
    /// column from the lowest y.
    pub fn tiles(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let h = self.half_extent;
        (-h..=h).flat_map(move |x| (-h..=h).map(move |y| GridPoint::new(x, y)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let h = self.half_extent;
        write!(f, "Board {}x{} ({}..={})", self.side(), self.side(), -h, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_sizes() {
        assert_eq!(
            Board::new(0),
            Err(BoardError::InvalidDimensions("Grid size must be non-zero"))
        );
        assert_eq!(
            Board::new(7),
            Err(BoardError::InvalidDimensions("Grid size must be even"))
        );
    }

    #[test]
    fn test_default_board_dimensions() {
        let board = Board::new(20).unwrap();
        assert_eq!(board.grid_size(), 20);
        assert_eq!(board.half_extent(), 10);
        assert_eq!(board.side(), 21);
        assert_eq!(board.tile_count(), 441);
        assert_eq!(board.tiles().count(), 441);
        assert_eq!(board.to_string(), "Board 21x21 (-10..=10)");
    }

    #[test]
    fn test_contains_edges() {
        let board = Board::new(20).unwrap();
        assert!(board.contains(GridPoint::new(0, 0)));
        assert!(board.contains(GridPoint::new(-10, 10)));
        assert!(board.contains(GridPoint::new(10, -10)));
        assert!(!board.contains(GridPoint::new(11, 0)));
        assert!(!board.contains(GridPoint::new(0, -11)));
        assert!(!board.contains(GridPoint::new(i32::MIN, i32::MAX)));
    }

    #[test]
    fn test_shade_parity_handles_negative_coordinates() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.shade(GridPoint::new(0, 0)), Ok(TileShade::Dark));
        assert_eq!(board.shade(GridPoint::new(1, 0)), Ok(TileShade::Light));
        assert_eq!(board.shade(GridPoint::new(-1, 0)), Ok(TileShade::Light));
        assert_eq!(board.shade(GridPoint::new(-1, -1)), Ok(TileShade::Dark));
        assert_eq!(board.shade(GridPoint::new(-2, 1)), Ok(TileShade::Light));
        assert_eq!(
            board.shade(GridPoint::new(3, 0)),
            Err(BoardError::OutOfBounds(GridPoint::new(3, 0)))
        );
    }

    #[test]
    fn test_shade_colors() {
        assert_eq!(TileShade::Dark.rgb(), 0x0b2c1a);
        assert_eq!(TileShade::Light.rgb(), 0x9f6f27);
    }

    #[test]
    fn test_tiles_order() {
        let board = Board::new(2).unwrap();
        let tiles: Vec<_> = board.tiles().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            tiles,
            vec![
                (-1, -1), (-1, 0), (-1, 1),
                (0, -1), (0, 0), (0, 1),
                (1, -1), (1, 0), (1, 1),
            ]
        );
    }
}
