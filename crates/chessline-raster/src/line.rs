//! Bresenham's line algorithm over the integer lattice.
//!
//! https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm#All_cases

use core::iter::FusedIterator;

use crate::error::RasterError;
use crate::point::{GridPoint, Path};

/// Lazy walk over the cells of the segment from `start` to `end`, both
/// inclusive.
///
/// A single error term handles every octant: `sx`/`sy` carry the direction,
/// and at each step the doubled error decides independently whether x
/// advances (`e2 > -dy`) and whether y advances (`e2 < dx`). At least one of
/// the two always holds, so every step makes progress.
#[derive(Debug, Clone)]
pub struct RasterLine {
    current: GridPoint,
    end: GridPoint,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    error: i64,
    done: bool,
}

impl RasterLine {
    /// Starts a walk from `start` towards `end`.
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        // Widened so that endpoints at opposite ends of i32 cannot overflow.
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        let sx = if start.x < end.x { 1 } else { -1 };
        let sy = if start.y < end.y { 1 } else { -1 };

        RasterLine {
            current: start,
            end,
            dx,
            dy,
            sx,
            sy,
            error: dx - dy,
            done: false,
        }
    }

    /// The target cell of the walk.
    pub fn end(&self) -> GridPoint {
        self.end
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        let steps = self.current.chebyshev_distance(self.end);
        usize::try_from(steps)
            .ok()
            .and_then(|s| s.checked_add(1))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for RasterLine {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.error;
        if e2 > -self.dy {
            self.error -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.error += self.dx;
            self.current.y += self.sy;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl FusedIterator for RasterLine {}

/// Rasterizes the segment from `start` to `end` into a newly allocated
/// [`Path`].
///
/// The result begins with `start`, ends with `end`, and has exactly
/// `max(|dx|, |dy|) + 1` cells. Swapping the endpoints gives a path of the
/// same length and endpoints, but not necessarily the reversed sequence.
///
/// # Examples
///
/// ```
/// use chessline_raster::{raster_line, GridPoint};
///
/// let path = raster_line(GridPoint::new(1, 2), GridPoint::new(3, 5));
/// assert_eq!(
///     path.points(),
///     &[
///         GridPoint::new(1, 2),
///         GridPoint::new(2, 3),
///         GridPoint::new(2, 4),
///         GridPoint::new(3, 5),
///     ]
/// );
/// ```
pub fn raster_line(start: GridPoint, end: GridPoint) -> Path {
    Path::from_points(RasterLine::new(start, end).collect())
}

/// Like [`raster_line`], for coordinates that arrive as floats.
///
/// Both endpoints are validated before any cell is computed.
///
/// # Errors
///
/// Returns `Err(RasterError::InvalidInput)` if any coordinate is non-finite,
/// fractional, or outside the `i32` range.
pub fn try_raster_line(start: (f64, f64), end: (f64, f64)) -> Result<Path, RasterError> {
    let start = GridPoint::try_from_f64(start.0, start.1)?;
    let end = GridPoint::try_from_f64(end.0, end.1)?;
    Ok(raster_line(start, end))
}
