//! Lattice points and the paths built from them.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// A cell of the unbounded integer lattice.
///
/// Any bounding (a board, a map) is the caller's concern.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Builds a point from floating coordinates, rejecting anything that is
    /// not an exact integer representable as `i32`.
    ///
    /// # Errors
    ///
    /// Returns `Err(RasterError::InvalidInput)` for NaN, infinite, fractional
    /// or out-of-range values.
    pub fn try_from_f64(x: f64, y: f64) -> Result<Self, RasterError> {
        Ok(Self::new(coordinate_from_f64(x)?, coordinate_from_f64(y)?))
    }

    /// Number of king moves between `self` and `other`, i.e. `max(|dx|, |dy|)`.
    #[must_use]
    pub fn chebyshev_distance(self, other: GridPoint) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        dx.max(dy)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn coordinate_from_f64(value: f64) -> Result<i32, RasterError> {
    if !value.is_finite() {
        return Err(RasterError::InvalidInput("coordinate must be finite"));
    }
    if libm::trunc(value) != value {
        return Err(RasterError::InvalidInput("coordinate must be an integer"));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(RasterError::InvalidInput("coordinate out of i32 range"));
    }
    Ok(value as i32)
}

/// The rasterized cells of a segment, start and end inclusive.
///
/// A `Path` is never empty: a degenerate segment yields its single point.
/// Consecutive cells differ by at most one unit on each axis and are never
/// equal.
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<GridPoint>);

/// Accepts only sequences that satisfy the `Path` invariants: at least one
/// cell, and unit steps between neighbors.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let points = Vec::<GridPoint>::deserialize(deserializer)?;
        if points.is_empty() {
            return Err(D::Error::invalid_length(0, &"at least one point"));
        }
        if let Some(step) = points.windows(2).find(|w| w[0].chebyshev_distance(w[1]) != 1) {
            return Err(D::Error::custom(format_args!(
                "cells {} and {} are not neighbors",
                step[0], step[1]
            )));
        }
        Ok(Path(points))
    }
}

impl Path {
    pub(crate) fn from_points(points: Vec<GridPoint>) -> Self {
        debug_assert!(!points.is_empty());
        Path(points)
    }

    /// First cell of the path.
    pub fn start(&self) -> GridPoint {
        self.0[0]
    }

    /// Last cell of the path.
    pub fn end(&self) -> GridPoint {
        self.0[self.0.len() - 1]
    }

    /// The cells in start-to-end order.
    pub fn points(&self) -> &[GridPoint] {
        &self.0
    }

    /// Consumes the path, returning the underlying cells.
    pub fn into_vec(self) -> Vec<GridPoint> {
        self.0
    }
}

impl Deref for Path {
    type Target = [GridPoint];

    fn deref(&self) -> &[GridPoint] {
        &self.0
    }
}

impl From<Path> for Vec<GridPoint> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl IntoIterator for Path {
    type Item = GridPoint;
    type IntoIter = alloc::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a GridPoint;
    type IntoIter = core::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}
