//! Selection state for a board: pick two tiles, get the rasterized path
//! between them highlighted.

#![warn(missing_docs)]

use std::collections::HashSet;

use chessline_raster::{raster_line, GridPoint, Path};
use tracing::{debug, info};

use crate::board::{Board, TileShade};
use crate::error::BoardError;

/// A completed selection: the two picked endpoints and the cells between them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// First picked tile.
    pub start: GridPoint,
    /// Second picked tile.
    pub end: GridPoint,
    /// Rasterized cells from `start` to `end`, inclusive.
    pub path: Path,
}

/// Where the session is in the two-pick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No endpoint picked yet.
    #[default]
    AwaitingFirst,
    /// One endpoint picked; the next pick closes the segment.
    AwaitingSecond {
        /// The endpoint picked first.
        first: GridPoint,
    },
}

/// Result of a successful [`Session::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The tile was marked as the first endpoint.
    FirstMarked(GridPoint),
    /// The tile closed a segment, which is now highlighted.
    SegmentCompleted(Segment),
}

/// What a renderer needs to know about one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    /// Checkered base shade.
    pub shade: TileShade,
    /// Picked as an endpoint.
    pub marked: bool,
    /// Covered by the path of some segment.
    pub highlighted: bool,
}

/// Selection state over one board.
///
/// Marks and highlights accumulate across segments until [`Session::reset`].
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    selection: Selection,
    marked: HashSet<GridPoint>,
    highlighted: HashSet<GridPoint>,
    segments: Vec<Segment>,
}

impl Session {
    /// Creates an empty session on `board`.
    pub fn new(board: Board) -> Self {
        Session {
            board,
            selection: Selection::AwaitingFirst,
            marked: HashSet::new(),
            highlighted: HashSet::new(),
            segments: Vec::new(),
        }
    }

    /// The board this session plays on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current step of the two-pick cycle.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Completed segments, oldest first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether `p` was picked as an endpoint.
    pub fn is_marked(&self, p: GridPoint) -> bool {
        self.marked.contains(&p)
    }

    /// Whether `p` lies on the path of a completed segment.
    pub fn is_highlighted(&self, p: GridPoint) -> bool {
        self.highlighted.contains(&p)
    }

    /// Renderer view of the tile at `p`, or `None` if it is off the board.
    pub fn tile(&self, p: GridPoint) -> Option<TileView> {
        let shade = self.board.shade(p).ok()?;
        Some(TileView {
            shade,
            marked: self.is_marked(p),
            highlighted: self.is_highlighted(p),
        })
    }

    /// Picks the tile at `p`.
    ///
    /// The first pick marks the tile. The second marks it too and rasterizes
    /// the segment from the first pick, then the cycle starts over.
    ///
    /// # Errors
    ///
    /// Returns `Err(BoardError::OutOfBounds)` if `p` is off the board; the
    /// session is left unchanged.
    pub fn select(&mut self, p: GridPoint) -> Result<SelectOutcome, BoardError> {
        if !self.board.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }

        self.marked.insert(p);
        match self.selection {
            Selection::AwaitingFirst => {
                debug!(tile = %p, "First endpoint marked");
                self.selection = Selection::AwaitingSecond { first: p };
                Ok(SelectOutcome::FirstMarked(p))
            }
            Selection::AwaitingSecond { first } => {
                let path = raster_line(first, p);
                debug!(start = %first, end = %p, cells = path.len(), "Segment rasterized");
                self.highlighted.extend(path.iter().copied());

                let segment = Segment {
                    start: first,
                    end: p,
                    path,
                };
                self.segments.push(segment.clone());
                self.selection = Selection::AwaitingFirst;
                Ok(SelectOutcome::SegmentCompleted(segment))
            }
        }
    }

    /// Picks a tile given floating coordinates, as produced by a picking layer.
    ///
    /// # Errors
    ///
    /// Returns `Err(BoardError::Raster)` for non-integer or non-finite input and
    /// `Err(BoardError::OutOfBounds)` for tiles off the board. Either way the
    /// session is left unchanged.
    pub fn select_f64(&mut self, x: f64, y: f64) -> Result<SelectOutcome, BoardError> {
        let p = GridPoint::try_from_f64(x, y)?;
        self.select(p)
    }

    /// Clears every mark and segment and waits for a first pick again.
    pub fn reset(&mut self) {
        info!(segments = self.segments.len(), marked = self.marked.len(), "Session reset");
        self.selection = Selection::AwaitingFirst;
        self.marked.clear();
        self.highlighted.clear();
        self.segments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessline_raster::RasterError;

    fn session() -> Session {
        Session::new(Board::new(20).unwrap())
    }

    #[test]
    fn test_first_pick_marks_tile() {
        let mut s = session();
        let p = GridPoint::new(1, 2);
        assert_eq!(s.select(p), Ok(SelectOutcome::FirstMarked(p)));
        assert_eq!(s.selection(), Selection::AwaitingSecond { first: p });
        assert!(s.is_marked(p));
        assert!(!s.is_highlighted(p));
        assert!(s.segments().is_empty());
    }

    #[test]
    fn test_second_pick_completes_segment() {
        let mut s = session();
        s.select(GridPoint::new(1, 2)).unwrap();
        let outcome = s.select(GridPoint::new(3, 5)).unwrap();

        let SelectOutcome::SegmentCompleted(segment) = outcome else {
            panic!("expected a completed segment, got {:?}", outcome);
        };
        assert_eq!(segment.start, GridPoint::new(1, 2));
        assert_eq!(segment.end, GridPoint::new(3, 5));
        assert_eq!(
            segment.path.points(),
            &[
                GridPoint::new(1, 2),
                GridPoint::new(2, 3),
                GridPoint::new(2, 4),
                GridPoint::new(3, 5),
            ]
        );

        assert_eq!(s.selection(), Selection::AwaitingFirst);
        assert_eq!(s.segments(), &[segment]);
        assert!(s.is_highlighted(GridPoint::new(2, 4)));
        assert!(s.is_marked(GridPoint::new(3, 5)));
        assert!(!s.is_marked(GridPoint::new(2, 4)));
    }

    #[test]
    fn test_segments_accumulate_until_reset() {
        let mut s = session();
        s.select(GridPoint::new(-10, -10)).unwrap();
        s.select(GridPoint::new(10, 10)).unwrap();
        s.select(GridPoint::new(-10, 10)).unwrap();
        s.select(GridPoint::new(10, -10)).unwrap();

        assert_eq!(s.segments().len(), 2);
        assert!(s.is_highlighted(GridPoint::new(5, 5)));
        assert!(s.is_highlighted(GridPoint::new(5, -5)));
        assert!(s.is_highlighted(GridPoint::new(0, 0)));

        s.reset();
        assert_eq!(s.selection(), Selection::AwaitingFirst);
        assert!(s.segments().is_empty());
        assert!(!s.is_highlighted(GridPoint::new(0, 0)));
        assert!(!s.is_marked(GridPoint::new(-10, -10)));
    }

    #[test]
    fn test_reset_mid_selection_drops_first_pick() {
        let mut s = session();
        s.select(GridPoint::new(4, 4)).unwrap();
        s.reset();
        assert_eq!(s.selection(), Selection::AwaitingFirst);
        assert_eq!(
            s.select(GridPoint::new(0, 1)),
            Ok(SelectOutcome::FirstMarked(GridPoint::new(0, 1)))
        );
    }

    #[test]
    fn test_out_of_bounds_leaves_state_unchanged() {
        let mut s = session();
        s.select(GridPoint::new(0, 0)).unwrap();

        let off = GridPoint::new(11, 0);
        assert_eq!(s.select(off), Err(BoardError::OutOfBounds(off)));
        assert_eq!(s.selection(), Selection::AwaitingSecond { first: GridPoint::new(0, 0) });
        assert!(!s.is_marked(off));
    }

    #[test]
    fn test_select_f64_rejects_fractional_input() {
        let mut s = session();
        assert_eq!(
            s.select_f64(1.5, 0.0),
            Err(BoardError::Raster(RasterError::InvalidInput("coordinate must be an integer")))
        );
        assert_eq!(s.selection(), Selection::AwaitingFirst);
        assert_eq!(
            s.select_f64(2.0, -3.0),
            Ok(SelectOutcome::FirstMarked(GridPoint::new(2, -3)))
        );
    }

    #[test]
    fn test_same_tile_twice_gives_single_cell_segment() {
        let mut s = session();
        let p = GridPoint::new(-3, 7);
        s.select(p).unwrap();
        let SelectOutcome::SegmentCompleted(segment) = s.select(p).unwrap() else {
            panic!("expected a completed segment");
        };
        assert_eq!(segment.path.points(), &[p]);
    }

    #[test]
    fn test_every_path_tile_is_on_the_board() {
        let mut s = session();
        let corners = [(-10, -10), (10, 3), (-7, 10), (10, -10), (0, 0), (-10, 1)];
        for &a in &corners {
            for &b in &corners {
                s.select(a.into()).unwrap();
                let SelectOutcome::SegmentCompleted(segment) = s.select(b.into()).unwrap() else {
                    panic!("expected a completed segment");
                };
                assert!(segment.path.iter().all(|&p| s.board().contains(p)));
            }
        }
    }

    #[test]
    fn test_tile_view() {
        let mut s = session();
        s.select(GridPoint::new(0, 0)).unwrap();
        s.select(GridPoint::new(2, 0)).unwrap();

        assert_eq!(
            s.tile(GridPoint::new(0, 0)),
            Some(TileView { shade: TileShade::Dark, marked: true, highlighted: true })
        );
        assert_eq!(
            s.tile(GridPoint::new(1, 0)),
            Some(TileView { shade: TileShade::Light, marked: false, highlighted: true })
        );
        assert_eq!(
            s.tile(GridPoint::new(1, 1)),
            Some(TileView { shade: TileShade::Dark, marked: false, highlighted: false })
        );
        assert_eq!(s.tile(GridPoint::new(0, 11)), None);
    }
}
