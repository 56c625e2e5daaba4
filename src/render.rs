//! ASCII rendering of a board session.

use chessline_board::{Segment, Session, TileShade, TileView};
use chessline_raster::GridPoint;

use crate::settings::RenderSettings;

/// Glyph for one tile: endpoints win over path highlights, which win over
/// the checkered shade.
pub fn glyph(view: TileView) -> char {
    if view.marked {
        '@'
    } else if view.highlighted {
        '*'
    } else {
        match view.shade {
            TileShade::Dark => '#',
            TileShade::Light => '.',
        }
    }
}

/// Render the board with y growing upwards.
pub fn render_board(session: &Session, settings: &RenderSettings) -> String {
    let h = session.board().half_extent();
    let mut output = String::new();

    if settings.axis_labels {
        output.push_str("    ");
        for x in -h..=h {
            output.push_str(&format!("{:>3}", x));
        }
        output.push('\n');
    }

    for y in (-h..=h).rev() {
        if settings.axis_labels {
            output.push_str(&format!("{:>3} ", y));
        }
        let row: Vec<String> = (-h..=h)
            .filter_map(|x| session.tile(GridPoint::new(x, y)))
            .map(|view| glyph(view).to_string())
            .collect();
        if settings.axis_labels {
            for cell in &row {
                output.push_str(&format!("{:>3}", cell));
            }
        } else {
            output.push_str(&row.join(" "));
        }
        output.push('\n');
    }

    output
}

/// Describe a completed segment: the exact reference line and its cells.
pub fn render_segment(segment: &Segment) -> String {
    format!(
        "Segment {} -> {} ({} cells)\n  {}\n",
        segment.start,
        segment.end,
        segment.path.len(),
        segment.path
    )
}
