use chessline_board::{Board, GridPoint, SelectOutcome, Session};
use rand::Rng;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
        .init();

    let board = Board::new(12)?;
    let mut session = Session::new(board);
    let mut rng = rand::rng();
    let h = board.half_extent();

    for _ in 0..3 {
        for _ in 0..2 {
            let p = GridPoint::new(rng.random_range(-h..=h), rng.random_range(-h..=h));
            if let SelectOutcome::SegmentCompleted(segment) = session.select(p)? {
                info!(start = %segment.start, end = %segment.end, "Segment: {}", segment.path);
            }
        }
    }

    println!("{}", board);
    for y in (-h..=h).rev() {
        for x in -h..=h {
            let p = GridPoint::new(x, y);
            let glyph = if session.is_marked(p) {
                '@'
            } else if session.is_highlighted(p) {
                '*'
            } else {
                '.'
            };
            print!("{} ", glyph);
        }
        println!();
    }

    Ok(())
}
