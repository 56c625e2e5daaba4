use chessline_raster::*;

fn main() {
    let start = GridPoint::new(2, 2);
    let end = GridPoint::new(-3, -4);

    let path = raster_line(start, end);
    println!("Line {} -> {} ({} cells):", start, end, path.len());
    for (i, p) in path.iter().enumerate() {
        println!("  {:>2}: {}", i, p);
    }

    let reversed = raster_line(end, start);
    println!("\nSwapped endpoints: {}", reversed);

    // Plot both on a small grid, y growing upwards.
    println!("\nForward (F), swapped (S), shared (#):");
    for y in (-5..=3).rev() {
        let mut row = String::new();
        for x in -4..=3 {
            let p = GridPoint::new(x, y);
            let glyph = match (path.contains(&p), reversed.contains(&p)) {
                (true, true) => '#',
                (true, false) => 'F',
                (false, true) => 'S',
                (false, false) => '.',
            };
            row.push(glyph);
            row.push(' ');
        }
        println!("{:>3} {}", y, row);
    }

    match try_raster_line((0.0, 0.0), (2.5, 1.0)) {
        Ok(path) => println!("\nUnexpected path: {}", path),
        Err(e) => eprintln!("\nRejected fractional endpoint: {}", e),
    }
}
