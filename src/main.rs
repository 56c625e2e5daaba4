mod render;   // ASCII board output
mod repl;     // interactive board session
mod settings; // configuration loaded through the `config` crate

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use chessline_board::{Board, Session};
use chessline_raster::{try_raster_line, Path};

/// Rasterized lines between tiles of a chessboard.
#[derive(Parser, Debug)]
#[command(name = "chessline", version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = settings::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cells of the line between two grid points
    #[command(allow_negative_numbers = true)]
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,

        /// Print the path as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Pick tiles on a text board, one command per line (default)
    Board,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = settings::load_settings(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.log.filter)
            .with_context(|| format!("invalid log filter `{}`", cfg.log.filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(config = %args.config.display(), "chessline started");
    debug!(?cfg, "Loaded configuration");

    match args.command.unwrap_or(Command::Board) {
        Command::Line { x0, y0, x1, y1, json } => {
            let path = try_raster_line((x0, y0), (x1, y1)).context("cannot rasterize line")?;
            debug!(cells = path.len(), "Line rasterized");
            if json {
                println!("{}", path_json(&path)?);
            } else {
                println!("{}", path);
            }
        }
        Command::Board => {
            let board = Board::new(cfg.board.grid_size).context("invalid [board] settings")?;
            run_board(board, &cfg.render).await?;
        }
    }

    Ok(())
}

/// JSON form of a path: an array of `{"x", "y"}` objects, start first.
fn path_json(path: &Path) -> Result<String> {
    serde_json::to_string(path).context("failed to encode path as JSON")
}

async fn run_board(board: Board, render_settings: &settings::RenderSettings) -> Result<()> {
    let commands = repl::spawn_stdin_reader()?;
    let session = repl::run_board_session(
        Session::new(board),
        render_settings,
        commands,
        tokio::io::stdout(),
        ctrl_c(),
    )
    .await?;
    info!(segments = session.segments().len(), "Session closed");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves.
async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessline_raster::raster_line;

    #[test]
    fn test_path_json_is_array_of_points() {
        let path = raster_line((1, 2).into(), (3, 5).into());
        assert_eq!(
            path_json(&path).unwrap(),
            r#"[{"x":1,"y":2},{"x":2,"y":3},{"x":2,"y":4},{"x":3,"y":5}]"#
        );
    }

    #[test]
    fn test_path_json_single_cell() {
        let path = raster_line((-4, 0).into(), (-4, 0).into());
        assert_eq!(path_json(&path).unwrap(), r#"[{"x":-4,"y":0}]"#);
    }
}
