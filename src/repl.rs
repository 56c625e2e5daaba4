//! Interactive text session: one command per line, board re-rendered after
//! every change.

use std::future::Future;
use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use chessline_board::{SelectOutcome, Session};

use crate::settings::RenderSettings;
use crate::render::{render_board, render_segment};

const HELP: &str = "\
Commands:
  x <X> <Y>       pick the tile at (X, Y) (alias: select)
  reset           clear every pick and highlighted path (alias: space)
  show            print the board again
  help            print this message
  quit            leave the session (alias: exit)
";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardCommand {
    Select { x: f64, y: f64 },
    Reset,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BoardCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "x" | "select" => {
            let x = parse_coordinate(words.next(), "X")?;
            let y = parse_coordinate(words.next(), "Y")?;
            BoardCommand::Select { x, y }
        }
        "reset" | "space" => BoardCommand::Reset,
        "show" => BoardCommand::Show,
        "help" | "?" => BoardCommand::Help,
        "quit" | "exit" => BoardCommand::Quit,
        other => bail!("unknown command `{}`", other),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument `{}`", extra);
    }
    Ok(Some(command))
}

fn parse_coordinate(word: Option<&str>, axis: &str) -> Result<f64> {
    let word = word.ok_or_else(|| anyhow!("missing {} coordinate", axis))?;
    word.parse::<f64>()
        .with_context(|| format!("invalid {} coordinate `{}`", axis, word))
}

/// Apply a command to the session and return the text to show. `Quit` is
/// handled by the caller.
pub fn apply_command(session: &mut Session, command: BoardCommand, settings: &RenderSettings) -> String {
    match command {
        BoardCommand::Select { x, y } => match session.select_f64(x, y) {
            Ok(SelectOutcome::FirstMarked(p)) => {
                format!("Marked {}\n{}", p, render_board(session, settings))
            }
            Ok(SelectOutcome::SegmentCompleted(segment)) => {
                format!("{}{}", render_segment(&segment), render_board(session, settings))
            }
            Err(e) => {
                warn!(x, y, "Selection skipped: {}", e);
                String::new()
            }
        },
        BoardCommand::Reset => {
            session.reset();
            format!("Board reset\n{}", render_board(session, settings))
        }
        BoardCommand::Show => render_board(session, settings),
        BoardCommand::Help => HELP.to_string(),
        BoardCommand::Quit => String::new(),
    }
}

/// Read stdin line by line on a detached thread.
///
/// The channel closes at end of input or on a read error. The thread is never
/// joined, so a pending read does not hold up process exit.
pub fn spawn_stdin_reader() -> Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        break;
                    }
                }
            }
            debug!("Stdin reader stopped");
        })
        .context("failed to spawn stdin reader")?;
    Ok(rx)
}

/// Run the session until `quit`, end of input, or `shutdown` completes.
/// Returns the final session state.
pub async fn run_board_session<W, F>(
    mut session: Session,
    settings: &RenderSettings,
    mut commands: mpsc::Receiver<String>,
    mut output: W,
    shutdown: F,
) -> Result<Session>
where
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    info!(board = %session.board(), "Board session started");
    tokio::pin!(shutdown);

    let intro = format!("{}{}", HELP, render_board(&session, settings));
    output.write_all(intro.as_bytes()).await?;
    output.flush().await?;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, ending board session");
                break;
            }
            line = commands.recv() => {
                let Some(line) = line else {
                    info!("Input closed, ending board session");
                    break;
                };

                let command = match parse_command(&line) {
                    Ok(Some(BoardCommand::Quit)) => break,
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        warn!("Skipping `{}`: {:#}", line.trim(), e);
                        continue;
                    }
                };

                let text = apply_command(&mut session, command, settings);
                output.write_all(text.as_bytes()).await?;
                output.flush().await?;
            }
        }
    }

    info!(segments = session.segments().len(), "Board session finished");
    Ok(session)
}
