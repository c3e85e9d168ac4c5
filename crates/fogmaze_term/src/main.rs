//! fogmaze - terminal maze runner
//!
//! Draws the maze at a fixed frame rate and reads moves from stdin, one line
//! at a time (`w`/`a`/`s`/`d`, arrow keys, or `up`/`down`/`left`/`right`,
//! followed by Enter). `q` quits.
//!
//! Storage locations:
//! - Linux: ~/.local/share/fogmaze/
//! - Windows: %APPDATA%\fogmaze\
//! - MacOS: ~/Library/Application Support/fogmaze/

use std::path::PathBuf;
use std::process;

use fogmaze::leaderboard::Leaderboard;
use futures::StreamExt;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::time::MissedTickBehavior;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{error, info};

mod error;
mod input;
mod paths;
mod render;
mod session;
mod settings;

use error::AppError;
use paths::AppPaths;
use session::{Phase, Session};
use settings::AppConfig;

/// Longest accepted input line.
const MAX_LINE: usize = 4096;

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    command: String,
}

fn usage() -> ! {
    eprintln!("fogmaze - find the exit through the fog");
    eprintln!("Usage: fogmaze [--seed N] [--config PATH] [--data-dir PATH] [command]\n");
    eprintln!("Commands:");
    eprintln!("  play      Start a run (default)");
    eprintln!("  scores    Show the leaderboard");
    eprintln!("  paths     Show data directory, config and leaderboard paths");
    eprintln!("  help      Show this message\n");
    eprintln!("In play: type w/a/s/d (or arrows, or up/down/left/right) then Enter; q quits.");
    process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        command: "play".to_string(),
        ..Args::default()
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let v = it.next().unwrap_or_else(|| usage());
                args.seed = Some(v.parse().unwrap_or_else(|_| {
                    eprintln!("--seed expects an unsigned integer, got {v:?}");
                    process::exit(1);
                }));
            }
            "--config" => args.config = Some(it.next().unwrap_or_else(|| usage()).into()),
            "--data-dir" => args.data_dir = Some(it.next().unwrap_or_else(|| usage()).into()),
            "-h" | "--help" | "help" => usage(),
            "play" | "scores" | "paths" => args.command = arg,
            _ => {
                eprintln!("Unknown argument: {arg}");
                usage();
            }
        }
    }
    args
}

async fn draw(out: &mut Stdout, text: &str) -> Result<(), AppError> {
    // Home the cursor and clear below instead of clearing the whole screen.
    out.write_all(b"\x1b[H").await?;
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n\x1b[J").await?;
    out.flush().await?;
    Ok(())
}

async fn play(mut session: Session, config: &AppConfig) -> Result<(), AppError> {
    let mut out = tokio::io::stdout();
    let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new_with_max_length(MAX_LINE));
    let mut ticker = tokio::time::interval(config.frame_period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    out.write_all(b"\x1b[2J").await?;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if session.phase() == Phase::Playing {
                    draw(&mut out, &session.frame()).await?;
                }
            }
            line = lines.next() => {
                let Some(line) = line else {
                    info!("Input closed");
                    break;
                };
                let Some(line) = input::accept_line(line)? else {
                    continue;
                };

                match session.phase() {
                    Phase::Playing => {
                        for key in input::parse_line(&line) {
                            if !session.handle_key(key) {
                                return Ok(());
                            }
                        }
                        if let Phase::AwaitingName { elapsed } = session.phase() {
                            let mut text = session.frame();
                            text.push_str(&format!(
                                "\n\nCongratulations! Finished in {} (maze seed {}).\nEnter your name for the leaderboard [Anonymous]:",
                                fogmaze::time::format_elapsed(elapsed),
                                session.seed()
                            ));
                            draw(&mut out, &text).await?;
                        }
                    }
                    Phase::AwaitingName { .. } => {
                        let rank = session.submit_name(&line);
                        let mut text = String::new();
                        match rank {
                            Some(r) => text.push_str(&format!("You placed #{r}.\n\n")),
                            None => text.push_str("Not fast enough for the leaderboard this time.\n\n"),
                        }
                        text.push_str(&render::draw_leaderboard(session.leaderboard()));
                        text.push('\n');
                        out.write_all(text.as_bytes()).await?;
                        out.flush().await?;
                        return Ok(());
                    }
                    Phase::Done => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stderr, so frames on stdout stay intact)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = parse_args();

    let paths = match args.data_dir {
        Some(dir) => AppPaths::at(dir)?,
        None => AppPaths::new()?,
    };
    info!("Data directory: {:?}", paths.data_dir());

    let config_path = args.config.unwrap_or_else(|| paths.config_file());
    let (mut config, found) = AppConfig::load(&config_path)?;
    if found {
        info!("Loaded settings from {:?}", config_path);
    } else {
        info!("No settings at {:?}; using defaults", config_path);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Err(e) = config.maze.validate() {
        error!("{}", e);
        return Err(AppError::from(e).into());
    }

    let board_path = paths.leaderboard_file();
    let leaderboard = Leaderboard::load(&board_path, config.maze.leaderboard_size)?;

    match args.command.as_str() {
        "scores" => {
            println!("{}", render::draw_leaderboard(&leaderboard));
        }
        "paths" => {
            println!("data dir:    {}", paths.data_dir().display());
            println!("config:      {}", config_path.display());
            println!("leaderboard: {}", board_path.display());
        }
        _ => {
            let session = Session::new(&config, leaderboard, board_path)?;
            play(session, &config).await?;
        }
    }

    Ok(())
}
