//! Lutefisk - headless driver for the board core.
//!
//! Sets up a position from FEN, plays moves given in UCI text and prints the
//! notation, the board, the resulting FEN and its hash.

mod config;
mod play;

use anyhow::Context;
use clap::Parser;
use config::Config;
use lutefisk_engine::Session;
use play::PlayError;
use std::path::PathBuf;

/// Lutefisk - set up a chess position and play moves on it.
#[derive(Parser)]
#[command(name = "lutefisk")]
#[command(about = "Set up a chess position and play moves on it")]
struct Args {
    /// Starting position in FEN (overrides `start_fen` from the config)
    #[arg(long)]
    fen: Option<String>,

    /// Path to the configuration file (default: lutefisk.toml, searched upwards)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the config
    #[arg(short, long)]
    verbose: bool,

    /// Report the square and piece under pixel X,Y after the moves
    #[arg(long, value_name = "X,Y", value_parser = play::parse_click)]
    click: Vec<(i32, i32)>,

    /// Moves in from-to form, e.g. e2e4 e7e5 e1g1
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, config_path) =
        Config::load(args.config.as_deref()).context("loading configuration")?;

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config.level()?
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match &config_path {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("No config file found, using defaults"),
    }

    let mut session = Session::new();
    let fen = args.fen.as_deref().unwrap_or(&config.start_fen);
    let warnings = session.set_fen(fen);
    if !warnings.is_empty() {
        tracing::warn!("FEN loaded with {} defaulted field(s)", warnings.len());
    }

    let first_color = session.turn();
    let first_fullmove = session.position().fullmove_number();

    for text in &args.moves {
        match play::play(&mut session, text) {
            Ok(notation) => tracing::info!("{}: {}", text, notation),
            Err(e @ PlayError::BadMoveText(_)) => return Err(e.into()),
            Err(e) => tracing::warn!("{} ignored: {}", text, e),
        }
    }

    if !session.moves().is_empty() {
        println!(
            "{}",
            play::movetext(session.moves(), first_color, first_fullmove)
        );
    }
    if config.show_board {
        println!("{}", session.position());
    }
    println!("{}", session.fen());
    println!(
        "hash {:016x} (seen {}x)",
        session.position().zobrist_hash(),
        session.occurrences()
    );

    for (x, y) in args.click {
        println!(
            "{}",
            play::describe_click(&session, x, y, config.square_size)
        );
    }

    Ok(())
}
