//! Weiqi: a Go rule engine.
//!
//! ## Usage
//!
//! - `weiqi` - Run a random self-play demo
//! - `weiqi gtp` - Start a GTP server on stdin/stdout
//! - `weiqi demo --seed 7` - Run a reproducible demo

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use weiqi::board::Color;
use weiqi::constants::{DEFAULT_PLAYOUT_MOVES, DEFAULT_SIZE};
use weiqi::gtp::{format_vertex, GtpEngine};
use weiqi::playout::random_playout;
use weiqi::session::GameSession;

/// Weiqi: a deterministic Go rule engine
#[derive(Parser)]
#[command(name = "weiqi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size (1 to 25)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
    /// Play random legal moves and print the result
    Demo {
        /// Board size (1 to 25)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Number of actions (placements or passes)
        #[arg(long, default_value_t = DEFAULT_PLAYOUT_MOVES)]
        moves: usize,
        /// RNG seed; a random one is used if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let mut engine = GtpEngine::new(size)?;
            let stdin = io::stdin();
            engine
                .run(stdin.lock(), io::stdout())
                .context("GTP session failed")?;
        }
        Some(Commands::Demo { size, moves, seed }) => run_demo(size, moves, seed)?,
        None => run_demo(DEFAULT_SIZE, DEFAULT_PLAYOUT_MOVES, None)?,
    }
    Ok(())
}

/// Diagnostics go to stderr; stdout carries protocol responses.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(size: usize, moves: usize, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Weiqi: random self-play on {size}x{size} (seed {seed})\n");

    let mut session = GameSession::new(size)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let summary = random_playout(&mut session, &mut rng, moves)?;

    let snapshot = session.snapshot();
    println!("{}", snapshot.board);
    println!(
        "Placements: {}  Passes: {}  Rejected candidates: {}",
        summary.placements, summary.passes, summary.rejections
    );
    println!(
        "Captures: black {}  white {}",
        snapshot.captures.get(Color::Black),
        snapshot.captures.get(Color::White)
    );
    let last = snapshot
        .last_move
        .map(|pt| format_vertex(pt, size))
        .unwrap_or_else(|| "none".to_string());
    println!("Last move: {last}  To move: {}", snapshot.current_player);
    Ok(())
}
