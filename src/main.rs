//! Goshape command line.
//!
//! ## Usage
//!
//! - `goshape --size 9 --moves "B E5, W C3"` - Show the board and its groups
//! - `goshape --size 9 --moves "B E5, W C3" analyze D5` - Classify a move
//!
//! Coordinates use letters A-Z without I for columns and row 1 at the bottom.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use goshape::analysis::analyze_move;
use goshape::board::Color;
use goshape::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use goshape::position::parse_coord;
use goshape::record::{GameRecord, Replay, parse_moves, parse_points};

/// Goshape: Go board state and move classification
#[derive(Parser)]
#[command(name = "goshape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GameArgs {
    /// Board size
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Black setup (handicap) stones, e.g. "D4,Q16"
    #[arg(long, default_value = "")]
    black: String,

    /// White setup stones
    #[arg(long, default_value = "")]
    white: String,

    /// Moves in order, e.g. "B D4, W Q16, B pass"
    #[arg(long, default_value = "")]
    moves: String,

    /// Player to move first (default: Black, or White when there are black setup stones)
    #[arg(long, value_enum)]
    player: Option<Side>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board and every group with its liberties
    Summary,
    /// Classify a candidate move for the player to move
    Analyze {
        /// The move to analyze, e.g. "D4"
        vertex: String,
        /// Analyze for this color instead of the player to move
        #[arg(long, value_enum)]
        color: Option<Side>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    #[value(alias = "b")]
    Black,
    #[value(alias = "w")]
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be between {MIN_SIZE} and {MAX_SIZE}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let record = build_record(&cli.game)?;
    let replay = record.replay();
    if let Some((index, err)) = &replay.halted {
        eprintln!("Warning: move {} could not be played ({err}); showing the position before it.", index + 1);
    }

    match cli.command {
        Some(Commands::Analyze { vertex, color }) => run_analyze(&replay, &vertex, color),
        Some(Commands::Summary) | None => {
            run_summary(&replay);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_record(args: &GameArgs) -> Result<GameRecord> {
    let mut record = GameRecord::new(args.size);
    record.setup_black = parse_points(&args.black, args.size).context("bad --black stones")?;
    record.setup_white = parse_points(&args.white, args.size).context("bad --white stones")?;
    record.moves = parse_moves(&args.moves, args.size).context("bad --moves list")?;
    record.first_player = args.player.map(Color::from);
    Ok(record)
}

fn run_summary(replay: &Replay) {
    let pos = &replay.position;
    println!("--- Final Board Summary ---");
    println!("{}", pos.board());
    print!("{}", pos.summary());
}

fn run_analyze(replay: &Replay, vertex: &str, color: Option<Side>) -> Result<()> {
    let pos = &replay.position;
    let pt = parse_coord(vertex, pos.size()).with_context(|| format!("cannot read move '{vertex}'"))?;
    let color = color.map_or(replay.next_player, Color::from);

    println!("--- Board State Before Move ---");
    println!("{}", pos.board().render(Some(pt)));
    println!(
        "--- Analyzing Move for {color}: {} (internal coords: r={}, c={}) ---",
        vertex.to_ascii_uppercase(),
        pt.0,
        pt.1
    );

    let analysis = analyze_move(pos, pt, color).with_context(|| format!("cannot play {vertex}"))?;
    print!("{analysis}");
    Ok(())
}
