//! Command-line entry point.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cardring::{CardGame, FileOutput, GameOptions, Pack, console};

/// Plays the ring card game and writes one output file per player and deck.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of players. Asked for on the console if omitted.
    #[arg(short = 'n', long)]
    players: Option<usize>,

    /// Pack file with one card value per line. Asked for on the console if
    /// omitted or invalid.
    #[arg(short, long, conflicts_with = "generate")]
    pack: Option<PathBuf>,

    /// Deal a shuffled pack generated from this seed instead of reading one.
    #[arg(short, long, value_name = "SEED")]
    generate: Option<u64>,

    /// Directory the output files are written to.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Abandon the game once any player has taken this many turns.
    #[arg(long)]
    turn_limit: Option<u64>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "cardring=debug" } else { "cardring=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let players = match args.players {
        Some(0) | None => console::read_player_count(&mut input, &mut stdout)?,
        Some(players) => players,
    };
    let pack = match args.generate {
        Some(seed) => Pack::generate(players, seed),
        None => console::read_valid_pack(&mut input, &mut stdout, players, args.pack)?,
    };

    let output = FileOutput::new(&args.output_dir).with_context(|| {
        format!("could not create output directory {}", args.output_dir.display())
    })?;
    let options = GameOptions::default().with_turn_limit(args.turn_limit);
    let result = CardGame::new(pack, options).play(&output)?;

    match result.winner {
        Some(winner) => println!("player {winner} wins"),
        None => println!("No winner: turn limit reached."),
    }
    println!("Game finished.");
    Ok(())
}
