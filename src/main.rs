//! Connect Four on the command line.
//!
//! ## Usage
//!
//! - `connect-four` - Play interactively (same as `play`)
//! - `connect-four play` - Player vs Player or Player vs AI from a menu
//! - `connect-four demo` - Watch random players play a few games

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four::console::{Console, Session, Tally};
use connect_four::engine::{FirstPlayer, GameConfig, GameEngine, Seat};
use connect_four::source::RandomSource;

/// Connect Four: drop tokens, connect four
#[derive(Parser)]
#[command(name = "connect-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log verbosity on stderr (-v debug, -vv trace); RUST_LOG overrides when absent
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play(GameArgs),
    /// Let two random players play each other
    Demo {
        #[command(flatten)]
        game: GameArgs,
        /// Number of games to play
        #[arg(long, default_value_t = 3)]
        games: usize,
    },
}

#[derive(Args)]
struct GameArgs {
    /// Which seat opens each game
    #[arg(long, value_enum, default_value_t = FirstPlayer::Fixed)]
    first_player: FirstPlayer,
    /// Seed for reproducible first-player and AI choices
    #[arg(long)]
    seed: Option<u64>,
}

impl From<GameArgs> for GameConfig {
    fn from(args: GameArgs) -> Self {
        GameConfig {
            first_player: args.first_player,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play(args)) => run_session(args.into()),
        Some(Commands::Demo { game, games }) => run_demo(game.into(), games),
        None => run_session(GameConfig::default()),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_session(config: GameConfig) -> anyhow::Result<()> {
    let mut session = Session::new(Console::stdio(), config);
    let tally = session.run().context("interactive session failed")?;
    if tally.games > 0 {
        println!("{tally}");
    }
    Ok(())
}

fn run_demo(config: GameConfig, games: usize) -> anyhow::Result<()> {
    println!("Connect Four: random vs random\n");

    let mut engine = GameEngine::new(
        config,
        Seat::new("Random 1", RandomSource),
        Seat::new("Random 2", RandomSource),
    );
    let mut tally = Tally::new(engine.players());

    for game in 1..=games {
        if game > 1 {
            engine.restart();
        }
        let result = engine
            .play()
            .with_context(|| format!("demo game {game} failed"))?;
        println!("=== Game {game} ({} moves) ===", engine.moves().len());
        print!("{}", engine.board());
        println!("{result}\n");
        tally.record(&result);
    }

    println!("{tally}");
    Ok(())
}
