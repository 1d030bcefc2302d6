//! Draughts CLI
//!
//! Play the alpha-beta engine against itself from a board file, or run a
//! match against a baseline player.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use alphabeta_engine::AlphaBetaEngine;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use draughts_core::{Board, Player, State};
use game::{GameConfig, GameOutcome, GameRunner, MatchConfig, MatchRunner};
use random_engine::RandomPlayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "draughts", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Self-play from a board file and write every position
    Play {
        /// Board to start from (8 lines of `.` `r` `R` `b` `B`), Red to move
        #[arg(long)]
        inputfile: PathBuf,
        /// Where to write the snapshot sequence
        #[arg(long)]
        outputfile: PathBuf,
        /// Search depth in plies (overrides the config file)
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Also write a JSON record with per-ply statistics
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Play a match from the standard opening, alternating colors
    Match {
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    Alphabeta,
}

fn engine_from(config: &GameConfig) -> AlphaBetaEngine {
    AlphaBetaEngine::new()
        .with_weights(config.weights)
        .with_cache_policy(config.cache_policy)
}

fn load_config(path: Option<&Path>, depth: Option<u8>) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(path)?;
    if let Some(depth) = depth {
        config.depth = depth;
    }
    Ok(config)
}

fn run_play(
    inputfile: &Path,
    outputfile: &Path,
    config: &GameConfig,
    record_path: Option<&Path>,
) -> Result<()> {
    let text = std::fs::read_to_string(inputfile)
        .with_context(|| format!("failed to read board from {}", inputfile.display()))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("malformed board in {}", inputfile.display()))?;

    info!(depth = config.depth, max_plies = config.max_plies, "starting self-play");

    let mut red = engine_from(config);
    let mut black = engine_from(config);
    let record = GameRunner::from_config(config).play(State::initial(board), &mut red, &mut black)?;

    let file = File::create(outputfile)
        .with_context(|| format!("failed to create {}", outputfile.display()))?;
    record
        .write_snapshots(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", outputfile.display()))?;

    if let Some(path) = record_path {
        record
            .save_json(path)
            .with_context(|| format!("failed to write record {}", path.display()))?;
    }

    let outcome = match record.outcome {
        GameOutcome::Win(color) => format!("{color:?} wins"),
        GameOutcome::Draw => "draw".to_string(),
    };
    println!("{outcome} after {} plies", record.ply_count());
    Ok(())
}

fn run_match(games: u32, opponent: Opponent, config: &GameConfig) -> Result<()> {
    let mut engine = engine_from(config);
    let mut other: Box<dyn Player> = match opponent {
        Opponent::Random => Box::new(RandomPlayer::new()),
        Opponent::Alphabeta => Box::new(engine_from(config)),
    };

    println!("=== Match: {} vs {} ===", engine.name(), other.name());
    println!("Games: {}, Depth: {}", games, config.depth);

    let match_config = MatchConfig {
        num_games: games,
        depth: config.depth,
        max_plies: config.max_plies,
        ..Default::default()
    };
    let result = MatchRunner::new(match_config).run_match(&mut engine, other.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine.name(),
        result.wins,
        result.losses,
        result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            inputfile,
            outputfile,
            depth,
            config,
            record,
        } => {
            let config = load_config(config.as_deref(), depth)?;
            run_play(&inputfile, &outputfile, &config, record.as_deref())
        }
        Command::Match {
            games,
            depth,
            opponent,
            config,
        } => {
            let config = load_config(config.as_deref(), depth)?;
            run_match(games, opponent, &config)
        }
    }
}
