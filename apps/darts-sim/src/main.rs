//! Darts simulator CLI: plays bot games in memory through the scoring engine.
//!
//! Useful for soak-testing variant rules and checkout advice over thousands
//! of games without a front end.

mod output;
mod simulator;
mod thrower;
mod types;

use std::collections::BTreeMap;
use std::time::Instant;

use clap::Parser;
use darts_engine::domain::GameType;
use darts_engine::EngineConfig;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use thrower::{AimedThrower, RandomThrower, Thrower};
use tracing::{info, warn};
use types::{GameKind, OutputFormat, ThrowerKind};

#[derive(Parser)]
#[command(name = "darts-sim")]
#[command(about = "In-memory darts game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Variant to play
    #[arg(long, default_value = "x01")]
    game_type: GameKind,

    /// Number of bot players
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Thrower model for every bot
    #[arg(long, default_value = "aimed")]
    thrower: ThrowerKind,

    /// Hit probability for aimed throwers
    #[arg(long, default_value = "0.6")]
    accuracy: f64,

    /// Base seed; game N plays with seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// X01 starting score (overrides DARTS_STARTING_SCORE)
    #[arg(long)]
    starting_score: Option<u32>,

    /// X01 legs per set (overrides DARTS_LEGS)
    #[arg(long)]
    legs: Option<u32>,

    /// X01 sets per match (overrides DARTS_SETS)
    #[arg(long)]
    sets: Option<u32>,

    /// Abandon a game after this many visits
    #[arg(long, default_value = "2000")]
    max_visits: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = engine_config(&args)?;
    let game_type = GameType::from(args.game_type);
    if args.show_output {
        info!(
            games = args.games,
            ?game_type,
            players = args.players,
            thrower = ?args.thrower,
            "Starting darts simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };
        let mut throwers = build_throwers(&args);
        let outcome = Simulator::new(&config, game_type, game_seed, game_num)
            .with_max_visits(args.max_visits)
            .simulate_game(&mut throwers);

        match outcome {
            Ok(result) => {
                if let Err(e) = output_writer.write_game(&result) {
                    warn!("Failed to write results for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game_num, winner = ?result.winner, visits = result.visits, "Game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// Environment defaults with the command-line overrides on top.
fn engine_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = EngineConfig::from_env()?;
    if let Some(score) = args.starting_score {
        config.x01.starting_score = score;
    }
    if let Some(legs) = args.legs {
        config.x01.legs = legs;
    }
    if let Some(sets) = args.sets {
        config.x01.sets = sets;
    }
    Ok(config)
}

fn build_throwers(args: &Args) -> Vec<Box<dyn Thrower>> {
    (0..args.players)
        .map(|_| match args.thrower {
            ThrowerKind::Random => Box::new(RandomThrower) as Box<dyn Thrower>,
            ThrowerKind::Aimed => Box::new(AimedThrower {
                accuracy: args.accuracy,
            }),
        })
        .collect()
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins: BTreeMap<&str, u32> = BTreeMap::new();
    let mut visits = 0u64;
    let mut busts = 0u64;
    for result in results {
        if let Some(winner) = &result.winner {
            *wins.entry(winner.as_str()).or_insert(0) += 1;
        }
        visits += u64::from(result.visits);
        busts += u64::from(result.events.get("bust").copied().unwrap_or(0));
    }

    println!(
        "Average visits per game: {:.1}",
        visits as f64 / results.len() as f64
    );
    println!("Busts: {busts}");
    println!("\n=== Wins by Player ===");
    for (name, count) in wins {
        let rate = (count as f64 / results.len() as f64) * 100.0;
        println!("{name}: {count} ({rate:.1}%)");
    }
}
