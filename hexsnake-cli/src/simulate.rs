//! Simulate command - run autopilot games and report statistics
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use hexsnake_core::{Autopilot, Collision, GameConfig, GameState, RunSummary};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Tick cap per game
    #[arg(long, default_value = "10000")]
    pub max_ticks: u64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    seed: u64,
    summary: RunSummary,
}

/// Aggregated results
#[derive(Clone, Debug)]
struct SimulationResults {
    config_name: String,
    games: Vec<GameRecord>,
    avg_score: f64,
    max_score: u32,
    avg_length: f64,
    avg_ticks: f64,
    boundary_crashes: usize,
    self_bites: usize,
    capped: usize,
    elapsed: Duration,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Draw one seed per game
/// 2. Play all games in parallel
/// 3. Report results
pub fn run(args: SimulateArgs, config: GameConfig, seed: Option<u64>) -> Result<()> {
    tracing::info!(
        "Starting simulation: {} games on '{}' board (max {} ticks)",
        args.games,
        config.name,
        args.max_ticks
    );

    let results = run_games(&config, &args, seed)?;

    tracing::info!(
        "Finished {} games in {}",
        results.games.len(),
        format_duration(results.elapsed)
    );

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play every game, one seed each
fn run_games(config: &GameConfig, args: &SimulateArgs, seed: Option<u64>) -> Result<SimulationResults> {
    let mut rng = create_rng(seed);
    let seeds: Vec<u64> = (0..args.games).map(|_| rng.gen()).collect();

    let start = Instant::now();
    let games = seeds
        .par_iter()
        .enumerate()
        .map(|(i, &game_seed)| play_single_game(config, i + 1, game_seed, args.max_ticks))
        .collect::<Result<Vec<_>>>()?;

    Ok(compute_statistics(config.name.clone(), games, start.elapsed()))
}

/// Report results
fn report_results(results: &SimulationResults, args: &SimulateArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_single_game(config: &GameConfig, game_number: usize, seed: u64, max_ticks: u64) -> Result<GameRecord> {
    let mut state = GameState::new(config.clone(), Some(seed))?;
    let mut pilot = Autopilot::with_seed(seed);
    let summary = pilot.play_game(&mut state, max_ticks);

    tracing::debug!(
        "Game {}: score={} ticks={} ended={:?}",
        game_number,
        summary.score,
        summary.ticks,
        summary.collision
    );

    Ok(GameRecord {
        game_number,
        seed,
        summary,
    })
}

fn compute_statistics(config_name: String, games: Vec<GameRecord>, elapsed: Duration) -> SimulationResults {
    let n = games.len().max(1) as f64;
    let avg_score = games.iter().map(|g| g.summary.score as f64).sum::<f64>() / n;
    let avg_length = games.iter().map(|g| g.summary.length as f64).sum::<f64>() / n;
    let avg_ticks = games.iter().map(|g| g.summary.ticks as f64).sum::<f64>() / n;
    let max_score = games.iter().map(|g| g.summary.score).max().unwrap_or(0);

    let count = |c: Option<Collision>| games.iter().filter(|g| g.summary.collision == c).count();
    let boundary_crashes = count(Some(Collision::Boundary));
    let self_bites = count(Some(Collision::SelfBite));
    let capped = count(None);

    SimulationResults {
        config_name,
        games,
        avg_score,
        max_score,
        avg_length,
        avg_ticks,
        boundary_crashes,
        self_bites,
        capped,
        elapsed,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Format duration for display
fn format_duration(d: Duration) -> String {
    if d.as_secs() >= 1 {
        format!("{:.2}s", d.as_secs_f64())
    } else if d.as_millis() >= 1 {
        format!("{:.1}ms", d.as_secs_f64() * 1000.0)
    } else {
        format!("{:.1}us", d.as_secs_f64() * 1_000_000.0)
    }
}

/// Print results as JSON
fn print_json_results(results: &SimulationResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game: usize,
        seed: u64,
        #[serde(flatten)]
        summary: RunSummary,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        config: String,
        avg_score: f64,
        max_score: u32,
        avg_length: f64,
        avg_ticks: f64,
        boundary_crashes: usize,
        self_bites: usize,
        capped: usize,
        elapsed_ms: u64,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        config: results.config_name.clone(),
        avg_score: results.avg_score,
        max_score: results.max_score,
        avg_length: results.avg_length,
        avg_ticks: results.avg_ticks,
        boundary_crashes: results.boundary_crashes,
        self_bites: results.self_bites,
        capped: results.capped,
        elapsed_ms: results.elapsed.as_millis() as u64,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game: g.game_number,
                seed: g.seed,
                summary: g.summary,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text table
fn print_text_results(results: &SimulationResults) {
    println!("\n=== HEXSNAKE Simulation ({}) ===", results.config_name);
    println!("Games: {}   Time: {}\n", results.games.len(), format_duration(results.elapsed));

    println!("{:<14} {:>10}", "Avg score", format!("{:.1}", results.avg_score));
    println!("{:<14} {:>10}", "Max score", results.max_score);
    println!("{:<14} {:>10}", "Avg length", format!("{:.1}", results.avg_length));
    println!("{:<14} {:>10}", "Avg ticks", format!("{:.1}", results.avg_ticks));
    println!("{}", "-".repeat(25));
    println!("{:<14} {:>10}", "Hit wall", results.boundary_crashes);
    println!("{:<14} {:>10}", "Bit itself", results.self_bites);
    println!("{:<14} {:>10}", "Tick cap", results.capped);
}

// ============================================================================
// TESTS
// ============================================================================
