//! HEXSNAKE CLI - Command-line interface
//!
//! Commands:
//! - play: Play in the terminal, one tick per input line
//! - simulate: Run autopilot games and report statistics
//! - scene: Print a frame's draw list as JSON

mod play;
mod scene_cmd;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hexsnake_core::GameConfig;

#[derive(Parser)]
#[command(name = "hexsnake")]
#[command(about = "Snake on a hexagonal grid")]
struct Cli {
    /// Board preset
    #[arg(long, value_enum, default_value = "bounded", global = true)]
    variant: Variant,

    /// JSON config file (takes precedence over --variant)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Random seed for food placement and the autopilot
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    /// 15x15 rectangular board
    Bounded,
    /// Radius-15 board with rising pace
    Radial,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play(play::PlayArgs),
    /// Run autopilot games
    Simulate(simulate::SimulateArgs),
    /// Print the draw list of a frame as JSON
    Scene(scene_cmd::SceneArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the game and JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Play(args) => play::run(args, config, cli.seed),
        Commands::Simulate(args) => simulate::run(args, config, cli.seed),
        Commands::Scene(args) => scene_cmd::run(args, config, cli.seed),
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => match cli.variant {
            Variant::Bounded => GameConfig::bounded(),
            Variant::Radial => GameConfig::radial(),
        },
    };
    tracing::debug!("Using config '{}' ({:?})", config.name, config.board);
    Ok(config)
}
