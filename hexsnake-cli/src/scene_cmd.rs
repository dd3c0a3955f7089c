//! Scene command - dump a frame's draw list for an external renderer

use anyhow::Result;
use clap::Args;

use hexsnake_core::{Autopilot, GameConfig, GameState, Scene};

#[derive(Args)]
pub struct SceneArgs {
    /// Autopilot ticks to run before capturing the frame
    #[arg(long, default_value = "0")]
    pub ticks: u64,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Run scene command
pub fn run(args: SceneArgs, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let scene = capture(config, seed, args.ticks)?;
    tracing::info!(
        "Captured frame: {} polygons, {} labels",
        scene.polygons.len(),
        scene.labels.len()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };
    println!("{}", json);
    Ok(())
}

fn capture(config: GameConfig, seed: Option<u64>, ticks: u64) -> Result<Scene> {
    let mut state = GameState::new(config, seed)?;
    let layout = state.config().layout();
    let mut pilot = Autopilot::with_seed(seed.unwrap_or(42));
    pilot.play_game(&mut state, ticks);
    Ok(Scene::build(&state, &layout))
}
