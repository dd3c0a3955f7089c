//! Play command - a turn-based terminal session
//!
//! Each input line holds zero or more key names (`right down left up e q r
//! esc`) and then advances the game by one tick. `esc` or end of input quits.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session()
//! - Level 3: apply_line(), status_line()
//! - Level 4: board formatting

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use hexsnake_core::{Collision, Flow, GameConfig, GameState, Key, Scene, Status, TickOutcome};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Print the board after every tick
    #[arg(long)]
    pub board: bool,

    /// Print the frame's draw list as JSON after every tick
    #[arg(long)]
    pub scene: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, config: GameConfig, seed: Option<u64>) -> Result<()> {
    tracing::info!("Starting game on '{}' board", config.name);

    let state = GameState::new(config, seed)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let state = play_session(state, stdin.lock(), stdout.lock(), &args)?;

    tracing::info!("Session ended: score={}, length={}", state.score(), state.snake().len());
    Ok(())
}

// ============================================================================
// LEVEL 2 - SESSION
// ============================================================================

/// Feed lines from `input` into the game until quit or end of input
fn play_session<R: BufRead, W: Write>(
    mut state: GameState,
    input: R,
    mut out: W,
    args: &PlayArgs,
) -> Result<GameState> {
    let layout = state.config().layout();
    writeln!(out, "{}", status_line(&state, TickOutcome::Idle))?;

    for line in input.lines() {
        let line = line?;
        if apply_line(&mut state, &line, &mut out)? == Flow::Quit {
            break;
        }

        let outcome = state.tick();
        writeln!(out, "{}", status_line(&state, outcome))?;
        if args.board {
            write!(out, "{}", format_board(&state))?;
        }
        if args.scene {
            writeln!(out, "{}", serde_json::to_string(&Scene::build(&state, &layout))?)?;
        }
    }

    out.flush()?;
    Ok(state)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Press every key named on the line
fn apply_line<W: Write>(state: &mut GameState, line: &str, out: &mut W) -> Result<Flow> {
    for token in line.split_whitespace() {
        match token.parse::<Key>() {
            Ok(key) => {
                if state.press(key) == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
            Err(e) => {
                tracing::warn!("{}", e);
                writeln!(out, "? {}", e)?;
            }
        }
    }
    Ok(Flow::Continue)
}

fn status_line(state: &GameState, outcome: TickOutcome) -> String {
    let food = state
        .food()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "none".to_string());
    let mut line = format!(
        "tick {} | head {} | dir {} | length {} | score {} | food {}",
        state.ticks(),
        state.snake().head(),
        state.direction(),
        state.snake().len(),
        state.score(),
        food
    );

    match (state.status(), outcome) {
        (Status::GameOver, TickOutcome::Crashed { at, collision }) => {
            let cause = match collision {
                Collision::Boundary => "left the board",
                Collision::SelfBite => "bit itself",
            };
            line.push_str(&format!(" | GAME OVER: {} at {} (r to restart)", cause, at));
        }
        (Status::GameOver, _) => line.push_str(" | GAME OVER (r to restart)"),
        (Status::Running, TickOutcome::Ate { .. }) => line.push_str(" | yum"),
        (Status::Running, _) => {}
    }
    line
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Text view of the board. Rows are r, columns are q; each row is shifted
/// half a cell so hex neighbors touch.
fn format_board(state: &GameState) -> String {
    let board = state.board();
    let (lo, hi) = board.bounds();
    let head = state.snake().head();
    let mut text = String::new();

    for r in lo.r..=hi.r {
        let mut row = " ".repeat((r - lo.r) as usize);
        for q in lo.q..=hi.q {
            let hex = hexsnake_core::Hex::new(q, r);
            let c = if !board.contains(hex) {
                ' '
            } else if hex == head {
                '@'
            } else if state.snake().contains(hex) {
                'o'
            } else if state.food() == Some(hex) {
                '*'
            } else {
                '.'
            };
            row.push(c);
            row.push(' ');
        }
        text.push_str(row.trim_end());
        text.push('\n');
    }
    text
}

// ============================================================================
// TESTS
// ============================================================================
