//! Brickfall entry point
//!
//! Runs one headless session under the frame driver. A simple autopilot
//! plays in place of a human: it points at the ball and falls back to the
//! arrow keys when the pointer would push the paddle off the arena.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use brickfall::renderer::HeadlessRenderer;
use brickfall::sim::{GameState, InputEvent, Key, handle_input};
use brickfall::{FrameDriver, GameConfig};

#[derive(Debug, Parser)]
#[command(name = "brickfall", about = "Headless Breakout session")]
struct Args {
    /// JSON config file (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give up after this many simulation frames
    #[arg(long, default_value_t = 200_000)]
    max_frames: u64,

    /// Refresh rate of the simulated display driving the loop
    #[arg(long, default_value_t = 60.0)]
    display_hz: f32,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

/// Pointer-tracking player
#[derive(Debug, Default)]
struct Autopilot {
    held: Option<Key>,
}

impl Autopilot {
    fn play(&mut self, state: &mut GameState) {
        let target = state.ball.pos.x;
        handle_input(state, &InputEvent::PointerMove { x: target });

        // Pointer dropped near the walls; steer with the keys instead
        let center = state.paddle.x + state.paddle.width / 2.0;
        let wanted = if (center - target).abs() <= state.paddle.speed {
            None
        } else if target > center {
            Some(Key::Right)
        } else {
            Some(Key::Left)
        };

        if wanted != self.held {
            if let Some(key) = self.held {
                handle_input(state, &InputEvent::KeyUp(key));
            }
            if let Some(key) = wanted {
                handle_input(state, &InputEvent::KeyDown(key));
            }
            self.held = wanted;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    anyhow::ensure!(
        args.display_hz.is_finite() && args.display_hz > 0.0,
        "display-hz must be a positive finite number"
    );

    log::info!(
        "Brickfall starting: {}x{} arena, {} bricks, {} fps",
        config.arena_width,
        config.arena_height,
        config.brick_count(),
        config.frame_rate
    );

    let mut driver = FrameDriver::new(&config).context("creating frame driver")?;
    let mut state = GameState::new(&config);
    let mut renderer = HeadlessRenderer::default();
    let mut autopilot = Autopilot::default();
    let display_dt = 1.0 / args.display_hz;

    while state.frame < args.max_frames {
        autopilot.play(&mut state);
        if let Some(notice) = driver.advance(&mut state, display_dt, &mut renderer) {
            println!("{}", notice.message);
            println!(
                "Score {} after {} frames ({} scenes presented)",
                notice.score, notice.frames, renderer.frames
            );
            return Ok(());
        }
    }

    log::warn!("Stopped after {} frames without an ending", state.frame);
    println!(
        "Stopped after {} frames: score {}, lives {}",
        state.frame, state.score, state.lives
    );
    Ok(())
}
