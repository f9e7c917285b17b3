//! Headless snake simulation driven by a fixed-step Bevy app.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::info;
use slither::numeric::{ceil_to_u32, u32_to_f32};
use slither::{init_logging, SlitherScript, SnakeActor, SnakeBundle, SnakePlugin};

/// Headless snake simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Starting x position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,
    /// Starting y position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 6.0)]
    seconds: f32,
    /// Fixed frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// JSON file overriding the slither timing
    #[arg(long)]
    script: Option<PathBuf>,
}

fn load_script(path: Option<&PathBuf>) -> Result<SlitherScript> {
    match path {
        Some(file) => SlitherScript::from_json_path(file)
            .with_context(|| format!("loading script {}", file.display())),
        None => Ok(SlitherScript::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    ensure!(args.fps > 0, "--fps must be at least 1");
    ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );
    let script = load_script(args.script.as_ref())?;

    let step = Duration::from_secs_f32(1.0 / u32_to_f32(args.fps));
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SnakePlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(step));

    let snake = app
        .world_mut()
        .spawn(SnakeBundle::with_script(args.x, args.y, script)?)
        .id();
    info!(
        "simulating {}s at {} fps from ({}, {}), turning every {}s",
        args.seconds,
        args.fps,
        args.x,
        args.y,
        script.turn_period()
    );

    // The first update only primes the clock.
    let frames = ceil_to_u32(f64::from(args.seconds) * f64::from(args.fps)).saturating_add(1);
    for _ in 0..frames {
        app.update();
    }

    let actor = app
        .world()
        .get::<SnakeActor>(snake)
        .context("snake entity disappeared")?;
    let position = actor.position();
    info!(
        "after {:.2}s the snake is {:?} {:?} at ({:.1}, {:.1}) with {} hops",
        actor.elapsed_time(),
        actor.facing(),
        actor.action(),
        position.x,
        position.y,
        actor.hop_count()
    );
    Ok(())
}
