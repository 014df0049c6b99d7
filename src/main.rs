//! Asteroid Dodge entry point.
//!
//! Two players race their ships to the top of the screen through a field of
//! drifting asteroids. Built on:
//! - **bevy_ecs** as the object store
//! - **raylib** for the window (optional `raylib` feature)
//! - a headless mode that runs a fixed number of frames into a recording
//!   surface and logs the result
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib
//! cargo run --release -- --headless --frames 600 --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use asteroid_dodge::error::GameError;
use asteroid_dodge::game::Game;
use asteroid_dodge::level::{LevelSettings, MainLevel, scores};
use asteroid_dodge::resources::gameconfig::GameConfig;
use asteroid_dodge::resources::screensize::ScreenSize;
use asteroid_dodge::scene::Scene;
use asteroid_dodge::scheduler::{FrameScheduler, SystemClock};
use asteroid_dodge::surface::RecordingSurface;

/// Asteroid Dodge
#[derive(Parser)]
#[command(version, about = "Two-player asteroid dodging game.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for the asteroid field.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the collision debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn build_game(config: &GameConfig, cli: &Cli, target_fps: u32) -> Result<Game<SystemClock>, GameError> {
    let (w, h) = config.render_size();
    let level = MainLevel::new(LevelSettings::from_config(config, cli.seed));
    let mut scene = Scene::new(ScreenSize::new(w as i32, h as i32)).with_level(level);
    scene.set_debug(cli.debug);
    let scheduler = FrameScheduler::with_target_fps(SystemClock::new(), target_fps);
    Game::new(scene, scheduler)
}

fn run_headless(config: &GameConfig, cli: &Cli) -> Result<(), GameError> {
    let mut game = build_game(config, cli, config.target_fps)?;
    let mut surface = RecordingSurface::new();
    info!("running {} frames headless", cli.frames);
    game.run_for(cli.frames, &mut surface, std::thread::sleep);
    let (left, right) = scores(game.scene_mut().world_mut());
    info!("final score: left {} - right {}", left, right);
    Ok(())
}

#[cfg(feature = "raylib")]
fn run(config: &GameConfig, cli: &Cli) -> Result<(), GameError> {
    if cli.headless {
        return run_headless(config, cli);
    }
    let game = build_game(config, cli, 0)?;
    asteroid_dodge::backend::window::run_window(game, "Asteroid Dodge", config.target_fps)
}

#[cfg(not(feature = "raylib"))]
fn run(config: &GameConfig, cli: &Cli) -> Result<(), GameError> {
    if !cli.headless {
        warn!("built without the raylib feature, running headless");
    }
    run_headless(config, cli)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write the default config and quit
    if let Some(maybe_path) = &cli.write_config {
        let config = match maybe_path {
            Some(path) => GameConfig::with_path(path),
            None => GameConfig::new(),
        };
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    if let Err(e) = run(&config, &cli) {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
