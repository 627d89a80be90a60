#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the Skyward hazard engine headless.

mod simulation;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use skyward_core::{HazardCatalog, ScreenBounds};
use tracing_subscriber::EnvFilter;

use simulation::{Settings, Simulation};

/// Headless run of the Skyward hazard engine.
#[derive(Debug, Parser)]
#[command(name = "skyward", about = "Simulates a run of hazards and attack patterns", version)]
struct Cli {
    /// Seconds of game time to simulate.
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Simulation frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed every random stream is derived from.
    #[arg(long, default_value_t = 0x5eed_cafe)]
    seed: u64,

    /// Hazard catalog in TOML; the built-in catalog is used when omitted.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Half of the visible width in world units.
    #[arg(long, default_value_t = 5.0)]
    half_width: f32,

    /// Half of the visible height in world units.
    #[arg(long, default_value_t = 9.0)]
    half_height: f32,

    /// Seconds of tutorial before the run starts; nothing spawns meanwhile.
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    tutorial: f32,
}

/// Entry point for the Skyward command-line interface.
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    ensure!(cli.fps > 0, "frame rate must be positive");
    ensure!(cli.seconds >= 0.0, "cannot simulate a negative duration");
    ensure!(
        cli.half_width > 0.0 && cli.half_height > 0.0,
        "screen extents must be positive"
    );

    let catalog = load_catalog(cli.catalog.as_deref())?;
    tracing::info!(
        hazards = catalog.hazards().len(),
        attack_patterns = catalog.attack_patterns().len(),
        collectibles = catalog.collectibles().len(),
        "catalog loaded"
    );

    let mut simulation = Simulation::new(
        catalog,
        Settings {
            bounds: ScreenBounds::centered(cli.half_width, cli.half_height),
            seed: cli.seed,
            tutorial: cli.tutorial,
        },
    )?;

    let dt = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let frames = (f64::from(cli.seconds) * f64::from(cli.fps)).round() as u64;
    tracing::info!(frames, seed = cli.seed, "simulation started");
    for _ in 0..frames {
        simulation.step(dt);
    }
    tracing::info!("simulation finished");

    println!("{}", simulation.summary());
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<HazardCatalog> {
    let Some(path) = path else {
        return Ok(HazardCatalog::builtin());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    HazardCatalog::from_toml_str(&contents)
        .with_context(|| format!("invalid catalog {}", path.display()))
}
