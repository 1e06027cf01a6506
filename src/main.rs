/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of boids based on three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Usage: boid-flock [NUM_BOIDS] [--seed <SEED>] [--parallel] [--debug]
 * Press Q to quit, Space to pause, D to toggle debug info.
 */

use boid_flock::{app, SimulationParams};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "boid-flock",
    version,
    about = "Flocking simulation on a wraparound plane"
)]
struct Cli {
    /// Number of boids; anything other than a positive integer falls back to 600.
    num_boids: Option<String>,

    /// Seed for the initial population, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Step boids across all cores.
    #[arg(long)]
    parallel: bool,

    /// Start with the debug overlay visible.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let params = SimulationParams::default()
        .with_num_boids_arg(cli.num_boids.as_deref())
        .with_seed(cli.seed)
        .with_parallel(cli.parallel);

    app::run(params, cli.debug);
}
