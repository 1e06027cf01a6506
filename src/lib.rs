/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The simulation core (vector, boid, steering, physics, params, error) has no
 * knowledge of windows or drawing. The nannou front end (app, input, renderer,
 * ui, debug) reads positions and headings from it and calls `advance_tick`.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use params::SimulationParams;
pub use physics::{Simulation, World};
pub use steering::{Behavior, FlockRules};
pub use vector::Vector;

// Simulation core
pub mod boid;
pub mod error;
pub mod params;
pub mod physics;
pub mod steering;
pub mod vector;

// Front end
pub mod app;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;

// Constants
pub const DEFAULT_NUM_BOIDS: usize = 600;
pub const BOID_WIDTH: f32 = 60.0;
pub const BOID_HEIGHT: f32 = 30.0;
pub const TICKS_PER_SECOND: f64 = 60.0;
pub const MAX_TICKS_PER_FRAME: usize = 4;
