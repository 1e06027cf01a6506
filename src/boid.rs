/*
 * Boid Module
 *
 * This module defines the Boid struct: the state of a single agent and its
 * randomized construction. The flocking rules themselves live in the
 * steering module, and the per-tick integration lives in physics.
 */

use rand::Rng;

use crate::params::SimulationParams;
use crate::physics::World;
use crate::vector::Vector;

// Spawn velocities are drawn from [-SPAWN_SPREAD * speed, SPAWN_SPREAD * speed)
const SPAWN_SPREAD: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    /// Identity of the agent, stable for the lifetime of the simulation.
    pub id: usize,
    pub position: Vector,
    pub velocity: Vector,
    /// Combined steering from the previous tick, added to velocity once per tick.
    pub acceleration: Vector,
    /// Display angle in degrees captured at the start of the last tick.
    pub heading: f64,
}

impl Boid {
    pub fn new(id: usize, position: Vector, velocity: Vector) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: Vector::ZERO,
            heading: velocity.direction(),
        }
    }

    // Create a boid somewhere inside the world, heading in a random direction
    pub fn random<R: Rng + ?Sized>(
        id: usize,
        rng: &mut R,
        world: World,
        params: &SimulationParams,
    ) -> Self {
        let x = spawn_coordinate(rng, world.width(), params.spawn_margin);
        let y = spawn_coordinate(rng, world.height(), params.spawn_margin);

        // A zero or non-finite speed leaves no range to sample from
        let spread = SPAWN_SPREAD * params.min_speed;
        let velocity = if spread.is_finite() && spread > 0.0 {
            let raw_velocity = Vector::new(
                rng.gen_range(-spread..spread),
                rng.gen_range(-spread..spread),
            );
            raw_velocity.with_magnitude_or(params.min_speed, Vector::DEFAULT_HEADING)
        } else if params.min_speed.is_finite() {
            Vector::DEFAULT_HEADING * params.min_speed.max(0.0)
        } else {
            Vector::ZERO
        };

        Boid::new(id, Vector::new(x, y), velocity)
    }

    // Re-randomize this boid in place, keeping its identity
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, world: World, params: &SimulationParams) {
        *self = Boid::random(self.id, rng, world, params);
    }
}

// Keep fresh spawns away from the low edges, unless the world is too small for that
fn spawn_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64, margin: f64) -> f64 {
    if margin >= 0.0 && extent > margin {
        rng.gen_range(margin..extent)
    } else {
        rng.gen_range(0.0..extent)
    }
}
