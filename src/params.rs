/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the settings
 * for a run: the population size, the flocking rules, the minimum speed and
 * whether boids are stepped in parallel. Window-only toggles live in the UI.
 *
 * The population size is fixed once the simulation starts. It is validated
 * here, and invalid input falls back to the default instead of failing.
 */

use crate::error::ConfigError;
use crate::steering::FlockRules;
use crate::DEFAULT_NUM_BOIDS;

pub const DEFAULT_MIN_SPEED: f64 = 7.0;
pub const DEFAULT_SPAWN_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub rules: FlockRules,
    /// Every boid is brought back up to this speed at the end of a tick.
    pub min_speed: f64,
    pub spawn_margin: f64,
    /// Seed for the initial population; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: DEFAULT_NUM_BOIDS,
            rules: FlockRules::default(),
            min_speed: DEFAULT_MIN_SPEED,
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            seed: None,
            enable_parallel: false,
        }
    }
}

impl SimulationParams {
    /// Validate a raw population-size argument.
    ///
    /// A missing argument means "use the default" and is not an error.
    pub fn parse_num_boids(raw: Option<&str>) -> Result<usize, ConfigError> {
        let Some(raw) = raw else {
            return Ok(DEFAULT_NUM_BOIDS);
        };

        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidPopulation {
                input: raw.to_string(),
            })?;

        if value == 0 {
            return Err(ConfigError::ZeroPopulation);
        }

        Ok(value)
    }

    // Apply a raw population-size argument, falling back to the default on bad input
    pub fn with_num_boids_arg(mut self, raw: Option<&str>) -> Self {
        self.num_boids = match Self::parse_num_boids(raw) {
            Ok(n) => {
                if raw.is_none() {
                    log::info!("No population size given, using default of {}", n);
                }
                n
            }
            Err(err) => {
                log::warn!("{}; using default of {}", err, DEFAULT_NUM_BOIDS);
                DEFAULT_NUM_BOIDS
            }
        };
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, enable_parallel: bool) -> Self {
        self.enable_parallel = enable_parallel;
        self
    }
}
