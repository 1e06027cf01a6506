/*
 * Error Module
 *
 * Configuration errors. The simulation core itself has no failure modes once
 * it is running; everything here is raised while validating input from the
 * command line or the window surface.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("population size {input:?} is not a positive integer")]
    InvalidPopulation { input: String },
    #[error("population size must be greater than zero")]
    ZeroPopulation,
    #[error("world extent {width}x{height} must be positive and finite")]
    InvalidWorldExtent { width: f64, height: f64 },
}
