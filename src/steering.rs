/*
 * Steering Module
 *
 * Each boid follows three rules, computed against every other boid it can see:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * All three share one brute-force scan over the population. A behavior only
 * decides what a neighbor contributes and how large the final correction may
 * be, so the descriptor is resolved once per call rather than per neighbor.
 */

use crate::boid::Boid;
use crate::vector::Vector;

pub const DEFAULT_SIGHT_RADIUS: f64 = 120.0;
pub const DEFAULT_MAX_SEPARATION: f64 = 0.12;
pub const DEFAULT_MAX_ALIGNMENT: f64 = 0.00047;
pub const DEFAULT_MAX_COHESION: f64 = 0.000006;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Separation,
    Alignment,
    Cohesion,
}

impl Behavior {
    pub const ALL: [Behavior; 3] = [Behavior::Alignment, Behavior::Separation, Behavior::Cohesion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Separation => "separation",
            Behavior::Alignment => "alignment",
            Behavior::Cohesion => "cohesion",
        }
    }
}

// What one counted neighbor adds to the running sum, given the query agent
// and the distance between them
type Contribution = fn(agent: &Boid, neighbor: &Boid, distance: f64) -> Vector;

struct BehaviorDescriptor {
    contribution: Contribution,
    max_force: f64,
    // Cohesion averages absolute positions and has to be made relative to the agent
    relative_to_agent: bool,
}

fn separation_contribution(agent: &Boid, neighbor: &Boid, distance: f64) -> Vector {
    (agent.position - neighbor.position) * (1.0 / (distance * distance))
}

fn alignment_contribution(_agent: &Boid, neighbor: &Boid, _distance: f64) -> Vector {
    neighbor.velocity
}

fn cohesion_contribution(_agent: &Boid, neighbor: &Boid, _distance: f64) -> Vector {
    neighbor.position
}

/// Sight radius and the per-behavior force limits.
///
/// The limits are tuned against a per-tick speed of about 7 units; changing
/// them by even an order of magnitude changes the flock qualitatively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockRules {
    pub sight_radius: f64,
    pub max_separation: f64,
    pub max_alignment: f64,
    pub max_cohesion: f64,
}

impl Default for FlockRules {
    fn default() -> Self {
        Self {
            sight_radius: DEFAULT_SIGHT_RADIUS,
            max_separation: DEFAULT_MAX_SEPARATION,
            max_alignment: DEFAULT_MAX_ALIGNMENT,
            max_cohesion: DEFAULT_MAX_COHESION,
        }
    }
}

impl FlockRules {
    fn descriptor(&self, behavior: Behavior) -> BehaviorDescriptor {
        match behavior {
            Behavior::Separation => BehaviorDescriptor {
                contribution: separation_contribution,
                max_force: self.max_separation,
                relative_to_agent: false,
            },
            Behavior::Alignment => BehaviorDescriptor {
                contribution: alignment_contribution,
                max_force: self.max_alignment,
                relative_to_agent: false,
            },
            Behavior::Cohesion => BehaviorDescriptor {
                contribution: cohesion_contribution,
                max_force: self.max_cohesion,
                relative_to_agent: true,
            },
        }
    }

    /// Whether `other` counts as a neighbor of `agent`.
    ///
    /// Besides the identity check, a neighbor must differ from the agent in
    /// both position and velocity. Two distinct boids that share either one
    /// therefore ignore each other; this matches how the flock has always
    /// behaved and is kept deliberately.
    pub fn is_neighbor(&self, agent: &Boid, other: &Boid, distance: f64) -> bool {
        other.id != agent.id
            && other.velocity != agent.velocity
            && other.position != agent.position
            && distance < self.sight_radius
    }

    // Steering correction for one behavior, scanning the whole population
    pub fn steer(&self, agent: &Boid, population: &[Boid], behavior: Behavior) -> Vector {
        let descriptor = self.descriptor(behavior);

        let mut sum = Vector::ZERO;
        let mut count = 0usize;

        for other in population {
            let d = agent.position.distance(other.position);
            if self.is_neighbor(agent, other, d) {
                sum += (descriptor.contribution)(agent, other, d);
                count += 1;
            }
        }

        if count == 0 {
            return Vector::ZERO;
        }

        let mut average = sum * (1.0 / count as f64);

        // Inverse-square separation can blow up for near-coincident neighbors
        if !average.magnitude().is_finite() {
            return Vector::ZERO;
        }

        if descriptor.relative_to_agent {
            average = average - agent.position;
        }

        // Steering = desired - velocity
        let steering = average - agent.velocity;
        steering.clamp_max(descriptor.max_force)
    }

    /// Sum of all three behaviors, i.e. the acceleration for the next tick.
    pub fn combined(&self, agent: &Boid, population: &[Boid]) -> Vector {
        Behavior::ALL
            .iter()
            .fold(Vector::ZERO, |acc, &behavior| acc + self.steer(agent, population, behavior))
    }
}
