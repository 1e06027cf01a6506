/*
 * Renderer Module
 *
 * Draws the flock. World space has its origin in the top-left corner with y
 * pointing down; nannou puts the origin in the middle of the window with y
 * pointing up, so every position goes through `world_to_screen`.
 *
 * Boids are drawn as ellipses: the display heading only covers half a turn,
 * and an ellipse looks the same either way round.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::steering::FlockRules;
use crate::vector::Vector;
use crate::{BOID_HEIGHT, BOID_WIDTH};

// Map a world position into nannou's window coordinates
pub fn world_to_screen(position: Vector, window_rect: Rect) -> Point2 {
    pt2(
        window_rect.left() + position.x as f32,
        window_rect.top() - position.y as f32,
    )
}

/// Rotation for nannou (counter-clockwise radians, y up) from a heading in
/// degrees measured clockwise on a y-down screen.
pub fn heading_to_rotation(heading: f64) -> f32 {
    -(heading as f32).to_radians()
}

pub fn draw_boids(draw: &Draw, boids: &[Boid], window_rect: Rect) {
    for boid in boids {
        draw_boid(draw, boid, window_rect);
    }
}

pub fn draw_boid(draw: &Draw, boid: &Boid, window_rect: Rect) {
    let screen_pos = world_to_screen(boid.position, window_rect);

    draw.ellipse()
        .xy(screen_pos)
        .w_h(BOID_WIDTH, BOID_HEIGHT)
        .rotate(heading_to_rotation(boid.heading))
        .color(rgba(0.55f32, 0.75, 0.95, 0.6))
        .stroke(rgb(220u8, 220, 220))
        .stroke_weight(1.0);
}

// Sight radius and velocity of a single boid
pub fn draw_debug_overlay(draw: &Draw, boid: &Boid, rules: &FlockRules, window_rect: Rect) {
    let screen_pos = world_to_screen(boid.position, window_rect);

    draw.ellipse()
        .xy(screen_pos)
        .radius(rules.sight_radius as f32)
        .no_fill()
        .stroke(GREEN)
        .stroke_weight(1.0);

    // Velocity vector, y flipped into screen space
    let velocity = vec2(boid.velocity.x as f32, -(boid.velocity.y as f32));
    draw.arrow()
        .start(screen_pos)
        .end(screen_pos + velocity * 5.0)
        .color(YELLOW)
        .stroke_weight(2.0);
}
