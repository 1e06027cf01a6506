/*
 * Vector Module
 *
 * A small 2D vector type used by the flocking model. Every operation returns
 * a new value; nothing mutates in place except the compound assignment
 * operators.
 *
 * Degenerate inputs are recovered locally:
 * - normalizing a zero (or non-finite) vector yields the zero vector
 * - clamping a zero vector up to a minimum magnitude uses the default heading
 * - the display direction of a zero vector is the bare offset
 */

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::physics::World;

// Offset applied to the display angle so 0 degrees matches the sprite orientation
pub const DIRECTION_OFFSET: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Heading used whenever a direction has to be invented for a zero vector.
    pub const DEFAULT_HEADING: Vector = Vector { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vector) -> f64 {
        (self - other).magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector in the same direction, or `Vector::ZERO` if there is no
    /// direction to speak of.
    pub fn normalize(self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Vector::ZERO;
        }

        let normalized = self.scale(1.0 / magnitude);
        if normalized.is_finite() {
            normalized
        } else {
            Vector::ZERO
        }
    }

    pub fn with_magnitude(self, n: f64) -> Vector {
        self.normalize().scale(n)
    }

    // Same as `with_magnitude`, but borrows the direction of `fallback` when
    // this vector has none
    pub fn with_magnitude_or(self, n: f64, fallback: Vector) -> Vector {
        let unit = self.normalize();
        if unit == Vector::ZERO {
            fallback.normalize().scale(n)
        } else {
            unit.scale(n)
        }
    }

    /// Display angle in degrees: `atan(y/x)` shifted by [`DIRECTION_OFFSET`].
    ///
    /// The arctangent only covers half a turn, so opposite headings map to the
    /// same angle. That is fine for the symmetric body the renderer draws.
    /// This is never fed back into the physics.
    pub fn direction(self) -> f64 {
        let angle = (self.y / self.x).atan().to_degrees();
        if angle.is_finite() {
            angle - DIRECTION_OFFSET
        } else {
            -DIRECTION_OFFSET
        }
    }

    pub fn clamp_max(self, limit: f64) -> Vector {
        if self.magnitude() > limit {
            self.with_magnitude(limit)
        } else {
            self
        }
    }

    pub fn clamp_min(self, limit: f64) -> Vector {
        if self.magnitude() < limit {
            self.with_magnitude_or(limit, Vector::DEFAULT_HEADING)
        } else {
            self
        }
    }

    // Hard wrap of both axes into the world
    pub fn wrapped(self, world: World) -> Vector {
        Vector::new(
            wrap_axis(self.x, world.width()),
            wrap_axis(self.y, world.height()),
        )
    }
}

/// Wraps one coordinate onto the torus.
///
/// Anything at or below zero snaps to the far edge and anything at or past the
/// extent snaps to zero. This is a snap, not a modulo: an agent leaving at the
/// left edge reappears exactly at `extent`, not at `extent - overshoot`.
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value <= 0.0 {
        extent
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        self.scale(k)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_basic_arithmetic() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -4.0);
        assert_eq!(a + b, Vector::new(4.0, -2.0));
        assert_eq!(a - b, Vector::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
        assert!(approx(b.magnitude(), 5.0));
    }

    #[test]
    fn test_normalize_zero_is_finite() {
        let n = Vector::ZERO.normalize();
        assert_eq!(n, Vector::ZERO);
        assert!(n.is_finite());

        // And nothing non-finite leaks through the derived operations either
        assert!(Vector::ZERO.with_magnitude(7.0).is_finite());
        assert!(Vector::ZERO.clamp_max(0.12).is_finite());
    }

    #[test]
    fn test_normalize_non_finite_input() {
        let n = Vector::new(f64::INFINITY, 1.0).normalize();
        assert_eq!(n, Vector::ZERO);
        let n = Vector::new(f64::NAN, 0.0).normalize();
        assert_eq!(n, Vector::ZERO);
    }

    #[test]
    fn test_with_magnitude() {
        let v = Vector::new(3.0, 4.0).with_magnitude(10.0);
        assert!(approx(v.x, 6.0));
        assert!(approx(v.y, 8.0));
    }

    #[test]
    fn test_clamp_min_zero_uses_default_heading() {
        let v = Vector::ZERO.clamp_min(7.0);
        assert!(approx(v.x, 7.0));
        assert!(approx(v.y, 0.0));
    }

    #[test]
    fn test_clamp_leaves_vectors_inside_the_limit_alone() {
        let v = Vector::new(0.01, 0.02);
        assert_eq!(v.clamp_max(1.0), v);
        let v = Vector::new(10.0, 0.0);
        assert_eq!(v.clamp_min(7.0), v);
    }

    #[test]
    fn test_direction() {
        assert!(approx(Vector::new(1.0, 0.0).direction(), -180.0));
        assert!(approx(Vector::new(1.0, 1.0).direction(), -135.0));
        assert!(approx(Vector::new(0.0, 1.0).direction(), -90.0));
        // Opposite headings share an angle
        assert!(approx(Vector::new(-1.0, -1.0).direction(), -135.0));
        // 0/0
        assert!(approx(Vector::ZERO.direction(), -180.0));
    }

    #[test]
    fn test_wrap_axis_is_a_hard_snap() {
        assert_eq!(wrap_axis(-7.0, 200.0), 200.0);
        assert_eq!(wrap_axis(0.0, 200.0), 200.0);
        assert_eq!(wrap_axis(200.0, 200.0), 0.0);
        assert_eq!(wrap_axis(205.0, 200.0), 0.0);
        assert_eq!(wrap_axis(199.5, 200.0), 199.5);
        assert_eq!(wrap_axis(0.5, 200.0), 0.5);
    }

    proptest! {
        #[test]
        fn clamp_max_never_overshoots_or_turns(
            x in -1.0e3f64..1.0e3,
            y in -1.0e3f64..1.0e3,
            limit in 1.0e-6f64..50.0,
        ) {
            let v = Vector::new(x, y);
            let clamped = v.clamp_max(limit);
            prop_assert!(clamped.magnitude() <= limit * (1.0 + 1e-9));
            if v.magnitude() > 1e-9 {
                let cross = v.x * clamped.y - v.y * clamped.x;
                let dot = v.x * clamped.x + v.y * clamped.y;
                prop_assert!(cross.abs() <= 1e-6 * v.magnitude().max(1.0));
                prop_assert!(dot >= 0.0);
            }
        }

        #[test]
        fn clamp_min_never_undershoots_or_turns(
            x in -1.0e3f64..1.0e3,
            y in -1.0e3f64..1.0e3,
            limit in 1.0e-3f64..50.0,
        ) {
            let v = Vector::new(x, y);
            let clamped = v.clamp_min(limit);
            prop_assert!(clamped.magnitude() >= limit * (1.0 - 1e-9));
            if v.magnitude() > 1e-9 {
                let cross = v.x * clamped.y - v.y * clamped.x;
                let dot = v.x * clamped.x + v.y * clamped.y;
                prop_assert!(cross.abs() <= 1e-6 * clamped.magnitude().max(1.0));
                prop_assert!(dot >= 0.0);
            }
        }
    }
}
