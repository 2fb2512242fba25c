//! 2D vector math

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A 2D vector in pixel units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Move `position` towards `destination` by at most `max_step`, snapping to
/// the destination once within reach.
///
/// Returns the remaining distance after the move, which callers use as an
/// "arrived" test.
pub fn move_towards(position: &mut Vec2, destination: Vec2, max_step: f64) -> f64 {
    let delta = destination - *position;
    let distance = delta.length();

    if distance <= max_step {
        *position = destination;
        return 0.0;
    }

    *position += delta.normalized() * max_step;
    position.distance_to(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);

        assert_eq!(v1 + v2, Vec2::new(5.0, 8.0));
        assert_eq!(v2 - v1, Vec2::new(3.0, 4.0));
        assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!((v2 - v1).length(), 5.0);
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_move_towards_snaps_when_close() {
        let mut pos = Vec2::new(0.0, 0.0);
        let remaining = move_towards(&mut pos, Vec2::new(0.6, 0.8), 1.0);
        assert_eq!(pos, Vec2::new(0.6, 0.8));
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_move_towards_partial_step() {
        let mut pos = Vec2::new(0.0, 0.0);
        let remaining = move_towards(&mut pos, Vec2::new(3.0, 4.0), 1.0);
        // One unit along the (0.6, 0.8) direction
        assert!((pos.x - 0.6).abs() < 1e-9);
        assert!((pos.y - 0.8).abs() < 1e-9);
        assert!((remaining - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_towards_already_there() {
        let mut pos = Vec2::new(5.0, 5.0);
        let remaining = move_towards(&mut pos, Vec2::new(5.0, 5.0), 1.0);
        assert_eq!(remaining, 0.0);
        assert_eq!(pos, Vec2::new(5.0, 5.0));
    }
}
