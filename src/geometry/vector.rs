//! 2-D vectors for plane geometry.
//!
//! `Vec2` is a plain `Copy` value type with the usual inner-product
//! operations. The 2-D analogue of the cross product is the scalar
//! `perp_dot`, whose sign gives the orientation of the turn from
//! `self` to `other`.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2-D vector (displacement, direction, or offset).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude (avoids sqrt for comparisons).
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector.
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero if the magnitude is
    /// (numerically) zero.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-12 {
            Self::ZERO
        } else {
            *self / mag
        }
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (z-component of the 3-D cross product).
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn perp_dot(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector rotated 90° counter-clockwise.
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle between two vectors in radians, in [0, π].
    ///
    /// Returns 0 when either vector is zero.
    pub fn angle_between(&self, other: &Self) -> f64 {
        let denom = self.magnitude() * other.magnitude();
        if denom < 1e-12 {
            return 0.0;
        }
        // Clamp guards acos against rounding past ±1.
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    pub fn scale(&self, factor: f64) -> Self {
        *self * factor
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_normalized_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        let v = Vec2::new(0.0, 2.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perp_dot_orientation() {
        let e_x = Vec2::new(1.0, 0.0);
        let e_y = Vec2::new(0.0, 1.0);
        assert!(e_x.perp_dot(&e_y) > 0.0);
        assert!(e_y.perp_dot(&e_x) < 0.0);
        assert_eq!(e_x.perp_dot(&e_x), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let e_x = Vec2::new(1.0, 0.0);
        let e_y = Vec2::new(0.0, 1.0);
        assert!((e_x.angle_between(&e_y) - PI / 2.0).abs() < 1e-12);
        assert!((e_x.angle_between(&-e_x) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}
