//! Points in the plane and point-cloud helpers.
//!
//! `Point2` is validated at construction: coordinates must be finite.
//! Every downstream computation can therefore assume finite inputs.
//!
//! The point-cloud helpers (`distance_matrix`, `centroid`) operate on
//! slices of points and return `ndarray` matrices, which keeps them
//! composable with the rest of the numeric ecosystem.

use ndarray::Array2;

use crate::error::{check_finite, GeometryError, Result};
use crate::geometry::Vec2;

/// A point in the Euclidean plane with finite coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    x: f64,
    y: f64,
}

impl Point2 {
    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        check_finite("x coordinate", x)?;
        check_finite("y coordinate", y)?;
        Ok(Self { x, y })
    }

    /// The origin (0, 0).
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Midpoint of the segment between two points.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Displacement vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    /// Point reached by translating along `v`.
    ///
    /// Fails if the translation overflows to a non-finite coordinate.
    pub fn translate(&self, v: Vec2) -> Result<Self> {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

/// Symmetric pairwise Euclidean distance matrix over a point set.
///
/// Entry `[i, j]` holds `d(points[i], points[j])`; the diagonal is zero.
pub fn distance_matrix(points: &[Point2]) -> Result<Array2<f64>> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput {
            what: "distance_matrix",
        });
    }

    let n = points.len();
    let mut dm = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in i + 1..n {
            let dist = points[i].distance(&points[j]);
            dm[[i, j]] = dist;
            dm[[j, i]] = dist;
        }
    }

    Ok(dm)
}

/// Arithmetic mean of a point set.
pub fn centroid(points: &[Point2]) -> Result<Point2> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput { what: "centroid" });
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();

    Ok(Point2 {
        x: sum_x / n,
        y: sum_y / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        assert!(Point2::new(f64::NAN, 0.0).is_err());
        assert!(Point2::new(0.0, f64::INFINITY).is_err());
        assert!(Point2::new(0.0, f64::NEG_INFINITY).is_err());
        assert!(Point2::new(1.0, -2.5).is_ok());
    }

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point2::new(0.0, 0.0).unwrap();
        let b = Point2::new(3.0, 4.0).unwrap();
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.midpoint(&b), Point2::new(1.5, 2.0).unwrap());
    }

    #[test]
    fn test_distance_matrix_symmetry() {
        // Unit right triangle
        let points = vec![
            Point2::new(0.0, 0.0).unwrap(),
            Point2::new(1.0, 0.0).unwrap(),
            Point2::new(0.0, 1.0).unwrap(),
        ];

        let dm = distance_matrix(&points).unwrap();
        assert_eq!(dm[[0, 0]], 0.0);
        assert_eq!(dm[[0, 1]], 1.0);
        assert_eq!(dm[[1, 0]], 1.0);
        assert!((dm[[1, 2]] - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(distance_matrix(&[]).is_err());
        assert!(centroid(&[]).is_err());
    }

    #[test]
    fn test_translate_validates() {
        let p = Point2::new(1.0, 1.0).unwrap();
        let q = p.translate(Vec2::new(2.0, -1.0)).unwrap();
        assert_eq!(q, Point2::new(3.0, 0.0).unwrap());

        let far = Point2::new(f64::MAX, 0.0).unwrap();
        assert!(far.translate(Vec2::new(f64::MAX, 0.0)).is_err());
    }

    #[test]
    fn test_centroid() {
        let points = vec![
            Point2::new(0.0, 0.0).unwrap(),
            Point2::new(2.0, 0.0).unwrap(),
            Point2::new(1.0, 3.0).unwrap(),
        ];
        let c = centroid(&points).unwrap();
        assert!((c.x() - 1.0).abs() < 1e-12);
        assert!((c.y() - 1.0).abs() < 1e-12);
    }
}
