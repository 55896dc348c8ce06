//! Triangle state: validated sides, angles, and derived quantities.
//!
//! A `Triangle` is fully determined by its three side lengths. Every
//! constructor and setter funnels through [`Triangle::from_sides`], which
//! validates the triangle inequality and then recomputes the complete
//! derived state in one pass: angles, area, perimeter, medians, heights,
//! circumradius, inradius, canonical vertex coordinates, and circumcenter.
//!
//! ## Canonical Placement
//!
//! Vertex A sits at the origin, vertex B at `(c, 0)`, and vertex C in the
//! upper half-plane. Coordinates (and the circumcenter) are reported in
//! this frame. Side `a` is opposite vertex A, `b` opposite B, `c`
//! opposite C.

use crate::error::{check_angle, check_positive, GeometryError, Result};
use crate::geometry::Point2;

/// Relative tolerance for degeneracy checks (collinear side triples).
pub(crate) const GEOM_EPS: f64 = 1e-9;

/// Absolute tolerance, in degrees, for angle-sum validation.
pub(crate) const ANGLE_SUM_TOL: f64 = 1e-6;

/// Names the side/vertex pairs of a triangle: side `a` is opposite
/// vertex A, and the angle at vertex A is reported under the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    A,
    B,
    C,
}

impl Element {
    fn index(self) -> usize {
        match self {
            Element::A => 0,
            Element::B => 1,
            Element::C => 2,
        }
    }

    /// Cyclically next element (A → B → C → A).
    fn next(self) -> Self {
        match self {
            Element::A => Element::B,
            Element::B => Element::C,
            Element::C => Element::A,
        }
    }
}

/// Side-based classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Scalene,
}

/// A valid triangle with eagerly computed derived quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Sides (a, b, c), opposite vertices A, B, C.
    sides: [f64; 3],
    /// Interior angles at A, B, C in degrees.
    angles: [f64; 3],
    area: f64,
    perimeter: f64,
    /// Medians from A, B, C to the opposite side midpoints.
    medians: [f64; 3],
    /// Altitudes onto sides a, b, c.
    heights: [f64; 3],
    circumradius: f64,
    inradius: f64,
    /// Vertices A, B, C in the canonical placement.
    vertices: [Point2; 3],
    circumcenter: Point2,
}

impl Triangle {
    /// Build a triangle from three side lengths (the SSS case).
    ///
    /// Rejects non-finite or non-positive sides and any triple that
    /// violates the strict triangle inequality, including collinear
    /// triples where `a + b == c` within tolerance.
    pub fn from_sides(a: f64, b: f64, c: f64) -> Result<Self> {
        check_positive("side a", a)?;
        check_positive("side b", b)?;
        check_positive("side c", c)?;

        let scale = a.max(b).max(c);
        let slack = GEOM_EPS * scale;
        if a + b - c <= slack || b + c - a <= slack || c + a - b <= slack {
            return Err(GeometryError::TriangleInequality { a, b, c });
        }

        // Law of cosines; clamp guards acos against rounding past ±1.
        let cos_a = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
        let cos_b = ((c * c + a * a - b * b) / (2.0 * c * a)).clamp(-1.0, 1.0);
        let alpha = cos_a.acos();
        let beta = cos_b.acos();
        let gamma = std::f64::consts::PI - alpha - beta;

        let perimeter = a + b + c;
        let s = perimeter / 2.0;
        // Heron's formula. The inequality check above keeps the radicand
        // strictly positive.
        let area = (s * (s - a) * (s - b) * (s - c)).sqrt();

        let medians = [
            0.5 * (2.0 * b * b + 2.0 * c * c - a * a).sqrt(),
            0.5 * (2.0 * c * c + 2.0 * a * a - b * b).sqrt(),
            0.5 * (2.0 * a * a + 2.0 * b * b - c * c).sqrt(),
        ];
        let heights = [2.0 * area / a, 2.0 * area / b, 2.0 * area / c];

        let circumradius = (a * b * c) / (4.0 * area);
        let inradius = area / s;

        // Canonical frame: A at the origin, B on the positive x-axis.
        let vertex_a = Point2::ORIGIN;
        let vertex_b = Point2::new(c, 0.0)?;
        let vertex_c = Point2::new(b * alpha.cos(), b * alpha.sin())?;

        // Circumcenter lies on the perpendicular bisector of AB
        // (x = c/2); the y-coordinate follows from |OA| = R.
        let ox = c / 2.0;
        let oy = (vertex_c.x() * vertex_c.x() + vertex_c.y() * vertex_c.y()
            - c * vertex_c.x())
            / (2.0 * vertex_c.y());
        let circumcenter = Point2::new(ox, oy)?;

        Ok(Self {
            sides: [a, b, c],
            angles: [alpha.to_degrees(), beta.to_degrees(), gamma.to_degrees()],
            area,
            perimeter,
            medians,
            heights,
            circumradius,
            inradius,
            vertices: [vertex_a, vertex_b, vertex_c],
            circumcenter,
        })
    }

    /// Sides `(a, b, c)`.
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    pub fn side(&self, which: Element) -> f64 {
        self.sides[which.index()]
    }

    /// Interior angles at A, B, C in degrees; they sum to 180° within
    /// floating-point tolerance.
    pub fn angles_deg(&self) -> [f64; 3] {
        self.angles
    }

    pub fn angle_deg(&self, which: Element) -> f64 {
        self.angles[which.index()]
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn semiperimeter(&self) -> f64 {
        self.perimeter / 2.0
    }

    /// Median lengths from A, B, C.
    pub fn medians(&self) -> [f64; 3] {
        self.medians
    }

    /// Altitude lengths onto sides a, b, c.
    pub fn heights(&self) -> [f64; 3] {
        self.heights
    }

    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    pub fn inradius(&self) -> f64 {
        self.inradius
    }

    /// Vertices A, B, C in the canonical placement.
    pub fn vertices(&self) -> [Point2; 3] {
        self.vertices
    }

    /// Circumcenter in the canonical placement.
    pub fn circumcenter(&self) -> Point2 {
        self.circumcenter
    }

    /// Side-based classification, using the degeneracy tolerance to
    /// compare sides.
    pub fn kind(&self) -> TriangleKind {
        let [a, b, c] = self.sides;
        let tol = GEOM_EPS * a.max(b).max(c);
        let ab = (a - b).abs() <= tol;
        let bc = (b - c).abs() <= tol;
        let ca = (c - a).abs() <= tol;
        if ab && bc {
            TriangleKind::Equilateral
        } else if ab || bc || ca {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        }
    }

    /// True when some interior angle is 90° within tolerance.
    pub fn is_right(&self) -> bool {
        self.angles
            .iter()
            .any(|&ang| (ang - 90.0).abs() <= ANGLE_SUM_TOL)
    }

    /// Replace one side and re-solve the triangle (SSS with the other
    /// two sides unchanged). On error the triangle is left untouched.
    pub fn set_side(&mut self, which: Element, value: f64) -> Result<()> {
        let mut sides = self.sides;
        sides[which.index()] = value;
        *self = Self::from_sides(sides[0], sides[1], sides[2])?;
        Ok(())
    }

    /// Replace one angle and re-solve the triangle.
    ///
    /// The angle at the cyclically next vertex is held fixed, the third
    /// angle is re-derived from the 180° sum, and side `a` is held fixed
    /// so the remaining sides follow from the law of sines. On error the
    /// triangle is left untouched.
    pub fn set_angle(&mut self, which: Element, value_deg: f64) -> Result<()> {
        check_angle("angle", value_deg)?;

        let kept = self.angles[which.next().index()];
        let third = 180.0 - value_deg - kept;
        if third <= 0.0 {
            return Err(GeometryError::AngleSum {
                sum: value_deg + kept,
            });
        }

        let mut angles = [0.0; 3];
        angles[which.index()] = value_deg;
        angles[which.next().index()] = kept;
        angles[which.next().next().index()] = third;

        let [alpha, beta, gamma] = angles.map(f64::to_radians);
        let a = self.sides[0];
        let ratio = a / alpha.sin();
        *self = Self::from_sides(a, ratio * beta.sin(), ratio * gamma.sin())?;
        Ok(())
    }
}
