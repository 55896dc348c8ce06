//! Case-based analytic triangle solving.
//!
//! Each solver reduces its input case to three side lengths via the law
//! of cosines / law of sines, then defers to [`Triangle::from_sides`]
//! for validation and the full derived-state recompute:
//!
//! - SSS: three sides
//! - SAS: two sides and the included angle
//! - ASA: two angles and the included side
//! - AAS: two angles and a non-included side
//! - SSA: two sides and a non-included angle — the ambiguous case,
//!   which can admit zero, one, or two solutions
//!
//! ## The Ambiguous Case
//!
//! Given sides `a`, `b` and angle A opposite `a`, the law of sines gives
//! `sin B = b·sin A / a`. When that exceeds 1 no triangle exists; when it
//! equals 1 the triangle is right-angled at B and unique; otherwise both
//! `B` and its supplement `180° − B` are candidates, and the supplement
//! survives iff `A + (180° − B) < 180°`.

use crate::error::{check_angle, check_positive, GeometryError, Result};
use crate::triangle::state::{Triangle, ANGLE_SUM_TOL, GEOM_EPS};

/// Outcome of the ambiguous SSA case.
#[derive(Debug, Clone, PartialEq)]
pub struct SsaSolution {
    /// Solution with the acute candidate for angle B.
    pub primary: Triangle,
    /// Second solution (obtuse B), present only in the ambiguous case.
    pub alternate: Option<Triangle>,
}

impl SsaSolution {
    /// Number of distinct triangles compatible with the input.
    pub fn count(&self) -> usize {
        if self.alternate.is_some() {
            2
        } else {
            1
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.alternate.is_some()
    }
}

/// Solve from three sides.
pub fn solve_sss(a: f64, b: f64, c: f64) -> Result<Triangle> {
    Triangle::from_sides(a, b, c)
}

/// Solve from two sides and the included angle: sides `b` and `c`
/// enclosing the angle at vertex A (degrees).
pub fn solve_sas(b: f64, angle_a_deg: f64, c: f64) -> Result<Triangle> {
    check_positive("side b", b)?;
    check_positive("side c", c)?;
    check_angle("angle A", angle_a_deg)?;

    let alpha = angle_a_deg.to_radians();
    let a = (b * b + c * c - 2.0 * b * c * alpha.cos()).sqrt();
    Triangle::from_sides(a, b, c)
}

/// Solve from two angles and the included side: angles at A and B
/// (degrees) joined by side `c`.
pub fn solve_asa(angle_a_deg: f64, c: f64, angle_b_deg: f64) -> Result<Triangle> {
    check_angle("angle A", angle_a_deg)?;
    check_angle("angle B", angle_b_deg)?;
    check_positive("side c", c)?;

    let angle_c_deg = 180.0 - angle_a_deg - angle_b_deg;
    if angle_c_deg <= ANGLE_SUM_TOL {
        return Err(GeometryError::AngleSum {
            sum: angle_a_deg + angle_b_deg,
        });
    }

    let (alpha, beta, gamma) = (
        angle_a_deg.to_radians(),
        angle_b_deg.to_radians(),
        angle_c_deg.to_radians(),
    );
    let ratio = c / gamma.sin();
    Triangle::from_sides(ratio * alpha.sin(), ratio * beta.sin(), c)
}

/// Solve from two angles and a non-included side: angles at A and B
/// (degrees) plus side `a`, opposite the first angle.
pub fn solve_aas(angle_a_deg: f64, angle_b_deg: f64, a: f64) -> Result<Triangle> {
    check_angle("angle A", angle_a_deg)?;
    check_angle("angle B", angle_b_deg)?;
    check_positive("side a", a)?;

    let angle_c_deg = 180.0 - angle_a_deg - angle_b_deg;
    if angle_c_deg <= ANGLE_SUM_TOL {
        return Err(GeometryError::AngleSum {
            sum: angle_a_deg + angle_b_deg,
        });
    }

    let (alpha, beta, gamma) = (
        angle_a_deg.to_radians(),
        angle_b_deg.to_radians(),
        angle_c_deg.to_radians(),
    );
    let ratio = a / alpha.sin();
    Triangle::from_sides(a, ratio * beta.sin(), ratio * gamma.sin())
}

/// Solve the ambiguous case: sides `a`, `b` and angle A (degrees)
/// opposite side `a`.
pub fn solve_ssa(a: f64, b: f64, angle_a_deg: f64) -> Result<SsaSolution> {
    check_positive("side a", a)?;
    check_positive("side b", b)?;
    check_angle("angle A", angle_a_deg)?;

    let alpha = angle_a_deg.to_radians();
    let sin_b = b * alpha.sin() / a;

    if sin_b > 1.0 + GEOM_EPS {
        return Err(GeometryError::NoSolution {
            reason: "side a is shorter than the altitude from C",
        });
    }

    // Tangent case: B is a right angle and the solution is unique.
    let sin_b = sin_b.min(1.0);
    let angle_b_deg = sin_b.asin().to_degrees();

    let primary = triangle_from_aa_side(angle_a_deg, angle_b_deg, a)?;

    // Supplementary candidate for B; valid only if an angle remains for C
    // and it produces a genuinely different triangle. A candidate that
    // degenerates numerically is discarded, not reported as an error.
    let angle_b_alt = 180.0 - angle_b_deg;
    let alternate = if (angle_b_alt - angle_b_deg).abs() > ANGLE_SUM_TOL
        && angle_a_deg + angle_b_alt < 180.0 - ANGLE_SUM_TOL
    {
        triangle_from_aa_side(angle_a_deg, angle_b_alt, a).ok()
    } else {
        None
    };

    Ok(SsaSolution { primary, alternate })
}

/// AAS with the inputs already validated; angle C may be arbitrarily
/// small here, so degenerate outcomes surface as `TriangleInequality`.
fn triangle_from_aa_side(angle_a_deg: f64, angle_b_deg: f64, a: f64) -> Result<Triangle> {
    let angle_c_deg = 180.0 - angle_a_deg - angle_b_deg;
    if angle_c_deg <= 0.0 {
        return Err(GeometryError::AngleSum {
            sum: angle_a_deg + angle_b_deg,
        });
    }
    let (alpha, beta, gamma) = (
        angle_a_deg.to_radians(),
        angle_b_deg.to_radians(),
        angle_c_deg.to_radians(),
    );
    let ratio = a / alpha.sin();
    Triangle::from_sides(a, ratio * beta.sin(), ratio * gamma.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::state::Element;
    use rand::Rng;

    fn angle_sum(t: &Triangle) -> f64 {
        t.angles_deg().iter().sum()
    }

    #[test]
    fn test_sas_matches_sss() {
        // 3-4-5 built two ways
        let via_sss = solve_sss(3.0, 4.0, 5.0).unwrap();
        let angle_a = via_sss.angle_deg(Element::A);
        let via_sas = solve_sas(4.0, angle_a, 5.0).unwrap();

        for (s1, s2) in via_sss.sides().iter().zip(via_sas.sides().iter()) {
            assert!((s1 - s2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_asa() {
        // Two 45° angles over a unit base: right isosceles triangle.
        let t = solve_asa(45.0, 1.0, 45.0).unwrap();
        assert!((t.angle_deg(Element::C) - 90.0).abs() < 1e-9);
        let expected_leg = 1.0 / 2.0_f64.sqrt();
        assert!((t.side(Element::A) - expected_leg).abs() < 1e-12);
        assert!((t.side(Element::B) - expected_leg).abs() < 1e-12);
    }

    #[test]
    fn test_asa_rejects_angle_overflow() {
        assert!(matches!(
            solve_asa(120.0, 1.0, 60.0),
            Err(GeometryError::AngleSum { .. })
        ));
    }

    #[test]
    fn test_aas() {
        let t = solve_aas(30.0, 60.0, 1.0).unwrap();
        assert!((t.angle_deg(Element::C) - 90.0).abs() < 1e-9);
        // a / sin A = c / sin C ⇒ c = 2 for a = 1, A = 30°.
        assert!((t.side(Element::C) - 2.0).abs() < 1e-12);
        assert!((angle_sum(&t) - 180.0).abs() < ANGLE_SUM_TOL);
    }

    #[test]
    fn test_ssa_no_solution() {
        // Altitude from C is b·sin A = 8·sin 60° ≈ 6.93 > a = 2.
        assert!(matches!(
            solve_ssa(2.0, 8.0, 60.0),
            Err(GeometryError::NoSolution { .. })
        ));
    }

    #[test]
    fn test_ssa_unique_when_a_not_shorter_than_b() {
        // a ≥ b forces B acute: one solution.
        let sol = solve_ssa(10.0, 6.0, 50.0).unwrap();
        assert_eq!(sol.count(), 1);
        assert!(!sol.is_ambiguous());
        assert!((angle_sum(&sol.primary) - 180.0).abs() < ANGLE_SUM_TOL);
    }

    #[test]
    fn test_ssa_tangent_case_is_unique() {
        // a exactly equals the altitude b·sin A: right angle at B.
        let a = 6.0 * 30.0_f64.to_radians().sin(); // = 3.0
        let sol = solve_ssa(a, 6.0, 30.0).unwrap();
        assert_eq!(sol.count(), 1);
        assert!((sol.primary.angle_deg(Element::B) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_ssa_ambiguous_two_solutions() {
        // Classic ambiguous setup: A = 30°, b = 10, a = 6 (altitude 5).
        let sol = solve_ssa(6.0, 10.0, 30.0).unwrap();
        assert_eq!(sol.count(), 2);

        let alt = sol.alternate.as_ref().unwrap();
        let b1 = sol.primary.angle_deg(Element::B);
        let b2 = alt.angle_deg(Element::B);
        // The two B candidates are supplementary.
        assert!((b1 + b2 - 180.0).abs() < 1e-6);
        // Both are genuine triangles sharing a and the angle at A.
        assert!((angle_sum(&sol.primary) - 180.0).abs() < ANGLE_SUM_TOL);
        assert!((angle_sum(alt) - 180.0).abs() < ANGLE_SUM_TOL);
        assert!((alt.angle_deg(Element::A) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_random_inequality_violations_rejected() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let a = rng.random_range(0.1..100.0);
            let b = rng.random_range(0.1..100.0);
            // c at least the degenerate length a + b
            let c = a + b + rng.random_range(0.0..10.0);
            assert!(solve_sss(a, b, c).is_err(), "({}, {}, {}) accepted", a, b, c);
        }
    }

    #[test]
    fn test_random_valid_triples_angle_sum() {
        let mut rng = rand::rng();
        let mut checked = 0;
        while checked < 200 {
            let a = rng.random_range(0.1..100.0);
            let b = rng.random_range(0.1..100.0);
            let c = rng.random_range(0.1..100.0);
            if let Ok(t) = solve_sss(a, b, c) {
                assert!(
                    (angle_sum(&t) - 180.0).abs() < ANGLE_SUM_TOL,
                    "angle sum {} for ({}, {}, {})",
                    angle_sum(&t),
                    a,
                    b,
                    c
                );
                checked += 1;
            }
        }
    }

    #[test]
    fn test_all_cases_angle_sum() {
        let triangles = vec![
            solve_sss(5.0, 6.0, 7.0).unwrap(),
            solve_sas(5.0, 70.0, 6.0).unwrap(),
            solve_asa(40.0, 3.0, 75.0).unwrap(),
            solve_aas(25.0, 35.0, 2.0).unwrap(),
            solve_ssa(6.0, 10.0, 30.0).unwrap().primary,
        ];
        for t in &triangles {
            assert!(
                (angle_sum(t) - 180.0).abs() < ANGLE_SUM_TOL,
                "angle sum {} out of tolerance",
                angle_sum(t)
            );
        }
    }
}
