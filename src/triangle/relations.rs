//! Congruence and similarity checks between solved triangles.
//!
//! Two triangles are compared up to relabeling of their vertices, so
//! every check scans all six vertex correspondences (three rotations,
//! with and without reflection). Side comparisons use a relative
//! tolerance; angle comparisons use an absolute tolerance in degrees.

use crate::triangle::state::{Triangle, ANGLE_SUM_TOL, GEOM_EPS};

const PERMS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [1, 2, 0],
    [2, 0, 1],
    [0, 2, 1],
    [2, 1, 0],
    [1, 0, 2],
];

fn sides_close(x: f64, y: f64) -> bool {
    (x - y).abs() <= GEOM_EPS * x.abs().max(y.abs()).max(1.0)
}

fn angles_close(x: f64, y: f64) -> bool {
    (x - y).abs() <= ANGLE_SUM_TOL
}

/// SSS congruence: some correspondence matches all three sides.
pub fn congruent_sss(t1: &Triangle, t2: &Triangle) -> bool {
    let s1 = t1.sides();
    let s2 = t2.sides();
    PERMS
        .iter()
        .any(|p| (0..3).all(|i| sides_close(s1[i], s2[p[i]])))
}

/// SAS congruence: some correspondence matches two sides and the angle
/// between them.
///
/// For solved triangles this is equivalent to SSS congruence, but the
/// check compares exactly the SAS data: sides `b`, `c` and the included
/// angle at A, under each correspondence.
pub fn congruent_sas(t1: &Triangle, t2: &Triangle) -> bool {
    let (s1, a1) = (t1.sides(), t1.angles_deg());
    let (s2, a2) = (t2.sides(), t2.angles_deg());
    PERMS.iter().any(|p| {
        sides_close(s1[1], s2[p[1]])
            && sides_close(s1[2], s2[p[2]])
            && angles_close(a1[0], a2[p[0]])
    })
}

/// ASA congruence: some correspondence matches two angles and the side
/// between them (angles at A and B, side `c`).
pub fn congruent_asa(t1: &Triangle, t2: &Triangle) -> bool {
    let (s1, a1) = (t1.sides(), t1.angles_deg());
    let (s2, a2) = (t2.sides(), t2.angles_deg());
    PERMS.iter().any(|p| {
        angles_close(a1[0], a2[p[0]])
            && angles_close(a1[1], a2[p[1]])
            && sides_close(s1[2], s2[p[2]])
    })
}

/// AA similarity: returns the scale factor `k` with
/// `t2.sides ≈ k · t1.sides` under the matching correspondence, or
/// `None` when the triangles are not similar.
pub fn similar(t1: &Triangle, t2: &Triangle) -> Option<f64> {
    let (s1, a1) = (t1.sides(), t1.angles_deg());
    let (s2, a2) = (t2.sides(), t2.angles_deg());

    for p in &PERMS {
        if (0..3).all(|i| angles_close(a1[i], a2[p[i]])) {
            // Angles match; report the side ratio, averaged across the
            // three pairs to smooth floating-point noise.
            let k = (0..3).map(|i| s2[p[i]] / s1[i]).sum::<f64>() / 3.0;
            return Some(k);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::solver::{solve_sas, solve_sss};

    #[test]
    fn test_congruent_up_to_relabeling() {
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t2 = solve_sss(5.0, 3.0, 4.0).unwrap();
        assert!(congruent_sss(&t1, &t2));
        assert!(congruent_sas(&t1, &t2));
        assert!(congruent_asa(&t1, &t2));
    }

    #[test]
    fn test_not_congruent() {
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t2 = solve_sss(3.0, 4.0, 6.0).unwrap();
        assert!(!congruent_sss(&t1, &t2));
        assert!(!congruent_sas(&t1, &t2));
        assert!(!congruent_asa(&t1, &t2));
    }

    #[test]
    fn test_similarity_scale_factor() {
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t2 = solve_sss(6.0, 8.0, 10.0).unwrap();
        let k = similar(&t1, &t2).expect("scaled copy must be similar");
        assert!((k - 2.0).abs() < 1e-9);

        // Similarity is symmetric with reciprocal ratio.
        let k_inv = similar(&t2, &t1).unwrap();
        assert!((k_inv - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_similar_but_not_congruent() {
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t2 = solve_sss(30.0, 40.0, 50.0).unwrap();
        assert!(similar(&t1, &t2).is_some());
        assert!(!congruent_sss(&t1, &t2));
    }

    #[test]
    fn test_dissimilar_triangles() {
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t2 = solve_sss(4.0, 4.0, 4.0).unwrap();
        assert!(similar(&t1, &t2).is_none());
    }

    #[test]
    fn test_congruence_across_solver_cases() {
        // Same triangle reached through different data.
        let t1 = solve_sss(3.0, 4.0, 5.0).unwrap();
        let angle_a = t1.angles_deg()[0];
        let t2 = solve_sas(4.0, angle_a, 5.0).unwrap();
        assert!(congruent_sss(&t1, &t2));
        let k = similar(&t1, &t2).unwrap();
        assert!((k - 1.0).abs() < 1e-9);
    }
}
