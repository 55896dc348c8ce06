//! # geo-solvers
//!
//! Closed-form plane geometry solvers and ordered containers.
//!
//! ## What's Here
//!
//! 1. **Triangle solving**: the five classical cases (SSS, SAS, ASA,
//!    AAS, and the ambiguous SSA case with its alternate solution),
//!    solved analytically via the laws of sines and cosines. A solved
//!    [`Triangle`] eagerly carries its derived quantities: area,
//!    perimeter, medians, altitudes, circumradius, inradius, and the
//!    circumcenter in a canonical vertex placement.
//!
//! 2. **Geometry primitives**: validated [`Point2`] (finite coordinates
//!    enforced at construction), [`Vec2`] with the usual products, and
//!    point-cloud helpers (pairwise distance matrix, centroid).
//!
//! 3. **Containers**: a generic binary search tree ([`Bst`]) with the
//!    classical traversal orders and a deterministic median-split
//!    rebalance, plus an undirected adjacency-list [`Graph`] with
//!    BFS/DFS and union-find component counting.
//!
//! ## Validity Discipline
//!
//! Construction is the single validation boundary. Every fallible
//! constructor and solver returns [`GeometryError`] through the crate
//! [`Result`]; a value that exists upholds its invariants (triangle
//! inequality, 180° angle sum, finite coordinates, sorted in-order
//! traversal), so accessors are infallible.
//!
//! ## Example
//!
//! ```
//! use geo_solvers::{solve_ssa, Element};
//!
//! // The ambiguous case: two triangles share a = 6, b = 10, A = 30°.
//! let solution = solve_ssa(6.0, 10.0, 30.0).unwrap();
//! assert!(solution.is_ambiguous());
//!
//! let b1 = solution.primary.angle_deg(Element::B);
//! let b2 = solution.alternate.as_ref().unwrap().angle_deg(Element::B);
//! assert!((b1 + b2 - 180.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod geometry;
pub mod tree;
pub mod triangle;

// Re-exports from error
pub use error::{GeometryError, Result};

// Re-exports from geometry
pub use geometry::{centroid, distance_matrix, Point2, Vec2};

// Re-exports from triangle
pub use triangle::{
    // Solver cases
    solve_aas,
    solve_asa,
    solve_sas,
    solve_ssa,
    solve_sss,
    SsaSolution,
    // State and derived quantities
    Element,
    Triangle,
    TriangleKind,
    // Congruence and similarity
    congruent_asa,
    congruent_sas,
    congruent_sss,
    similar,
};

// Re-exports from tree
pub use tree::{Bst, BstIter, Graph};
