//! Geometry Module: Points, Vectors, and Point-Cloud Helpers
//!
//! The primitive value types for everything else in the crate:
//!
//! - `Vec2`: displacement/direction in the plane, with dot and
//!   perpendicular-dot products
//! - `Point2`: a validated location (finite coordinates enforced at
//!   construction)
//! - `distance_matrix` / `centroid`: bulk helpers over point sets
//!
//! ## Validation Boundary
//!
//! Construction is the single validation point. A `Point2` that exists
//! holds finite coordinates, so distances, midpoints, and the pairwise
//! distance matrix never have to re-check their inputs.

mod point;
mod vector;

pub use point::{centroid, distance_matrix, Point2};
pub use vector::Vec2;
