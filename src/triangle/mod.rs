//! Triangle Module: Analytic Multi-Case Solving
//!
//! Closed-form triangle solving via the laws of sines and cosines:
//!
//! - `state`: the validated [`Triangle`] with eagerly recomputed derived
//!   quantities (area, medians, heights, circumcenter, ...)
//! - `solver`: the five classical cases — SSS, SAS, ASA, AAS, and the
//!   ambiguous SSA case with its alternate solution
//! - `relations`: congruence (SSS/SAS/ASA) and AA similarity checks
//!
//! ## Validity Invariants
//!
//! A [`Triangle`] value always satisfies the strict triangle inequality
//! and carries angles summing to 180° within tolerance. Setters perform
//! a full re-solve and leave the value untouched on error, so the
//! invariants can never be observed broken.

mod relations;
mod solver;
mod state;

pub use relations::{congruent_asa, congruent_sas, congruent_sss, similar};
pub use solver::{solve_aas, solve_asa, solve_sas, solve_ssa, solve_sss, SsaSolution};
pub use state::{Element, Triangle, TriangleKind};
