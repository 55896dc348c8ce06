//! Container Module: Ordered and Linked Structures
//!
//! - `bst`: a non-self-balancing binary search tree with O(depth)
//!   operations, the classical traversal orders, and a deterministic
//!   median-split rebuild
//! - `graph`: a generic undirected adjacency-list graph with BFS/DFS
//!   traversal and union-find component counting
//!
//! Both containers own their contents exclusively; dropping them frees
//! every node without recursing.

mod bst;
mod graph;

pub use bst::{Bst, Iter as BstIter};
pub use graph::Graph;
