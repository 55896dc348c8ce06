//! Generic undirected graph over adjacency lists.
//!
//! Nodes are addressed by the dense `usize` id returned from
//! [`Graph::add_node`]. Edges are undirected; parallel edges are
//! permitted (they do not affect traversal order beyond repetition in
//! the adjacency list, since visited nodes are skipped).

use std::collections::VecDeque;

/// Undirected adjacency-list graph carrying a value per node.
pub struct Graph<T> {
    values: Vec<T>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, value: T) -> usize {
        self.values.push(value);
        self.adjacency.push(Vec::new());
        self.values.len() - 1
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.values.len();
        assert!(u < n && v < n, "edge ({}, {}) references a missing node", u, v);
        self.adjacency[u].push(v);
        if u != v {
            self.adjacency[v].push(u);
        }
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Value stored at a node.
    pub fn value(&self, id: usize) -> Option<&T> {
        self.values.get(id)
    }

    /// Adjacency list of a node (neighbor ids in insertion order).
    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.adjacency[id]
    }

    /// Breadth-first visit order from `start`, restricted to the
    /// connected component containing it.
    pub fn bfs(&self, start: usize) -> Vec<usize> {
        let mut order = Vec::new();
        let mut visited = vec![false; self.values.len()];
        if start >= self.values.len() {
            return order;
        }

        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Depth-first visit order from `start` (iterative, neighbors
    /// explored in insertion order).
    pub fn dfs(&self, start: usize) -> Vec<usize> {
        let mut order = Vec::new();
        let mut visited = vec![false; self.values.len()];
        if start >= self.values.len() {
            return order;
        }

        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            order.push(node);
            // Reverse push so the first-inserted neighbor is visited first.
            for &next in self.adjacency[node].iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
        order
    }

    /// Number of connected components, via union-find with union by rank.
    pub fn connected_components(&self) -> usize {
        let n = self.values.len();
        let mut parent: Vec<usize> = (0..n).collect();
        let mut rank = vec![0usize; n];

        fn find(parent: &mut [usize], i: usize) -> usize {
            if parent[i] != i {
                parent[i] = find(parent, parent[i]);
            }
            parent[i]
        }

        fn union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
            let rx = find(parent, x);
            let ry = find(parent, y);
            if rx != ry {
                if rank[rx] < rank[ry] {
                    parent[rx] = ry;
                } else {
                    if rank[rx] == rank[ry] {
                        rank[rx] += 1;
                    }
                    parent[ry] = rx;
                }
            }
        }

        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                union(&mut parent, &mut rank, u, v);
            }
        }

        let mut roots = std::collections::HashSet::new();
        for i in 0..n {
            roots.insert(find(&mut parent, i));
        }
        roots.len()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> Graph<usize> {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_node(i);
        }
        for i in 1..n {
            g.add_edge(i - 1, i);
        }
        g
    }

    #[test]
    fn test_counts() {
        let g = path_graph(5);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert_eq!(g.value(3), Some(&3));
        assert_eq!(g.value(9), None);
    }

    #[test]
    fn test_bfs_layers() {
        //   0 - 1 - 3
        //   |
        //   2 - 4
        let mut g = Graph::new();
        for i in 0..5 {
            g.add_node(i);
        }
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 4);

        assert_eq!(g.bfs(0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_depth_first() {
        let mut g = Graph::new();
        for i in 0..5 {
            g.add_node(i);
        }
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 4);

        assert_eq!(g.dfs(0), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_traversal_stays_in_component() {
        let mut g = path_graph(3);
        // Detached pair
        let a = g.add_node(100);
        let b = g.add_node(101);
        g.add_edge(a, b);

        assert_eq!(g.bfs(0).len(), 3);
        assert_eq!(g.dfs(a), vec![a, b]);
    }

    #[test]
    fn test_connected_components() {
        let mut g = path_graph(4);
        assert_eq!(g.connected_components(), 1);

        g.add_node(99);
        assert_eq!(g.connected_components(), 2);

        let isolated = g.add_node(100);
        assert_eq!(g.connected_components(), 3);
        g.add_edge(isolated, 0);
        assert_eq!(g.connected_components(), 2);
    }

    #[test]
    #[should_panic(expected = "missing node")]
    fn test_edge_to_missing_node_panics() {
        let mut g = path_graph(2);
        g.add_edge(0, 7);
    }
}
