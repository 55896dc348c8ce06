//! Binary search tree with exclusively owned nodes.
//!
//! A non-self-balancing BST: every node owns its children through `Box`,
//! so dropping the tree (or calling [`Bst::clear`]) frees the whole
//! structure. Lookups and inserts are iterative and cost O(depth).
//!
//! ## Ordering Invariant
//!
//! For every node, all values in its left subtree compare strictly less
//! than the node's value and all values in its right subtree strictly
//! greater. Duplicates are rejected at insert, so an in-order traversal
//! is strictly sorted at all times.
//!
//! ## Rebalancing
//!
//! [`Bst::rebalance`] rebuilds the tree from its flattened in-order
//! sequence by recursive median splitting. The rebuild is deterministic,
//! runs in O(n), and always produces a height-balanced tree (unlike a
//! shuffled reinsertion, which balances only in expectation).

use std::cmp::Ordering;
use std::collections::VecDeque;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A binary search tree over any `Ord` type.
pub struct Bst<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> Bst<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a value. Returns `false` (leaving the tree unchanged) if
    /// an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *link = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    /// True if an equal value is present.
    pub fn contains(&self, target: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            match target.cmp(&node.value) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Remove and return the value equal to `target`, if present.
    ///
    /// A node with two children is replaced by its in-order successor,
    /// so the ordering invariant is preserved.
    pub fn remove(&mut self, target: &T) -> Option<T> {
        let removed = remove_node(&mut self.root, target);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Rebuild the tree from its sorted in-order sequence by median
    /// splitting. Afterwards [`Bst::is_balanced`] holds and the height
    /// is minimal.
    pub fn rebalance(&mut self) {
        let mut values = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut values);
        self.root = build_balanced(values);
    }
}

impl<T> Bst<T> {
    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        fn depth<T>(link: &Link<T>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
            }
        }
        depth(&self.root)
    }

    /// True if at every node the heights of the two subtrees differ by
    /// at most one. The empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root).is_some()
    }

    /// Remove every value, freeing all nodes.
    pub fn clear(&mut self) {
        // Drop iteratively so a degenerate chain cannot blow the stack.
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
        self.len = 0;
    }

    /// In-order iterator (sorted order).
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Values in sorted (in-order) sequence.
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Values in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                out.push(&node.value);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                walk(&node.right, out);
                out.push(&node.value);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// Values level by level, left to right within each level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Consume the tree into its sorted value sequence.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        drain_in_order(self.root.take(), &mut values);
        self.len = 0;
        values
    }
}

fn remove_node<T: Ord>(link: &mut Link<T>, target: &T) -> Option<T> {
    match link {
        None => None,
        Some(node) if *target < node.value => remove_node(&mut node.left, target),
        Some(node) if *target > node.value => remove_node(&mut node.right, target),
        Some(_) => {
            let mut node = link.take()?;
            Some(match (node.left.take(), node.right.take()) {
                (None, None) => node.value,
                (Some(child), None) | (None, Some(child)) => {
                    *link = Some(child);
                    node.value
                }
                (left, mut right) => {
                    // Two children: splice the in-order successor (the
                    // minimum of the right subtree) into this node.
                    node.left = left;
                    match pop_min(&mut right) {
                        Some(successor) => {
                            node.right = right;
                            let removed = std::mem::replace(&mut node.value, successor);
                            *link = Some(node);
                            removed
                        }
                        // Unreachable: the right subtree is non-empty.
                        None => node.value,
                    }
                }
            })
        }
    }
}

/// Detach and return the minimum value of the subtree.
fn pop_min<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        pop_min(&mut link.as_mut()?.left)
    } else {
        let node = link.take()?;
        *link = node.right;
        Some(node.value)
    }
}

/// Consume a subtree into `out` in sorted order, iteratively.
fn drain_in_order<T>(root: Link<T>, out: &mut Vec<T>) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(mut node) => {
                current = node.right.take();
                out.push(node.value);
            }
            None => break,
        }
    }
}

/// Build a height-balanced tree from sorted values by median splitting.
fn build_balanced<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    let right_half = values.split_off(mid + 1);
    let value = values.pop()?;
    Some(Box::new(Node {
        value,
        left: build_balanced(values),
        right: build_balanced(right_half),
    }))
}

/// Height of the subtree if it is balanced at every node, else `None`.
fn balanced_height<T>(link: &Link<T>) -> Option<usize> {
    match link {
        None => Some(0),
        Some(node) => {
            let left = balanced_height(&node.left)?;
            let right = balanced_height(&node.right)?;
            if left.abs_diff(right) <= 1 {
                Some(left.max(right) + 1)
            } else {
                None
            }
        }
    }
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// In-order borrowing iterator with an explicit stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
