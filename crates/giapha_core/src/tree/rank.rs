//! Structural rank assignment for layered top-to-bottom rendering.
//!
//! # Responsibility
//! - Assign every forest node an integer layer, 0 at roots.
//!
//! # Invariants
//! - `rank(child) == rank(parent) + 1` for every parent/child edge, so no
//!   edge skips a layer or points upward.
//! - Ranks derive from tree structure only; the author-asserted `generation`
//!   field feeds styling and labels, never layout, and the two values may
//!   diverge without being an error.

use crate::tree::forest::Forest;
use std::collections::VecDeque;

/// Assigns breadth-first structural ranks to every forest node.
///
/// Returns a vector parallel to [`Forest::nodes`]; `ranks[i]` is the layer
/// of node `i`. The forest guarantees full reachability from its roots, so
/// every slot is written exactly once.
pub fn assign_ranks(forest: &Forest) -> Vec<u32> {
    let mut ranks = vec![0u32; forest.len()];
    let mut queue: VecDeque<usize> = forest.roots().iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        let child_rank = ranks[current] + 1;
        for &child in &forest.nodes()[current].children {
            ranks[child] = child_rank;
            queue.push_back(child);
        }
    }

    ranks
}
