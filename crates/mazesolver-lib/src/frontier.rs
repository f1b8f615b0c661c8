//! Frontier containers for the search engine.
//!
//! Both containers satisfy the same [`Frontier`] contract so the engine's
//! traversal loop can stay generic over them. Neither container deduplicates
//! cells; the engine's visited set discards stale entries on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Cell;

/// A discovered cell waiting to be expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub cell: Cell,
    /// Cell this node was discovered from; `None` for the start.
    pub parent: Option<Cell>,
    /// Path cost from the start.
    pub g: u32,
    /// Evaluation score used by priority ordering.
    pub score: f64,
}

impl SearchNode {
    pub fn start(cell: Cell, score: f64) -> Self {
        Self {
            cell,
            parent: None,
            g: 0,
            score,
        }
    }
}

/// Capability contract shared by every frontier.
pub trait Frontier {
    fn push(&mut self, node: SearchNode);

    fn pop(&mut self) -> Option<SearchNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out frontier for depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.nodes.pop()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Min-priority frontier keyed by [`SearchNode::score`].
///
/// Equal scores pop in insertion order so that runs are reproducible.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<PriorityEntry>,
    next_sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: SearchNode) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(PriorityEntry {
            score: FloatOrd(node.score),
            sequence,
            node,
        });
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug)]
struct PriorityEntry {
    score: FloatOrd,
    sequence: u64,
    node: SearchNode,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry {}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by score, then by
        // sequence number.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
