//! Frontier disciplines for the search loop.
//!
//! All three frontiers share one trait rather than an inheritance chain: the
//! priority frontier is not behaviorally a queue, it only happens to share
//! the membership and emptiness checks.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::SearchError;
use crate::maze::Coord;

use super::Node;

/// A node's priority against a fixed goal. Plain function pointers are
/// enough; the two heuristics in this crate capture nothing.
pub type PriorityFn = fn(&Node, Coord) -> usize;

/// An ordered collection of discovered-but-unexpanded search nodes.
pub trait Frontier {
    /// Adds a node to the frontier.
    fn add(&mut self, node: Rc<Node>);

    /// Removes and returns the next node per the frontier's discipline.
    fn remove(&mut self) -> Result<Rc<Node>, SearchError>;

    /// Checks whether the frontier is empty.
    fn is_empty(&self) -> bool;

    /// Checks whether any frontier node carries the given state. A linear
    /// scan; mazes are small enough that this never matters.
    fn contains_state(&self, state: Coord) -> bool;
}

/// LIFO frontier; drives depth-first search.
#[derive(Default)]
pub struct StackFrontier {
    nodes: Vec<Rc<Node>>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Rc<Node>) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<Rc<Node>, SearchError> {
        self.nodes.pop().ok_or(SearchError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: Coord) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }
}

/// FIFO frontier; drives breadth-first search.
#[derive(Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Rc<Node>>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Rc<Node>) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<Rc<Node>, SearchError> {
        self.nodes.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: Coord) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }
}

/// Minimum-priority frontier; drives greedy best-first search and A*.
///
/// `add` pushes then re-sorts the whole container. That is O(n log n) per
/// insertion, acceptable at maze scale, and the stable sort keeps
/// equal-priority nodes in insertion order, which fixes the tie-break
/// behavior of the resulting traces.
pub struct PriorityFrontier {
    nodes: Vec<Rc<Node>>,
    priority: PriorityFn,
    goal: Coord,
}

impl PriorityFrontier {
    pub fn new(priority: PriorityFn, goal: Coord) -> Self {
        Self {
            nodes: Vec::new(),
            priority,
            goal,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn add(&mut self, node: Rc<Node>) {
        self.nodes.push(node);
        let (priority, goal) = (self.priority, self.goal);
        self.nodes.sort_by_key(|node| priority(node, goal));
    }

    fn remove(&mut self) -> Result<Rc<Node>, SearchError> {
        if self.nodes.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }
        Ok(self.nodes.remove(0))
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: Coord) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }
}
