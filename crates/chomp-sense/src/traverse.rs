//! The traversal primitive shared by every sensor query.
//!
//! A [`Traversal`] owns a visited set over graph nodes. Queries seed it,
//! optionally pre-mark tiles they must not walk back through, and then run
//! [`breadth_first`](Traversal::breadth_first) with three knobs:
//!
//! - an accumulator inherited from the discovering parent (unit, pellet
//!   points, first-step direction)
//! - a goal predicate evaluated when a node is dequeued, not when it is
//!   discovered, so it always sees the current entity snapshot
//! - an optional hop bound past which nodes are checked but not expanded
//!
//! Discovery is FIFO and neighbours are expanded in edge order, so the first
//! node to reach a tile fixes that tile's accumulator.

use chomp_space::{Edge, MazeGraph, NodeId};
use std::collections::VecDeque;

/// A node together with its hop count and accumulated value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Visit<A> {
    pub node: NodeId,
    pub hops: u32,
    pub acc: A,
}

impl<A> Visit<A> {
    pub fn new(node: NodeId, hops: u32, acc: A) -> Self {
        Self { node, hops, acc }
    }
}

pub(crate) struct Traversal<'g> {
    graph: &'g MazeGraph,
    visited: Vec<bool>,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g MazeGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.node_count()],
        }
    }

    /// Mark `node` visited. Returns `true` if it was not visited before.
    pub fn mark(&mut self, node: NodeId) -> bool {
        !std::mem::replace(&mut self.visited[node.index()], true)
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node.index()]
    }

    /// Neighbours of `node` not yet visited, in edge order.
    pub fn unvisited(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .edges(node)
            .iter()
            .map(|e| e.to)
            .filter(move |&n| !self.is_visited(n))
    }

    /// The single unvisited neighbour of `node`, or `None` if it has zero or
    /// several.
    pub fn sole_unvisited(&self, node: NodeId) -> Option<NodeId> {
        let mut it = self.unvisited(node);
        match (it.next(), it.next()) {
            (Some(next), None) => Some(next),
            _ => None,
        }
    }

    /// Breadth-first search from `seeds` until `is_goal` accepts a dequeued
    /// visit.
    ///
    /// Seeds are marked and enqueued in the order given; a seed repeating an
    /// earlier seed's node is dropped. A seed the caller already marked is
    /// still enqueued, so a search can resume from the end of a walk. A
    /// discovered node
    /// takes `inherit(parent, edge)` as its accumulator and `parent.hops + 1`
    /// as its hop count. With `max_hops` set, visits at that depth are still
    /// checked against the goal but not expanded.
    pub fn breadth_first<A>(
        &mut self,
        seeds: impl IntoIterator<Item = Visit<A>>,
        max_hops: Option<u32>,
        mut inherit: impl FnMut(&Visit<A>, &Edge) -> A,
        mut is_goal: impl FnMut(&Visit<A>) -> bool,
    ) -> Option<Visit<A>> {
        let graph = self.graph;
        let mut queue: VecDeque<Visit<A>> = VecDeque::new();
        for seed in seeds {
            if queue.iter().any(|v| v.node == seed.node) {
                continue;
            }
            self.mark(seed.node);
            queue.push_back(seed);
        }

        while let Some(visit) = queue.pop_front() {
            if is_goal(&visit) {
                return Some(visit);
            }
            if max_hops.is_some_and(|limit| visit.hops >= limit) {
                continue;
            }
            for edge in graph.edges(visit.node) {
                if self.mark(edge.to) {
                    let acc = inherit(&visit, edge);
                    queue.push_back(Visit::new(edge.to, visit.hops + 1, acc));
                }
            }
        }
        None
    }
}
