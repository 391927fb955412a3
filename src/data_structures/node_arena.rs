use std::collections::HashMap;

use crate::common::cell::Cell;

/// Handle to a [SearchNode] stored in a [NodeArena].
///
/// Handles are assigned in creation order, so comparing two handles
/// tells which node was discovered first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Bookkeeping for a single discovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    cell: Cell,
    g: f64,
    h: f64,
    parent: Option<NodeHandle>,
    closed: bool,
}

impl SearchNode {
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Accumulated cost from the start to this cell along the best path found so far.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate from this cell to the goal.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Total estimated cost through this cell, always derived from `g + h`.
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Whether the node has been expanded and moved to the closed set.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Owns every [SearchNode] created during one search.
///
/// Nodes are never removed; parent links are handles into the same
/// arena, so the whole tree is freed together when the arena is dropped.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
    index: HashMap<Cell, NodeHandle>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the handle of the node for `cell`, if one has been created.
    pub fn handle_of(&self, cell: Cell) -> Option<NodeHandle> {
        self.index.get(&cell).copied()
    }

    pub fn get(&self, handle: NodeHandle) -> &SearchNode {
        &self.nodes[handle.0]
    }

    /// Creates a new open node for `cell`.
    ///
    /// Panics in debug builds if `cell` already has a node.
    pub fn insert(&mut self, cell: Cell, g: f64, h: f64, parent: Option<NodeHandle>) -> NodeHandle {
        debug_assert!(
            !self.index.contains_key(&cell),
            "cell {cell} discovered twice"
        );
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(SearchNode {
            cell,
            g,
            h,
            parent,
            closed: false,
        });
        self.index.insert(cell, handle);
        handle
    }

    /// Records a cheaper path to an open node.
    pub fn update_node(&mut self, handle: NodeHandle, g: f64, parent: NodeHandle) {
        let node = &mut self.nodes[handle.0];
        debug_assert!(!node.closed, "closed cell {} was reopened", node.cell);
        debug_assert!(g < node.g, "update for {} does not lower its cost", node.cell);
        node.g = g;
        node.parent = Some(parent);
    }

    /// Moves a node from the open set to the closed set.
    pub fn close(&mut self, handle: NodeHandle) {
        let node = &mut self.nodes[handle.0];
        debug_assert!(!node.closed, "cell {} closed twice", node.cell);
        node.closed = true;
    }

    /// Whether `cell` has been expanded.
    pub fn is_closed(&self, cell: Cell) -> bool {
        self.handle_of(cell)
            .is_some_and(|handle| self.nodes[handle.0].closed)
    }

    /// Walks parent links from `end` back to the root and returns the
    /// cells in root-to-`end` order.
    pub fn path_to(&self, end: NodeHandle) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = Some(end);

        while let Some(handle) = current {
            debug_assert!(path.len() <= self.nodes.len(), "cycle in parent links");
            let node = &self.nodes[handle.0];
            path.push(node.cell);
            current = node.parent;
        }

        path.reverse();
        path
    }
}
