// https://en.wikipedia.org/wiki/A*_search_algorithm

// Heap ordering adapted from: https://doc.rust-lang.org/nightly/std/collections/binary_heap/index.html#examples

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicBool};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::common::cell::Cell;
use crate::common::error::{Endpoint, PathError, Result};
use crate::common::traits::Passable;
use crate::data_structures::{NodeArena, NodeHandle};
use crate::utils::heuristics::{euclidean_distance, heuristic_euclidean};
use crate::utils::neighbors::cell_neighbors;

/// Tuning knobs for a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of node expansions before the search gives up.
    pub max_ops: u32,
    /// Skip obstructed cells when expanding neighbors.
    ///
    /// When false every in-bounds cell is treated as traversable and
    /// obstruction flags are ignored entirely.
    pub respect_obstructions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ops: u32::MAX,
            respect_obstructions: true,
        }
    }
}

impl SearchConfig {
    pub fn with_max_ops(mut self, max_ops: u32) -> Self {
        self.max_ops = max_ops;
        self
    }

    pub fn with_respect_obstructions(mut self, respect_obstructions: bool) -> Self {
        self.respect_obstructions = respect_obstructions;
        self
    }
}

/// How a search terminated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The goal was reached.
    Succeeded,
    /// Every reachable cell was expanded without reaching the goal.
    Exhausted,
    /// The expansion budget ran out first.
    Halted,
    /// The caller's cancellation flag was raised.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AStarSearchResults {
    ops_used: u32,
    cost: Option<f64>,
    outcome: SearchOutcome,
    path: Vec<Cell>,
}

impl AStarSearchResults {
    /// The number of expand node operations used
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    /// The movement cost of the result path, or None if no path was found
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Whether the search ended without reaching the goal
    pub fn incomplete(&self) -> bool {
        self.outcome != SearchOutcome::Succeeded
    }

    /// A shortest path from the start cell to the goal cell, both inclusive.
    ///
    /// Empty if the search did not succeed.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Cell> {
        self.path
    }

    fn failed(outcome: SearchOutcome, ops_used: u32) -> Self {
        Self {
            ops_used,
            cost: None,
            outcome,
            path: Vec::new(),
        }
    }
}

/// Open set entry.
///
/// A node whose cost was lowered gets a fresh entry; the older one is
/// skipped when popped because the node is closed by then.
#[derive(Copy, Clone)]
struct State {
    f_score: f64,
    handle: NodeHandle,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on costs.
        // Ties go to the node discovered first.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.handle.cmp(&self.handle))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Finds a shortest 8-connected path from `start` to `goal` with default settings.
///
/// Returns an empty path if the goal can't be reached, and `[start]` if
/// `start == goal`.
///
/// # Example
/// ```rust
/// use grid_astar::{find_path, Cell, Grid};
///
/// let grid = Grid::new(3, 3);
/// let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
///
/// assert_eq!(path, vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
/// ```
pub fn find_path<G: Passable>(grid: &G, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
    shortest_path(grid, start, goal, &SearchConfig::default()).map(AStarSearchResults::into_path)
}

/// Calculates a shortest path from `start` to `goal` using the A* algorithm.
///
/// Moves go to any of the 8 surrounding cells, each costing the straight-line
/// distance it covers, and the same distance to the goal is the heuristic.
///
/// Returns an error if either endpoint lies outside the grid. A goal that
/// can't be reached is not an error: the results carry an empty path and an
/// outcome other than [SearchOutcome::Succeeded].
///
/// # Example
/// ```rust
/// use grid_astar::{shortest_path, Cell, Grid, SearchConfig, SearchOutcome};
///
/// let grid: Grid = "
///     . . . .
///     ## # # .
///     . . . .
/// ".parse().unwrap();
///
/// let search_results = shortest_path(
///     &grid,
///     Cell::new(0, 0),
///     Cell::new(0, 2),
///     &SearchConfig::default(),
/// ).unwrap();
///
/// if !search_results.incomplete() {
///   let path = search_results.path();
///   println!("Path: {:?}", path);
/// }
/// else {
///   println!("Could not find A* shortest path.");
///   println!("Search Results: {:?}", search_results);
/// }
///
/// assert_eq!(search_results.outcome(), SearchOutcome::Succeeded);
/// assert_eq!(search_results.path().len(), 7);
/// ```
pub fn shortest_path<G: Passable>(
    grid: &G,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
) -> Result<AStarSearchResults> {
    run_search(grid, start, goal, config, || false)
}

/// Same as [shortest_path], but polls `cancel` before every pop from the
/// open set, including pops of outdated entries that are skipped, and stops
/// with [SearchOutcome::Cancelled] as soon as it is set.
pub fn shortest_path_cancellable<G: Passable>(
    grid: &G,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
    cancel: &AtomicBool,
) -> Result<AStarSearchResults> {
    run_search(grid, start, goal, config, || {
        cancel.load(atomic::Ordering::Relaxed)
    })
}

fn check_in_bounds<G: Passable>(grid: &G, endpoint: Endpoint, cell: Cell) -> Result<()> {
    if grid.in_bounds(cell) {
        Ok(())
    } else {
        Err(PathError::OutOfBounds {
            endpoint,
            cell,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

fn run_search<G, C>(
    grid: &G,
    start: Cell,
    goal: Cell,
    config: &SearchConfig,
    should_cancel: C,
) -> Result<AStarSearchResults>
where
    G: Passable,
    C: Fn() -> bool,
{
    check_in_bounds(grid, Endpoint::Start, start)?;
    check_in_bounds(grid, Endpoint::Goal, goal)?;

    trace!(
        "[AStar] searching {} -> {} on {}x{} grid",
        start,
        goal,
        grid.width(),
        grid.height()
    );

    if start == goal {
        return Ok(AStarSearchResults {
            ops_used: 0,
            cost: Some(0.0),
            outcome: SearchOutcome::Succeeded,
            path: vec![start],
        });
    }

    let heuristic = heuristic_euclidean(goal);
    let mut nodes = NodeArena::new();
    let mut heap = BinaryHeap::new();
    let mut ops_used: u32 = 0;

    let root = nodes.insert(start, 0.0, heuristic(start), None);
    heap.push(State {
        f_score: nodes.get(root).f(),
        handle: root,
    });

    // Examine the frontier with lower cost nodes first (min-heap)
    let outcome = loop {
        if should_cancel() {
            break SearchOutcome::Cancelled;
        }

        let Some(State { f_score, handle }) = heap.pop() else {
            break SearchOutcome::Exhausted;
        };

        let current = nodes.get(handle);
        if current.is_closed() {
            continue;
        }
        debug_assert!(
            f_score == current.f(),
            "open entry for {} is out of date",
            current.cell()
        );

        let position = current.cell();
        let g_score = current.g();
        nodes.close(handle);

        if position == goal {
            let path = nodes.path_to(handle);
            debug!(
                "[AStar] reached {} after {} expansions, cost {:.3}, {} cells",
                goal,
                ops_used,
                g_score,
                path.len()
            );
            return Ok(AStarSearchResults {
                ops_used,
                cost: Some(g_score),
                outcome: SearchOutcome::Succeeded,
                path,
            });
        }

        // Stop searching if we've run out of remaining ops we're allowed to perform
        if ops_used >= config.max_ops {
            break SearchOutcome::Halted;
        }
        ops_used += 1;

        for neighbor in cell_neighbors(position, grid.width(), grid.height()) {
            if config.respect_obstructions && !grid.is_passable(neighbor) {
                continue;
            }

            let tentative_g = g_score + euclidean_distance(position, neighbor);

            match nodes.handle_of(neighbor) {
                None => {
                    let next = nodes.insert(neighbor, tentative_g, heuristic(neighbor), Some(handle));
                    heap.push(State {
                        f_score: nodes.get(next).f(),
                        handle: next,
                    });
                }
                Some(existing) => {
                    let node = nodes.get(existing);
                    if node.is_closed() || tentative_g >= node.g() {
                        continue;
                    }
                    nodes.update_node(existing, tentative_g, handle);
                    heap.push(State {
                        f_score: nodes.get(existing).f(),
                        handle: existing,
                    });
                }
            }
        }
    };

    debug!(
        "[AStar] no path {} -> {}: {:?} after {} expansions, {} cells discovered",
        start,
        goal,
        outcome,
        ops_used,
        nodes.len()
    );

    Ok(AStarSearchResults::failed(outcome, ops_used))
}
