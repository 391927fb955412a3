use crate::common::traits::GetDistanceTo;

/// Straight-line distance between two nodes.
///
/// Used both as the A* heuristic and as the cost of a single step, so
/// orthogonal moves cost 1 and diagonal moves cost √2.
pub fn euclidean_distance<T: GetDistanceTo>(a: T, b: T) -> f64 {
    a.get_distance_to(b)
}

/// Helper function to create a heuristic cost function closure for a single goal node.
///
/// This heuristic cost is the straight-line distance between the provided node
/// and the goal node, which never overestimates the cost of an 8-connected path.
///
/// # Examples
/// ```rust
/// use grid_astar::Cell;
/// use grid_astar::utils::heuristics::heuristic_euclidean;
///
/// let goal = Cell::new(3, 4);
/// let h = heuristic_euclidean(goal);
/// assert_eq!(h(Cell::new(0, 0)), 5.0);
/// assert_eq!(h(goal), 0.0);
/// ```
pub fn heuristic_euclidean<T: GetDistanceTo + Copy + 'static>(goal: T) -> impl Fn(T) -> f64 {
    move |node: T| node.get_distance_to(goal)
}
