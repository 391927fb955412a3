/// Provides methods for pathfinding using the A* algorithm.
///
/// You most likely want to start with one of the following:
/// - [find_path](crate::algorithms::astar::find_path)
/// - [shortest_path](crate::algorithms::astar::shortest_path)
pub mod astar;
