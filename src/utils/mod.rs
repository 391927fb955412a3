/// Distance and heuristic helpers
pub mod heuristics;

/// Neighbor enumeration on bounded grids
pub mod neighbors;

/// Helpers for consuming computed paths
pub mod pathing;

/// Text rendering of grids and paths
pub mod render;
