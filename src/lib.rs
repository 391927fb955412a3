/// Provides common definitions used across the crate
pub mod common;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides the storage structures used by the search algorithms
pub mod data_structures;

/// Provides helper methods to simplify using algorithms
pub mod utils;

pub use algorithms::astar::{
    find_path, shortest_path, shortest_path_cancellable, AStarSearchResults, SearchConfig,
    SearchOutcome,
};
pub use common::cell::Cell;
pub use common::error::{Endpoint, PathError, Result};
pub use common::grid::Grid;
pub use common::traits::Passable;
