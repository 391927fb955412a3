/// The [Cell](cell::Cell) coordinate type
pub mod cell;

/// Error types returned by grid construction and searches
pub mod error;

/// The obstacle [Grid](grid::Grid)
pub mod grid;

/// Traits describing what the search needs from a grid
pub mod traits;

#[cfg(test)]
pub(crate) mod data;
