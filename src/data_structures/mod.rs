/// Implementation of the NodeArena structure.
pub mod node_arena;

#[cfg(test)]
mod node_arena_tests;

pub use node_arena::{NodeArena, NodeHandle, SearchNode};
