use super::node_arena::*;
use crate::common::cell::Cell;

// Handles are handed out in creation order
#[test]
pub fn node_arena_handles_follow_insertion_order() {
    let mut arena = NodeArena::new();
    let a = arena.insert(Cell::new(0, 0), 0.0, 3.0, None);
    let b = arena.insert(Cell::new(1, 0), 1.0, 2.0, Some(a));
    let c = arena.insert(Cell::new(0, 1), 1.0, 2.5, Some(a));

    assert!(a < b && b < c);
    assert_eq!(a.index(), 0);
    assert_eq!(c.index(), 2);
    assert_eq!(arena.len(), 3);
}

// handle_of finds nodes by cell and misses undiscovered cells
#[test]
pub fn node_arena_handle_of_looks_up_by_cell() {
    let mut arena = NodeArena::new();
    assert!(arena.is_empty());
    let a = arena.insert(Cell::new(4, 2), 0.0, 1.0, None);

    assert_eq!(arena.handle_of(Cell::new(4, 2)), Some(a));
    assert_eq!(arena.handle_of(Cell::new(2, 4)), None);
}

// f is derived from g and h, and follows g after an update
#[test]
pub fn node_arena_f_is_derived_from_g_and_h() {
    let mut arena = NodeArena::new();
    let root = arena.insert(Cell::new(0, 0), 0.0, 4.0, None);
    let other = arena.insert(Cell::new(2, 0), 2.0, 2.0, Some(root));
    let node = arena.insert(Cell::new(1, 1), 5.0, 1.5, Some(other));

    assert_eq!(arena.get(node).f(), 6.5);

    arena.update_node(node, 1.5, root);

    let updated = arena.get(node);
    assert_eq!(updated.g(), 1.5);
    assert_eq!(updated.h(), 1.5);
    assert_eq!(updated.f(), 3.0);
    assert_eq!(updated.parent(), Some(root));
}

// Closing a node is visible through both the node and the cell lookup
#[test]
pub fn node_arena_close_marks_cell_closed() {
    let mut arena = NodeArena::new();
    let a = arena.insert(Cell::new(3, 3), 0.0, 0.0, None);

    assert!(!arena.is_closed(Cell::new(3, 3)));
    arena.close(a);
    assert!(arena.is_closed(Cell::new(3, 3)));
    assert!(arena.get(a).is_closed());

    // Cells with no node are not closed
    assert!(!arena.is_closed(Cell::new(0, 0)));
}

// path_to returns root-to-end order, inclusive of both
#[test]
pub fn node_arena_path_to_follows_parents() {
    let mut arena = NodeArena::new();
    let a = arena.insert(Cell::new(0, 0), 0.0, 0.0, None);
    let b = arena.insert(Cell::new(1, 1), 1.4, 0.0, Some(a));
    let _unrelated = arena.insert(Cell::new(0, 1), 1.0, 0.0, Some(a));
    let c = arena.insert(Cell::new(2, 1), 2.4, 0.0, Some(b));

    assert_eq!(
        arena.path_to(c),
        vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 1)]
    );
    assert_eq!(arena.path_to(a), vec![Cell::new(0, 0)]);
}

// Reparenting changes the reconstructed path
#[test]
pub fn node_arena_path_to_reflects_updated_parent() {
    let mut arena = NodeArena::new();
    let a = arena.insert(Cell::new(0, 0), 0.0, 0.0, None);
    let b = arena.insert(Cell::new(1, 0), 1.0, 0.0, Some(a));
    let c = arena.insert(Cell::new(1, 1), 1.4, 0.0, Some(a));
    let d = arena.insert(Cell::new(2, 0), 2.8, 0.0, Some(c));

    arena.update_node(d, 2.0, b);

    assert_eq!(
        arena.path_to(d),
        vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
    );
}
