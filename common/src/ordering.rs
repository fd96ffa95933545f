//! Sibling reordering for the curriculum tree.
//!
//! Works the same for sections within a course and lessons within a
//! section: a move swaps the item with its neighbour, then renumbers the
//! FULL sibling set to dense 1-based positions. Renumbering everything
//! (not just the swapped pair) repairs any drift the stored values may
//! have accumulated, so the dense-order invariant holds after every move.
//! The caller persists the whole renumbered set.

use crate::model::curriculum::{Lesson, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Anything with an identity and a 1-based position among its siblings.
pub trait Ordered {
    fn id(&self) -> &str;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

impl Ordered for Section {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ordered for Lesson {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> u32 {
        self.order
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Moves the sibling identified by `id` one position up or down.
///
/// Returns `true` when the list changed. Unknown ids and moves past either
/// end are silent no-ops: the list and every `order` value stay untouched.
pub fn move_sibling<T: Ordered>(siblings: &mut [T], id: &str, direction: MoveDirection) -> bool {
    let Some(index) = siblings.iter().position(|s| s.id() == id) else {
        return false;
    };
    let target = match direction {
        MoveDirection::Up => {
            if index == 0 {
                return false;
            }
            index - 1
        }
        MoveDirection::Down => {
            if index + 1 >= siblings.len() {
                return false;
            }
            index + 1
        }
    };
    siblings.swap(index, target);
    renumber(siblings);
    true
}

/// Rewrites every sibling's `order` to its dense 1-based position.
pub fn renumber<T: Ordered>(siblings: &mut [T]) {
    for (index, sibling) in siblings.iter_mut().enumerate() {
        sibling.set_order(index as u32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(ids_and_orders: &[(&str, u32)]) -> Vec<Section> {
        ids_and_orders
            .iter()
            .map(|(id, order)| Section {
                id: (*id).into(),
                title: format!("Section {id}"),
                order: *order,
                lessons: Vec::new(),
            })
            .collect()
    }

    fn assert_dense(siblings: &[Section]) {
        for (index, s) in siblings.iter().enumerate() {
            assert_eq!(s.order, index as u32 + 1, "order drifted at {}", s.id);
        }
    }

    #[test]
    fn move_up_swaps_and_renumbers() {
        let mut list = sections(&[("a", 1), ("b", 2), ("c", 3)]);
        assert!(move_sibling(&mut list, "b", MoveDirection::Up));
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_dense(&list);
    }

    #[test]
    fn edge_moves_are_no_ops() {
        let mut list = sections(&[("a", 1), ("b", 2)]);
        assert!(!move_sibling(&mut list, "a", MoveDirection::Up));
        assert!(!move_sibling(&mut list, "b", MoveDirection::Down));
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(list[0].order, 1);
        assert_eq!(list[1].order, 2);
    }

    #[test]
    fn unknown_id_and_single_sibling_are_no_ops() {
        let mut list = sections(&[("a", 1)]);
        assert!(!move_sibling(&mut list, "zz", MoveDirection::Down));
        assert!(!move_sibling(&mut list, "a", MoveDirection::Down));
        assert_eq!(list[0].order, 1);
    }

    #[test]
    fn a_move_repairs_drifted_orders() {
        // Stored orders have gaps and duplicates; one move fixes all of them.
        let mut list = sections(&[("a", 3), ("b", 3), ("c", 9)]);
        assert!(move_sibling(&mut list, "c", MoveDirection::Up));
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
        assert_dense(&list);
    }

    #[test]
    fn orders_stay_dense_under_any_move_sequence() {
        let mut list = sections(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
        let moves = [
            ("d", MoveDirection::Up),
            ("a", MoveDirection::Down),
            ("a", MoveDirection::Down),
            ("c", MoveDirection::Up),
            ("b", MoveDirection::Down),
            ("d", MoveDirection::Down),
            ("a", MoveDirection::Up),
        ];
        for (id, direction) in moves {
            move_sibling(&mut list, id, direction);
            assert_dense(&list);
            let mut seen: Vec<u32> = list.iter().map(|s| s.order).collect();
            seen.sort_unstable();
            assert_eq!(seen, vec![1, 2, 3, 4]);
        }
    }
}
