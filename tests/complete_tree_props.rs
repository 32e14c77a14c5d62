use std::collections::HashSet;

use cbtree::{complete_tree::NodeRef, CompleteTree};
use proptest::prelude::*;

fn build(root: i32, rest: &[i32]) -> CompleteTree<i32> {
    let mut tree = CompleteTree::new(root);
    tree.extend(rest.iter().copied());
    tree
}

/// Records the breadth-first position of every node, computed from the shape alone.
fn collect_positions(node: NodeRef<'_, i32>, position: usize, out: &mut Vec<usize>) {
    out.push(position);
    if let Some(left) = node.left_child() {
        collect_positions(left, 2 * position, out);
    }
    if let Some(right) = node.right_child() {
        collect_positions(right, 2 * position + 1, out);
    }
}

fn count_nodes(node: NodeRef<'_, i32>) -> usize {
    1 + node.left_child().map_or(0, count_nodes) + node.right_child().map_or(0, count_nodes)
}

/// Parses one node representation and returns the remaining input, checking that it has exactly four fields.
fn parse_node(input: &str) -> Result<&str, String> {
    let mut rest = input
        .strip_prefix('(')
        .ok_or_else(|| format!("expected '(' at {:?}", input))?;
    for field in 0..4 {
        if field > 0 {
            rest = rest
                .strip_prefix(',')
                .ok_or_else(|| format!("expected ',' before field {} at {:?}", field, rest))?;
        }
        rest = if field >= 2 {
            match rest.strip_prefix("null") {
                Some(after) => after,
                None => parse_node(rest)?,
            }
        } else {
            let end = rest
                .find(|c: char| c == ',' || c == ')')
                .ok_or_else(|| format!("unterminated field at {:?}", rest))?;
            if end == 0 {
                return Err(format!("empty field at {:?}", rest));
            }
            &rest[end..]
        };
    }
    rest.strip_prefix(')')
        .ok_or_else(|| format!("expected ')' after four fields at {:?}", rest))
}

proptest! {
    #[test]
    fn size_tracks_insertions(root in any::<i32>(), rest in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut tree = CompleteTree::new(root);
        prop_assert_eq!(tree.size(), 1);
        for (inserted, value) in rest.iter().enumerate() {
            tree.insert(*value);
            prop_assert_eq!(tree.size(), inserted + 2);
        }
        prop_assert_eq!(count_nodes(tree.root()), tree.size());
    }

    #[test]
    fn positions_form_a_prefix(root in any::<i32>(), rest in proptest::collection::vec(any::<i32>(), 0..300)) {
        let tree = build(root, &rest);
        let mut positions = Vec::new();
        collect_positions(tree.root(), 1, &mut positions);
        positions.sort_unstable();
        let expected = (1..=tree.size()).collect::<Vec<_>>();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn breadth_first_order_is_insertion_order(root in any::<i32>(), rest in proptest::collection::vec(any::<i32>(), 0..200)) {
        let tree = build(root, &rest);
        let mut expected = vec![root];
        expected.extend_from_slice(&rest);
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected.clone());
        for (index, value) in (1..).zip(expected.iter()) {
            let node = tree.get(index);
            prop_assert!(node.is_some());
            prop_assert_eq!(node.map(|x| *x.value()), Some(*value));
        }
        prop_assert!(tree.get(tree.size() + 1).is_none());
    }

    #[test]
    fn inserted_values_are_contained(rest in proptest::collection::vec(-1000..1000_i32, 0..150)) {
        let tree = build(0, &rest);
        prop_assert!(tree.contains(&0));
        for value in &rest {
            prop_assert!(tree.contains(value));
        }
        let present = rest.iter().copied().chain(Some(0)).collect::<HashSet<_>>();
        for absent in [-2000, 1000, 5000].iter() {
            prop_assert!(!present.contains(absent));
            prop_assert!(!tree.contains(absent));
        }
    }

    #[test]
    fn stringify_has_four_fields_per_node(root in any::<i32>(), rest in proptest::collection::vec(any::<i32>(), 0..100)) {
        let tree = build(root, &rest);
        let text = tree.to_string();

        let mut depth = 0_i64;
        for c in text.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0);
        }
        prop_assert_eq!(depth, 0);
        prop_assert_eq!(text.matches('(').count(), tree.size());

        let rest_of_input = parse_node(&text);
        prop_assert_eq!(rest_of_input, Ok(""));
    }

    #[test]
    fn cached_sizes_match_subtrees(len in 1_usize..400) {
        let tree = CompleteTree::try_from_iter(0..len as i32).expect("len is positive");
        for node in tree.nodes() {
            prop_assert_eq!(node.size(), count_nodes(node));
            if node.is_full_branch() {
                prop_assert!(node.left_child().is_some());
            }
        }
        prop_assert_eq!(tree.depth_first().count(), len);
    }
}
