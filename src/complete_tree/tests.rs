use super::*;
use crate::EmptyTreeError;
use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::convert::TryFrom;

/// Counts the nodes by walking the whole tree instead of trusting the cached sizes.
fn count_nodes<T>(node: NodeRef<'_, T>) -> usize {
    1 + node.child_iter().map(count_nodes).sum::<usize>()
}

#[test]
fn basic() {
    let mut tree = CompleteTree::new(0);
    tree.insert(1);
    tree.insert(2);

    assert_eq!(tree.to_string(), "(0,3,(1,1,null,null),(2,1,null,null))");
    assert_eq!(tree.size(), 3);
    assert!(tree.contains(&2));
    assert!(!tree.contains(&5));
}

#[test]
fn fills_levels_left_to_right() {
    let mut tree = CompleteTree::new(1);
    for x in 1..=6 {
        tree.insert(x);
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3, 4, 5, 6]);
    assert_eq!(
        tree.to_string(),
        "(1,7,(1,3,(3,1,null,null),(4,1,null,null)),(2,3,(5,1,null,null),(6,1,null,null)))",
    );
}

#[test]
fn single_node() {
    let tree = CompleteTree::new('x');
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.to_string(), "(x,1,null,null)");
    assert!(tree.contains(&'x'));
    assert!(!tree.contains(&'y'));
    assert!(tree.root().is_leaf());
    assert!(tree.root().is_root());
    assert_eq!(tree.root().depth(), 0);
}

#[test]
fn partial_branch_is_printed_with_null_right_child() {
    let tree = CompleteTree::try_from_iter(vec![7, 8, 9, 10]).expect("nonempty");
    assert_eq!(tree.to_string(), "(7,4,(8,2,(10,1,null,null),null),(9,1,null,null))");
    assert_eq!(
        format!("{:#}", tree),
        "(7, 4, (8, 2, (10, 1, null, null), null), (9, 1, null, null))",
    );
}

#[test]
fn node_ref_displays_its_subtree() {
    let tree = CompleteTree::try_from_iter(0..5).expect("nonempty");
    let left = tree.root().left_child().expect("tree has 5 nodes");
    assert_eq!(left.to_string(), "(1,3,(3,1,null,null),(4,1,null,null))");
}

#[test]
fn sizes_stay_consistent() {
    let mut tree = CompleteTree::new(0_u32);
    for x in 1..300 {
        tree.insert(x);
        assert_eq!(tree.size(), x as usize + 1);
        assert_eq!(count_nodes(tree.root()), tree.size());
        for node in tree.nodes() {
            assert_eq!(count_nodes(node), node.size());
        }
    }
}

#[test]
fn right_child_never_without_left() {
    let tree = CompleteTree::try_from_iter(0..100).expect("nonempty");
    let mut partial_branches = 0;
    for node in tree.nodes() {
        if node.right_child().is_some() {
            assert!(node.left_child().is_some());
        }
        if node.is_branch() && !node.is_full_branch() {
            partial_branches += 1;
        }
    }
    // 100 nodes: the node at 50 only has a left child
    assert_eq!(partial_branches, 1);
    assert!(tree.get(50).expect("50 <= 100").children().is_none());
}

#[test]
fn height_grows_by_level() {
    let mut tree = CompleteTree::new(());
    for size in 1..=16_usize {
        let levels = match size {
            1 => 1,
            2..=3 => 2,
            4..=7 => 3,
            8..=15 => 4,
            _ => 5,
        };
        assert_eq!(tree.size(), size);
        assert_eq!(tree.height(), levels, "size {}", size);
        tree.insert(());
    }
}

#[test]
fn get_by_index() {
    let tree = CompleteTree::try_from_iter(100..120).expect("nonempty");
    for index in 1..=20 {
        let node = tree.get(index).expect("index within size");
        assert_eq!(node.index().get(), index);
        assert_eq!(*node.value(), 99 + index);
    }
    assert!(tree.get(0).is_none());
    assert!(tree.get(21).is_none());
    assert!(tree.get(usize::MAX).is_none());
}

#[test]
fn contains_compares_by_value() {
    let mut tree = CompleteTree::new(String::from("root"));
    for word in ["alpha", "beta", "gamma", "delta"].iter() {
        tree.insert((*word).to_string());
    }
    // A separately allocated, equal string has to be found
    let probe = "gam".to_string() + "ma";
    assert!(tree.contains(&probe));
    assert!(tree.contains(&"root".to_string()));
    assert!(!tree.contains(&"epsilon".to_string()));
}

#[test]
fn contains_finds_every_position() {
    let tree = CompleteTree::try_from_iter(0..64).expect("nonempty");
    for x in 0..64 {
        assert!(tree.contains(&x), "{} should be found", x);
    }
    assert!(!tree.contains(&64));
    assert!(!tree.contains(&-1));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(CompleteTree::<i32>::try_from_iter(None), Err(EmptyTreeError));
    assert_eq!(CompleteTree::<i32>::try_from(Vec::<i32>::new()), Err(EmptyTreeError));
    assert_eq!(EmptyTreeError.to_string(), "cannot build a tree without a root element");
}

#[test]
fn conversions_match_manual_insertion() {
    let mut manual = CompleteTree::new('a');
    for c in "bcdefg".chars() {
        manual.insert(c);
    }
    let from_vec = CompleteTree::<char>::try_from("abcdefg".chars().collect::<Vec<_>>()).expect("nonempty");
    let mut extended = CompleteTree::new('a');
    extended.extend("bcdefg".chars());
    assert_eq!(manual, from_vec);
    assert_eq!(manual, extended);
    assert_eq!((&manual).into_iter().collect::<String>(), "abcdefg");
}

#[test]
fn clones_are_independent() {
    let original = CompleteTree::try_from_iter(0..3).expect("nonempty");
    let mut copy = original.clone();
    copy.insert(3);
    assert_eq!(original.size(), 3);
    assert_eq!(copy.size(), 4);
    assert_ne!(original, copy);
}

#[test]
fn duplicate_values_are_kept() {
    let tree = CompleteTree::try_from_iter(vec![5; 10]).expect("nonempty");
    assert_eq!(tree.size(), 10);
    assert_eq!(tree.iter().filter(|x| **x == 5).count(), 10);
}
