//! Binary trees which keep every level full, except possibly the last one, which is filled from left to right.
//!
//! The [Wikipedia article] on binary trees covers complete trees and their use cases in more detail.
//!
//! Elements are only ever added, each one as a new leaf in the first vacant slot of the bottom level, so the tree stays complete after every insertion without any rebalancing. The elements do not have to be ordered and are never moved once inserted: if you lay the tree out level by level, you get the elements in the exact order they were inserted in.
//!
//! Every node owns its children and caches the number of nodes in its subtree. The size of the root is enough to find where the next element goes, as described in the [`position`] module.
//!
//! # Example
//! ```rust
//! use cbtree::complete_tree::{CompleteTree, NodeRef};
//!
//! // Create the tree. The only thing we need for that is the data payload for the root node.
//! let mut tree = CompleteTree::new("Welcome".to_string());
//!
//! // Let's now try to access the structure of the tree and look around.
//! let root = tree.root();
//! // We have never added any nodes to the tree, so the root does not have any children, hence:
//! assert!(root.is_leaf());
//!
//! // Let's add some nodes. The first one goes to the left of the root, the second one to its
//! // right, the third one starts a new level.
//! tree.insert("to".to_string());
//! tree.insert("the".to_string());
//! tree.insert("jungle".to_string());
//!
//! let root: NodeRef<'_, _> = tree.root();
//! assert_eq!(root.size(), 4);
//! let (left_child, right_child) = root.children().unwrap();
//! assert_eq!(left_child.value(), "to");
//! assert_eq!(right_child.value(), "the");
//! assert_eq!(left_child.left_child().unwrap().value(), "jungle");
//!
//! // Lookups compare elements by value, not by identity:
//! assert!(tree.contains(&"jungle".to_string()));
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree#Types_of_binary_trees " "
//! [`position`]: position/index.html " "

pub mod position;

mod base;
mod node;
mod node_ref;

#[cfg(test)]
mod tests;

use node::Node;
pub use node_ref::NodeRef;
pub use base::CompleteTree;
