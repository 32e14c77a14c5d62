//! Implements a complete binary tree which keeps its shape as elements are added, using nothing but the subtree sizes it caches in every node.
//!
//! # Overview
//! A [complete binary tree] is a binary tree in which every level is fully filled, except possibly the last one, which is filled from left to right without gaps. It's the shape a binary heap has, but unlike a heap, [`CompleteTree`] does not impose any ordering on its elements: the payload is completely opaque to the structure, and looking up an element has to search the whole tree.
//!
//! Nodes own their children directly (there are no parent pointers and no back-references), so the tree is always torn down recursively as a whole. Instead of tracking levels or positions explicitly, every node stores the size of its subtree. Since the tree is complete, the size of the root alone determines the *breadth-first index* of the next free slot, and the binary digits of that index spell out the path from the root to it. See the [`position`] module for the details of the arithmetic.
//!
//! # Example
//! ```rust
//! use cbtree::CompleteTree;
//!
//! let mut tree = CompleteTree::new(0);
//! tree.insert(1);
//! tree.insert(2);
//!
//! assert_eq!(tree.size(), 3);
//! assert!(tree.contains(&2));
//! assert!(!tree.contains(&5));
//! // The textual form lists the value, the subtree size and both children for every node:
//! assert_eq!(tree.to_string(), "(0,3,(1,1,null,null),(2,1,null,null))");
//! ```
//!
//! # Empty trees
//! A tree always has a root node. An empty tree is simply the absence of one, which is best expressed as an `Option<CompleteTree<T>>`. Constructors which might receive no elements at all, like [`CompleteTree::try_from_iter`], report that with [`EmptyTreeError`].
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types. *The crate always requires a global memory allocator.*
//! - `unwind_safety` (**enabled by default**) — when a broken tree invariant is detected in a debug build, the process is aborted instead of unwinding, so that the corrupted tree cannot be observed by code which catches the panic. Requires `std`.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//!
//! [complete binary tree]: https://en.wikipedia.org/wiki/Binary_tree#Types_of_binary_trees " "
//! [`CompleteTree`]: complete_tree/struct.CompleteTree.html " "
//! [`CompleteTree::try_from_iter`]: complete_tree/struct.CompleteTree.html#method.try_from_iter " "
//! [`EmptyTreeError`]: struct.EmptyTreeError.html " "
//! [`position`]: complete_tree/position/index.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::trivially_copy_pass_by_ref,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod complete_tree;
pub use complete_tree::CompleteTree;

pub mod traversal;
pub use traversal::{BreadthFirst, DepthFirst};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::complete_tree::{
        CompleteTree,
        NodeRef as CompleteTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        BreadthFirst as CompleteTreeBreadthFirst,
        DepthFirst as CompleteTreeDepthFirst,
    };
    #[doc(no_inline)]
    pub use crate::EmptyTreeError;
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The error type returned by constructors which build a tree out of a sequence of elements, which occurs when the sequence turned out to be empty and there was no element to use as the root.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyTreeError;
impl Display for EmptyTreeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot build a tree without a root element")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EmptyTreeError {}
