//! Arithmetic on breadth-first indices.
//!
//! Laying a complete binary tree out level by level, left to right, gives every node a 1-based *breadth-first index*: the root is `1`, and the children of the node at `i` are at `2i` and `2i + 1`. Because the tree is complete, its nodes occupy exactly the indices `1..=size`, so the next inserted node always goes to `size + 1`.
//!
//! Written in binary, an index is a leading `1` (the root) followed by one digit per level: `0` to descend left and `1` to descend right. For example, `12` is `0b1100`: right, left, left. [`Path`] walks those digits, which is all an insertion needs to find its way down without any information stored in the nodes besides their children.
//!
//! [`Path`]: struct.Path.html " "

use core::{
    iter::FusedIterator,
    num::NonZeroUsize,
};

/// The side of a node a descent continues to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left child, i.e. the one at `2i`.
    Left,
    /// The right child, i.e. the one at `2i + 1`.
    Right,
}

/// An iterator over the directions leading from the root to a node, given the node's breadth-first index.
///
/// # Example
/// ```rust
/// use cbtree::complete_tree::position::{Path, Direction};
///
/// let path = Path::to(12).collect::<Vec<_>>();
/// assert_eq!(path, [Direction::Right, Direction::Left, Direction::Left]);
///
/// // The root is reached without moving at all:
/// assert_eq!(Path::to(1).len(), 0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    index: usize,
    mask: usize,
}
impl Path {
    /// Creates a path to the node at the specified breadth-first index.
    ///
    /// Index `0` does not name any node; the path to it is empty, same as the path to the root.
    #[inline]
    pub const fn to(index: usize) -> Self {
        let mask = if index == 0 {
            0
        } else {
            1_usize << (usize::BITS - 1 - index.leading_zeros())
        };
        Self { index, mask }
    }
    /// Returns the breadth-first index the path leads to.
    #[inline(always)]
    pub const fn destination(&self) -> usize {
        self.index
    }
}
impl Iterator for Path {
    type Item = Direction;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.mask >>= 1;
        if self.mask == 0 {
            None
        } else if self.index & self.mask == 0 {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}
impl ExactSizeIterator for Path {
    #[inline]
    fn len(&self) -> usize {
        if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros() as usize
        }
    }
}
impl FusedIterator for Path {}

/// Returns the depth of the node at the specified index, the root being at depth `0`.
#[inline]
pub const fn depth(index: NonZeroUsize) -> usize {
    (usize::BITS - 1 - index.get().leading_zeros()) as usize
}
/// Returns the index of the parent of the node at the specified index, or `None` for the root.
#[inline]
pub const fn parent(index: NonZeroUsize) -> Option<NonZeroUsize> {
    NonZeroUsize::new(index.get() / 2)
}
/// Returns the index of the left child of the node at the specified index, or `None` if it would not fit into a `usize`.
#[inline]
pub fn left_child(index: NonZeroUsize) -> Option<NonZeroUsize> {
    index.get().checked_mul(2).and_then(NonZeroUsize::new)
}
/// Returns the index of the right child of the node at the specified index, or `None` if it would not fit into a `usize`.
#[inline]
pub fn right_child(index: NonZeroUsize) -> Option<NonZeroUsize> {
    index
        .get()
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .and_then(NonZeroUsize::new)
}
