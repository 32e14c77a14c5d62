//! Everything related to traversing complete trees.
//!
//! The module is home to the following items:
//! - [`BreadthFirst`] — an iterator over node references in *level order*, which for a complete tree is also the order of breadth-first indices and the order of insertion
//! - [`DepthFirst`] — an iterator over node references in *pre-order*
//! - [`Values`] — an iterator over the elements themselves in level order, returned by [`CompleteTree::iter`]
//!
//! All of them can start from any node, not just the root, in which case they only cover the subtree rooted at that node. Since every node knows the size of its subtree, the iterators always know exactly how many items are left.
//!
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`DepthFirst`]: struct.DepthFirst.html " "
//! [`Values`]: struct.Values.html " "
//! [`CompleteTree::iter`]: ../complete_tree/struct.CompleteTree.html#method.iter " "

use alloc::{collections::VecDeque, vec::Vec};
use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::complete_tree::NodeRef;

/// An iterator over the nodes of a subtree in breadth-first order, i.e. level by level, from left to right.
///
/// # Example
/// ```rust
/// # use cbtree::CompleteTree;
/// let tree = CompleteTree::try_from_iter(10..17).unwrap();
///
/// let indices = tree.nodes().map(|x| x.index().get()).collect::<Vec<_>>();
/// assert_eq!(indices, [1, 2, 3, 4, 5, 6, 7]);
/// ```
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<NodeRef<'a, T>>,
    remaining: usize,
}
impl<'a, T> BreadthFirst<'a, T> {
    /// Creates an iterator over the subtree rooted at the specified node.
    pub fn new(root: NodeRef<'a, T>) -> Self {
        let mut queue = VecDeque::new();
        let remaining = root.size();
        queue.push_back(root);
        Self { queue, remaining }
    }
}
impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = NodeRef<'a, T>;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.child_iter());
        self.remaining -= 1;
        Some(node)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for BreadthFirst<'_, T> {}
impl<T> FusedIterator for BreadthFirst<'_, T> {}
impl<T> Clone for BreadthFirst<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            remaining: self.remaining,
        }
    }
}
impl<T: Debug> Debug for BreadthFirst<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("queue", &self.queue)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An iterator over the nodes of a subtree in depth-first pre-order: every node is produced before its left subtree, which in turn is produced before its right subtree.
///
/// # Example
/// ```rust
/// # use cbtree::CompleteTree;
/// let tree = CompleteTree::try_from_iter(1..=6).unwrap();
///
/// let values = tree.depth_first().map(|x| *x.value()).collect::<Vec<_>>();
/// assert_eq!(values, [1, 2, 4, 5, 3, 6]);
/// ```
pub struct DepthFirst<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
    remaining: usize,
}
impl<'a, T> DepthFirst<'a, T> {
    /// Creates an iterator over the subtree rooted at the specified node.
    pub fn new(root: NodeRef<'a, T>) -> Self {
        let remaining = root.size();
        // At most one pending right sibling per level, plus the node being expanded
        let height = (usize::BITS - remaining.leading_zeros()) as usize;
        let mut stack = Vec::with_capacity(height + 1);
        stack.push(root);
        Self { stack, remaining }
    }
}
impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = NodeRef<'a, T>;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Pushed in reverse so that the left child is popped first
        self.stack.extend(node.child_iter().rev());
        self.remaining -= 1;
        Some(node)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for DepthFirst<'_, T> {}
impl<T> FusedIterator for DepthFirst<'_, T> {}
impl<T> Clone for DepthFirst<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
impl<T: Debug> Debug for DepthFirst<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("stack", &self.stack)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An iterator over the elements of a subtree in breadth-first order.
///
/// Created by [`CompleteTree::iter`]; see its documentation for more.
///
/// [`CompleteTree::iter`]: ../complete_tree/struct.CompleteTree.html#method.iter " "
pub struct Values<'a, T>(BreadthFirst<'a, T>);
impl<'a, T> Values<'a, T> {
    /// Creates an iterator over the elements of the subtree rooted at the specified node.
    #[inline]
    pub fn new(root: NodeRef<'a, T>) -> Self {
        Self(BreadthFirst::new(root))
    }
}
impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|x| x.value())
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<T> ExactSizeIterator for Values<'_, T> {}
impl<T> FusedIterator for Values<'_, T> {}
impl<T> Clone for Values<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: Debug> Debug for Values<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.0).finish()
    }
}
