use alloc::vec::Vec;
use core::{
    convert::TryFrom,
    fmt::{self, Formatter, Display},
    num::NonZeroUsize,
};
use crate::{
    traversal::{BreadthFirst, DepthFirst, Values},
    EmptyTreeError,
};
use super::{
    position::{Direction, Path},
    Node,
    NodeRef,
};

const ROOT_INDEX: NonZeroUsize = unsafe {
    // SAFETY: 1 is not 0
    NonZeroUsize::new_unchecked(1)
};

/// A complete binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompleteTree<T> {
    pub(super) root: Node<T>,
}
impl<T> CompleteTree<T> {
    /// Creates a complete tree with the specified value for the root node.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// // The only way to create a tree...
    /// let tree = CompleteTree::new(87);
    /// // ...is to simply create the root leaf node.
    ///
    /// // No other nodes have been created yet:
    /// assert!(tree.root().is_leaf());
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub const fn new(root: T) -> Self {
        Self {
            root: Node::leaf(root),
        }
    }
    /// Creates a complete tree out of a sequence of elements: the first one becomes the root, and the rest are [inserted] in order. Returns an error if the sequence was empty.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::{CompleteTree, EmptyTreeError};
    /// let tree = CompleteTree::try_from_iter(1..=6).unwrap(); // You can replace this with proper error handling
    /// assert_eq!(tree.size(), 6);
    /// assert_eq!(tree.height(), 3);
    ///
    /// assert_eq!(CompleteTree::try_from_iter(Vec::<u8>::new()), Err(EmptyTreeError));
    /// ```
    ///
    /// [inserted]: #method.insert " "
    pub fn try_from_iter<I>(iter: I) -> Result<Self, EmptyTreeError>
    where I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut tree = Self::new(iter.next().ok_or(EmptyTreeError)?);
        tree.extend(iter);
        Ok(tree)
    }

    /// Returns the number of nodes in the tree. This operation returns immediately instead of counting the nodes, since every node keeps the size of its subtree up to date as elements are inserted.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.root.size
    }
    /// Returns the number of levels in the tree, which is `1` for a tree consisting only of the root node.
    #[inline]
    pub fn height(&self) -> usize {
        (usize::BITS - self.size().leading_zeros()) as usize
    }

    /// Adds an element to the tree as a new leaf, at the first vacant slot of the bottom level (or as the first node of a new level, if the bottom one is full).
    ///
    /// The slot is found by following the path spelled out by its breadth-first index, so the tree stays complete and the operation takes `O(log n)` time. See the [`position`] module for the details.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// let mut tree = CompleteTree::new(0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// // Levels are filled from left to right before a new one is started:
    /// let (left, right) = tree.root().children().unwrap(); // Both exist
    /// assert_eq!(*left.value(), 1);
    /// assert_eq!(*right.value(), 2);
    /// assert_eq!(*left.left_child().unwrap().value(), 3); // And so does this one
    /// assert!(right.is_leaf());
    /// ```
    ///
    /// [`position`]: position/index.html " "
    pub fn insert(&mut self, value: T) {
        let mut path = Path::to(self.size() + 1);
        self.root.insert(value, &mut path);
    }

    /// Returns `true` if an element equal to `value` is stored anywhere in the tree, `false` otherwise.
    ///
    /// Elements are compared by value using their `PartialEq` implementation. Since the tree does not order its elements, the search is exhaustive, taking `O(n)` time in the worst case.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where T: PartialEq,
    {
        self.root.contains(value)
    }

    /// Returns a reference to the root node of the tree.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// // A tree always has a root node:
    /// let tree = CompleteTree::new("Root");
    ///
    /// assert_eq!(*tree.root().value(), "Root");
    /// assert_eq!(tree.root().index().get(), 1);
    /// ```
    #[inline]
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(&self.root, ROOT_INDEX)
    }
    /// Returns a reference to the node at the specified breadth-first index, or `None` if there is no such node. The root is at index `1`, and the children of the node at `i` are at `2i` and `2i + 1`.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// let tree = CompleteTree::try_from_iter("abcdef".chars()).unwrap();
    ///
    /// assert_eq!(tree.get(5).map(|x| *x.value()), Some('e'));
    /// assert!(tree.get(0).is_none());
    /// assert!(tree.get(7).is_none());
    /// ```
    pub fn get(&self, index: usize) -> Option<NodeRef<'_, T>> {
        if index == 0 || index > self.size() {
            return None;
        }
        Path::to(index).try_fold(self.root(), |node, direction| match direction {
            Direction::Left => node.left_child(),
            Direction::Right => node.right_child(),
        })
    }

    /// Returns an iterator over the elements of the tree in breadth-first order, i.e. level by level, from left to right, which is also the order in which they were inserted.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// let mut tree = CompleteTree::new(1);
    /// tree.extend(vec![1, 2, 3, 4, 5, 6]);
    ///
    /// let elements = tree.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(elements, [1, 1, 2, 3, 4, 5, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Values<'_, T> {
        Values::new(self.root())
    }
    /// Returns an iterator over references to the nodes of the tree in breadth-first order.
    #[inline]
    pub fn nodes(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self.root())
    }
    /// Returns an iterator over references to the nodes of the tree in depth-first pre-order: every node comes before its left subtree, which comes before its right subtree.
    #[inline]
    pub fn depth_first(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root())
    }
}
impl<T> Extend<T> for CompleteTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
impl<T> TryFrom<Vec<T>> for CompleteTree<T> {
    type Error = EmptyTreeError;
    #[inline]
    fn try_from(op: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_iter(op)
    }
}
impl<'a, T> IntoIterator for &'a CompleteTree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
/// Writes the tree as `(value,size,left,right)` for every node, recursively, with `null` standing for missing children.
///
/// The alternate flag (`{:#}`) adds a space after every comma.
///
/// # Example
/// ```rust
/// # use cbtree::CompleteTree;
/// let mut tree = CompleteTree::new(0);
/// tree.insert(1);
///
/// assert_eq!(format!("{}", tree), "(0,2,(1,1,null,null),null)");
/// assert_eq!(format!("{:#}", tree), "(0, 2, (1, 1, null, null), null)");
/// ```
impl<T: Display> Display for CompleteTree<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.root.fmt_repr(f)
    }
}
