use core::{
    fmt::{self, Formatter, Display, Debug},
    num::NonZeroUsize,
};
use arrayvec::{ArrayVec, IntoIter as ArrayVecIntoIter};
use super::{position, Node};

/// A reference to a node in a complete binary tree.
///
/// Besides the node itself, the reference remembers the node's breadth-first index, which is not stored in the tree and is instead tracked as the reference is moved from the root towards the leaves.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
    index: NonZeroUsize,
}
impl<'a, T> NodeRef<'a, T> {
    #[inline(always)]
    pub(crate) const fn new(node: &'a Node<T>, index: NonZeroUsize) -> Self {
        Self { node, index }
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }
    /// Returns the number of nodes in the subtree rooted at this node, including the node itself.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.node.size
    }
    /// Returns the breadth-first index of the node in its tree, the root being `1`.
    #[inline(always)]
    pub const fn index(&self) -> NonZeroUsize {
        self.index
    }
    /// Returns the depth of the node in its tree, the root being at depth `0`.
    #[inline]
    pub const fn depth(&self) -> usize {
        position::depth(self.index)
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub const fn is_root(&self) -> bool {
        self.index.get() == 1
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        self.node.left.is_some()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    ///
    /// In a complete tree, at most one branch is not full.
    #[inline(always)]
    pub fn is_full_branch(&self) -> bool {
        self.node.right.is_some()
    }
    /// Returns a reference to the left child, or `None` if the node is a leaf node.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    pub fn left_child(&self) -> Option<Self> {
        let node = self.node.left.as_deref()?;
        Some(Self::new(node, position::left_child(self.index)?))
    }
    /// Returns a reference to the right child, or `None` if the node is a leaf node or a partial branch.
    ///
    /// If you need both children, use [`children`] instead.
    ///
    /// [`children`]: #method.children " "
    pub fn right_child(&self) -> Option<Self> {
        let node = self.node.right.as_deref()?;
        Some(Self::new(node, position::right_child(self.index)?))
    }
    /// Returns references to the children, or `None` if the node is a leaf node or it only has one child. To retreive the left child even if the right one is not present, see [`left_child`].
    ///
    /// [`left_child`]: #method.left_child " "
    pub fn children(&self) -> Option<(Self, Self)> {
        Some((self.left_child()?, self.right_child()?))
    }
    /// Returns an iterator over the children which exist, left one first.
    ///
    /// # Example
    /// ```rust
    /// # use cbtree::CompleteTree;
    /// let mut tree = CompleteTree::new('a');
    /// tree.insert('b');
    ///
    /// let children = tree.root().child_iter().map(|x| *x.value()).collect::<String>();
    /// assert_eq!(children, "b");
    /// ```
    pub fn child_iter(&self) -> ArrayVecIntoIter<[Self; 2]> {
        let mut children = ArrayVec::<[Self; 2]>::new();
        children.extend(self.left_child());
        children.extend(self.right_child());
        children.into_iter()
    }
    /// Returns `true` if an element equal to `target` is found in the subtree rooted at this node, `false` otherwise.
    ///
    /// The search is exhaustive: the tree keeps no order among its elements, so every node might have to be checked.
    #[inline]
    pub fn contains(&self, target: &T) -> bool
    where T: PartialEq,
    {
        self.node.contains(target)
    }
}
impl<T> Copy for NodeRef<'_, T> {}
impl<T> Clone for NodeRef<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("value", &self.node.value)
            .field("size", &self.node.size)
            .finish()
    }
}
/// Writes the subtree rooted at the node in the same format the tree itself is displayed in.
impl<T: Display> Display for NodeRef<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.node.fmt_repr(f)
    }
}
