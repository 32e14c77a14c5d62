use alloc::boxed::Box;
use core::fmt::{self, Formatter, Display};
use crate::util::contract_violation;
use super::position::{Direction, Path};

/// A node of a complete binary tree, owning its children.
///
/// Created by the tree internally; only publicly reachable through [`NodeRef`].
///
/// [`NodeRef`]: struct.NodeRef.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) size: usize,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}
impl<T> Node<T> {
    #[inline]
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            size: 1,
            left: None,
            right: None,
        }
    }

    /// Attaches `value` as a new leaf at the end of `path`, which has to lead to the first vacant slot of this subtree.
    pub(crate) fn insert(&mut self, value: T, path: &mut Path) {
        let direction = path.next().unwrap_or_else(|| {
            contract_violation("descent path ended above the vacant slot");
            self.vacant_side()
        });
        let slot = match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        if let Some(child) = slot {
            child.insert(value, path);
        } else {
            if path.len() != 0 {
                contract_violation("descent path leads through a missing node");
            }
            *slot = Some(Box::new(Node::leaf(value)));
        }
        self.size += 1;
        self.check_size();
    }

    /// The side a new leaf goes to when this node is the parent of the vacant slot.
    #[inline]
    fn vacant_side(&self) -> Direction {
        if self.left.is_none() {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    #[inline]
    fn check_size(&self) {
        if cfg!(debug_assertions) {
            let children = self.left.as_ref().map_or(0, |x| x.size)
                + self.right.as_ref().map_or(0, |x| x.size);
            if self.size != children + 1 {
                contract_violation("cached subtree size drifted from the node count");
            }
        }
    }

    pub(crate) fn contains(&self, target: &T) -> bool
    where T: PartialEq,
    {
        if self.value == *target {
            return true;
        }
        match (&self.left, &self.right) {
            (None, None) => false,
            (Some(left), None) => left.contains(target),
            (Some(left), Some(right)) => left.contains(target) || right.contains(target),
            (None, Some(right)) => {
                contract_violation("right child present without a left one");
                right.contains(target)
            }
        }
    }

    /// Writes the subtree as `(value,size,left,right)`, with `null` standing for missing children. The alternate flag adds a space after every comma.
    pub(crate) fn fmt_repr(&self, f: &mut Formatter<'_>) -> fmt::Result
    where T: Display,
    {
        let separator = if f.alternate() { ", " } else { "," };
        write!(f, "({}{}{}{}", self.value, separator, self.size, separator)?;
        Self::fmt_child(self.left.as_deref(), f)?;
        f.write_str(separator)?;
        Self::fmt_child(self.right.as_deref(), f)?;
        f.write_str(")")
    }
    fn fmt_child(child: Option<&Self>, f: &mut Formatter<'_>) -> fmt::Result
    where T: Display,
    {
        match child {
            Some(x) => x.fmt_repr(f),
            None => f.write_str("null"),
        }
    }
}
