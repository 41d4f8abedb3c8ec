//! The ownership unit shared by both tree implementations.
//!
//! A [`Node`] owns one element and (optionally) its two children. The trees
//! in [`ordered`](crate::ordered) and [`balanced`](crate::balanced) are built
//! entirely out of `Node`s; the [iterator](crate::iter) walks them without
//! caring which tree produced them.
//!
//! Reading a `Node` (element, children, height) is public so that callers can
//! inspect what [`find`](crate::ordered::Tree::find) returns. Mutation is
//! crate-private: handing out setters would let callers break the ordering
//! and balance invariants from outside the tree.

/// A single node of a binary search tree. It stores one element and owns its
/// left and right children (either of which may be absent).
#[derive(Clone, Debug)]
pub struct Node<T> {
    element: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `element`.
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// The left child of this node, if any. Every element below it compares
    /// less than or equal to [`element`](Self::element).
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child of this node, if any. Every element below it compares
    /// greater than or equal to [`element`](Self::element).
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The height of the subtree rooted at this node. A leaf has height 1;
    /// an absent subtree is counted as height 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Consume the node and return its element. Only meaningful once the
    /// children have been detached.
    pub(crate) fn into_element(self) -> T {
        self.element
    }

    /// Swap a new element into this node, returning the old one. Used by the
    /// predecessor-copy step of deletion.
    pub(crate) fn replace_element(&mut self, element: T) -> T {
        std::mem::replace(&mut self.element, element)
    }

    /// Detach and return the left subtree.
    pub(crate) fn take_left(&mut self) -> Option<Box<Node<T>>> {
        self.left.take()
    }

    /// Detach and return the right subtree.
    pub(crate) fn take_right(&mut self) -> Option<Box<Node<T>>> {
        self.right.take()
    }

    /// Attach `subtree` as the left child.
    pub(crate) fn set_left(&mut self, subtree: Option<Box<Node<T>>>) {
        self.left = subtree;
    }

    /// Attach `subtree` as the right child.
    pub(crate) fn set_right(&mut self, subtree: Option<Box<Node<T>>>) {
        self.right = subtree;
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn update_height(&mut self) {
        self.height = Self::child_height(&self.left).max(Self::child_height(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees. See
    /// [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub(crate) fn balance_factor(&self) -> isize {
        Self::child_height(&self.left) as isize - Self::child_height(&self.right) as isize
    }

    fn child_height(child: &Option<Box<Node<T>>>) -> usize {
        child.as_ref().map_or(0, |n| n.height)
    }
}
