//! A plain, unbalanced BST. Insertions descend by comparison and always land
//! as a new leaf; nothing is ever rotated. The resulting shape - and so the
//! cost of every operation - depends entirely on insertion order. Feed it
//! random input and expect `O(lg N)` operations; feed it sorted input and it
//! degenerates into a linked list with `O(N)` operations.
//!
//! # Examples
//!
//! ```
//! use ordtree::ordered::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.size(), 3);
//!
//! // Removing an element returns it.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&3), None);
//!
//! let elements: Vec<&i32> = tree.iter().collect();
//! assert_eq!(elements, [&1, &2]);
//! ```

use std::cmp::Ordering;

use crate::iter::InOrderIter;
use crate::node::Node;

/// An unbalanced Binary Search Tree. This can be used for inserting,
/// finding, and removing elements, and for iterating over them in
/// ascending order.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of elements stored in the tree. This is tracked
    /// alongside the structure so it costs `O(1)`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The height of the tree - the number of nodes on the longest path from
    /// the root to a leaf. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Removes every element by dropping the root of the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns a lazy in-order iterator over the elements of the tree,
    /// smallest first. The iterator borrows the tree, so the tree cannot be
    /// mutated until the iterator is dropped.
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self.root.as_deref())
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts the given element into the tree as a new leaf. Duplicates are
    /// permitted: an element equal to an existing one descends to its left,
    /// so the size grows by one on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, element: T) {
        let root = self.root.take();
        self.root = Some(Self::insert_node(root, element));
        self.size += 1;
    }

    /// Potentially finds the node holding the given key in this tree. The
    /// first match on the descent path is returned; if no node has the key,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.element()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        Self::find_node(self.root.as_deref(), key)
    }

    /// Whether the tree holds an element equal to the given key.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Removes one element equal to the given key from the tree and returns
    /// it. If the tree does not contain such an element, nothing happens and
    /// `None` is returned; the size shrinks by one exactly when an element
    /// comes back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert_eq!(tree.size(), 0);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let (root, removed) = Self::remove_node(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    fn insert_node(node: Option<Box<Node<T>>>, element: T) -> Box<Node<T>> {
        match node {
            None => Box::new(Node::new(element)),
            Some(mut n) => {
                match element.cmp(n.element()) {
                    // Ties descend left so duplicates land deterministically.
                    Ordering::Less | Ordering::Equal => {
                        let new_left = Self::insert_node(n.take_left(), element);
                        n.set_left(Some(new_left));
                    }
                    Ordering::Greater => {
                        let new_right = Self::insert_node(n.take_right(), element);
                        n.set_right(Some(new_right));
                    }
                }
                n.update_height();
                n
            }
        }
    }

    fn find_node<'a>(node: Option<&'a Node<T>>, key: &T) -> Option<&'a Node<T>> {
        let n = node?;
        match key.cmp(n.element()) {
            Ordering::Less => Self::find_node(n.left(), key),
            Ordering::Equal => Some(n),
            Ordering::Greater => Self::find_node(n.right(), key),
        }
    }

    /// Removes the node holding `key` from this subtree, returning the
    /// (possibly new) subtree root and the removed element.
    fn remove_node(node: Option<Box<Node<T>>>, key: &T) -> (Option<Box<Node<T>>>, Option<T>) {
        let Some(mut n) = node else {
            return (None, None);
        };
        match key.cmp(n.element()) {
            Ordering::Less => {
                let (new_left, removed) = Self::remove_node(n.take_left(), key);
                n.set_left(new_left);
                n.update_height();
                (Some(n), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = Self::remove_node(n.take_right(), key);
                n.set_right(new_right);
                n.update_height();
                (Some(n), removed)
            }
            Ordering::Equal => match (n.take_left(), n.take_right()) {
                (None, None) => (None, Some(n.into_element())),
                (Some(left), None) => (Some(left), Some(n.into_element())),
                (None, Some(right)) => (Some(right), Some(n.into_element())),

                // With two children we have to figure out which element to
                // promote. We choose this node's predecessor - the largest
                // element in its left subtree.
                (Some(left), Some(right)) => {
                    let (new_left, predecessor) = Self::remove_max(left);
                    let removed = n.replace_element(predecessor);
                    n.set_left(new_left);
                    n.set_right(Some(right));
                    n.update_height();
                    (Some(n), Some(removed))
                }
            },
        }
    }

    /// Removes the largest node in the subtree by recursing to the right
    /// until there is no right child. Returns the remaining subtree and the
    /// element of the removed node.
    fn remove_max(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.take_right() {
            None => (node.take_left(), node.into_element()),
            Some(right) => {
                let (new_right, max) = Self::remove_max(right);
                node.set_right(new_right);
                node.update_height();
                (Some(node), max)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
