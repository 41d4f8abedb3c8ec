//! A self-balancing BST (specifically, an AVL tree). The public contract is
//! the same as the [`ordered`](crate::ordered) tree's, and the comparison
//! logic on the way down is identical. The difference is on the way back up:
//! every ancestor of a structural change recomputes its height and, if its
//! subtrees' heights now differ by more than one, rotates to restore the
//! balance. This pins the height - and so the cost of every operation - to
//! `O(lg N)` regardless of insertion order.
//!
//! # Examples
//!
//! ```
//! use ordtree::balanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input, which would degenerate an unbalanced BST.
//! for x in 1..=1000 {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.size(), 1000);
//! assert!(tree.height() <= 14); // ~1.44 * lg(1000)
//! assert_eq!(tree.remove(&500), Some(500));
//! assert!(!tree.contains(&500));
//! ```

use std::cmp::Ordering;

use crate::iter::InOrderIter;
use crate::node::Node;

/// A height-balanced Binary Search Tree maintaining the AVL invariant: for
/// every node, the heights of its two subtrees differ by at most one.
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
    /// Inserts the given element into the tree as a new leaf, then
    /// rebalances the path back to the root. Duplicates are permitted: an
    /// element equal to an existing one descends to its left, so the size
    /// grows by one on every call.
    ///
    /// At most one rotation (single or double) fires per insertion, but the
    /// heights of all ancestors are recomputed regardless, since later
    /// rebalancing decisions depend on them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3); // would be a chain of 3 without the rotation
    ///
    /// assert_eq!(tree.height(), 2);
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
    /// use ordtree::balanced::Tree;
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
    /// it, rebalancing the path back to the root. If the tree does not
    /// contain such an element, nothing happens and `None` is returned; the
    /// size shrinks by one exactly when an element comes back.
    ///
    /// Unlike insertion, a single removal can require a rotation at more
    /// than one level, so every ancestor is checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::balanced::Tree;
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
                    // Same tie-break as the unbalanced tree: ties descend left.
                    Ordering::Less | Ordering::Equal => {
                        let new_left = Self::insert_node(n.take_left(), element);
                        n.set_left(Some(new_left));
                    }
                    Ordering::Greater => {
                        let new_right = Self::insert_node(n.take_right(), element);
                        n.set_right(Some(new_right));
                    }
                }
                Self::rebalance(n)
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
                (Some(Self::rebalance(n)), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = Self::remove_node(n.take_right(), key);
                n.set_right(new_right);
                (Some(Self::rebalance(n)), removed)
            }
            Ordering::Equal => match (n.take_left(), n.take_right()) {
                (None, None) => (None, Some(n.into_element())),
                (Some(left), None) => (Some(left), Some(n.into_element())),
                (None, Some(right)) => (Some(right), Some(n.into_element())),

                // With two children we promote this node's predecessor - the
                // largest element in its left subtree - same as the
                // unbalanced tree, but rebalancing on the way back out.
                (Some(left), Some(right)) => {
                    let (new_left, predecessor) = Self::remove_max(left);
                    let removed = n.replace_element(predecessor);
                    n.set_left(new_left);
                    n.set_right(Some(right));
                    (Some(Self::rebalance(n)), Some(removed))
                }
            },
        }
    }

    /// Removes the largest node in the subtree by recursing to the right
    /// until there is no right child, rebalancing each node on the way back.
    /// Returns the remaining subtree and the element of the removed node.
    fn remove_max(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.take_right() {
            None => (node.take_left(), node.into_element()),
            Some(right) => {
                let (new_right, max) = Self::remove_max(right);
                node.set_right(new_right);
                (Some(Self::rebalance(node)), max)
            }
        }
    }

    /// Recomputes `node`'s height and, if its balance factor has left
    /// `[-1, 1]`, rotates to restore the AVL invariant. Takes ownership of
    /// the subtree and returns its (possibly new) root.
    ///
    /// See [the Wikipedia page][wiki] for the rebalancing terminology.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.update_height();

        let left_leans_right = |n: &Node<T>| n.left().map_or(0, Node::balance_factor) < 0;
        let right_leans_left = |n: &Node<T>| n.right().map_or(0, Node::balance_factor) > 0;

        let new_root = match node.balance_factor() {
            2 => {
                if left_leans_right(&node) {
                    // Left-right case: the left child leans right, so a bare
                    // right rotation would just flip the imbalance. Rotate
                    // the left child left first.
                    let left = node.take_left().expect("left-heavy node has a left child");
                    node.set_left(Some(Self::rotate_left(left)));
                }
                Self::rotate_right(node)
            }
            -2 => {
                if right_leans_left(&node) {
                    // Right-left case, the mirror image of the above.
                    let right = node
                        .take_right()
                        .expect("right-heavy node has a right child");
                    node.set_right(Some(Self::rotate_right(right)));
                }
                Self::rotate_left(node)
            }
            _ => node,
        };

        // After rebalancing, assert that we've restored/maintained the AVL
        // invariant and the height bookkeeping.
        if cfg!(debug_assertions) {
            let left_height = new_root.left().map_or(0, |n| n.height());
            let right_height = new_root.right().map_or(0, |n| n.height());
            assert_eq!(new_root.height(), left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        new_root
    }

    /// Rotates the subtree to the right, lifting the left child up to become
    /// the local root. To maintain the in-order sequence, the left child's
    /// right subtree moves over to become the demoted node's left subtree.
    /// Must only be called when there _is_ a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root            new_root
    ///       /    \              /    \
    ///   new_root  z  rotate -> x   old_root
    ///    /  \                        /  \
    ///   x    y                      y    z
    /// ```
    fn rotate_right(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.take_left().expect("rotate right => left child");
        old_root.set_left(new_root.take_right());
        old_root.update_height();
        new_root.set_right(Some(old_root));
        new_root.update_height();
        new_root
    }

    /// The mirror image of [`rotate_right`](Self::rotate_right): lifts the
    /// right child up to become the local root, moving its left subtree over
    /// to the demoted node. Must only be called when there _is_ a right
    /// child.
    fn rotate_left(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_root = old_root.take_right().expect("rotate left => right child");
        old_root.set_right(new_root.take_left());
        old_root.update_height();
        new_root.set_left(Some(old_root));
        new_root.update_height();
        new_root
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    fn balanced<T>(node: Option<&Node<T>>) -> bool {
        match node {
            None => true,
            Some(n) => {
                n.balance_factor().abs() <= 1 && balanced(n.left()) && balanced(n.right())
            }
        }
    }

    /// Applies a set of operations to a tree and a sorted-`Vec` multiset
    /// model, checking the AVL invariant after every step.
    fn do_ops<T: Ord + Clone>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut Vec<T>) {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(x.clone());
                    model.push(x.clone());
                }
                Op::Remove(x) => {
                    let in_model = model.iter().position(|m| m == x);
                    assert_eq!(tree.remove(x).is_some(), in_model.is_some());
                    if let Some(position) = in_model {
                        model.remove(position);
                    }
                }
                Op::Iter => {
                    let mut sorted = model.clone();
                    sorted.sort();
                    assert!(tree.iter().eq(sorted.iter()));
                }
            }
            assert!(balanced(tree.root.as_deref()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model);
            model.sort();
            tree.size() == model.len() && tree.iter().copied().collect::<Vec<_>>() == model
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            let elements: Vec<&i8> = tree.iter().collect();
            elements.windows(2).all(|w| w[0] <= w[1])
        }
    }

    quickcheck::quickcheck! {
        fn every_insertion_preserves_balance(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            xs.iter().all(|x| {
                tree.insert(*x);
                balanced(tree.root.as_deref())
            })
        }
    }

    quickcheck::quickcheck! {
        fn contains_every_inserted_element(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }
}
