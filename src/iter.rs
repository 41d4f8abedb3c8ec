//! Lazy in-order traversal over either tree's nodes.
//!
//! The iterator substitutes an explicit stack of pending ancestors for
//! recursion, so it holds `O(height)` state at any instant rather than
//! `O(nodes)`. It borrows the tree it walks; the borrow checker therefore
//! rejects any attempt to mutate the tree mid-iteration at compile time.
//!
//! # Examples
//!
//! ```
//! use ordtree::ordered::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [2, 1, 3] {
//!     tree.insert(x);
//! }
//!
//! let elements: Vec<&i32> = tree.iter().collect();
//! assert_eq!(elements, [&1, &2, &3]);
//! ```

use crate::error::ExhaustedIterator;
use crate::node::Node;

/// A forward-only, non-restartable iterator yielding a tree's elements in
/// ascending order. Works identically over the [`ordered`](crate::ordered)
/// and [`balanced`](crate::balanced) trees since it only walks [`Node`]s.
#[derive(Debug)]
pub struct InOrderIter<'a, T> {
    /// Pending ancestors; the top of the stack is always the smallest
    /// unvisited element.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Push `node` and every left-descendant below it onto the stack.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }

    /// Whether another element remains to be yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// let mut iter = tree.iter();
    /// assert!(iter.has_next());
    /// iter.next();
    /// assert!(!iter.has_next());
    /// ```
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the next element in ascending order, or
    /// [`ExhaustedIterator`] if [`has_next`](Self::has_next) is false. The
    /// error case mutates nothing; calling again keeps returning the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::error::ExhaustedIterator;
    /// use ordtree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.try_next(), Ok(&1));
    /// assert_eq!(iter.try_next(), Err(ExhaustedIterator));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T, ExhaustedIterator> {
        // The top of the stack is the smallest unvisited node. Everything
        // smaller than its right subtree has been visited, so queue up that
        // subtree's left spine before yielding.
        let node = self.stack.pop().ok_or(ExhaustedIterator)?;
        self.push_left_spine(node.right());
        Ok(node.element())
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At least one element per pending ancestor; no cheap upper bound.
        (self.stack.len(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{balanced, ordered};

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: ordered::Tree<i32> = ordered::Tree::new();
        let mut iter = tree.iter();

        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(ExhaustedIterator));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn yields_elements_in_ascending_order() {
        let mut tree = ordered::Tree::new();
        for x in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(x);
        }

        let elements: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(elements, [1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn exhausted_iterator_keeps_failing() {
        let mut tree = ordered::Tree::new();
        tree.insert(1);

        let mut iter = tree.iter();
        assert_eq!(iter.try_next(), Ok(&1));
        assert_eq!(iter.try_next(), Err(ExhaustedIterator));
        assert_eq!(iter.try_next(), Err(ExhaustedIterator));
        assert!(!iter.has_next());
    }

    #[test]
    fn stack_depth_is_bounded_by_height() {
        let mut tree = balanced::Tree::new();
        for x in 0..128 {
            tree.insert(x);
        }

        let iter = tree.iter();
        assert!(iter.stack.len() <= tree.height());
    }

    #[test]
    fn works_with_a_for_loop() {
        let mut tree = balanced::Tree::new();
        for x in [2, 1, 3] {
            tree.insert(x);
        }

        let mut total = 0;
        for x in &tree {
            total += x;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn duplicates_are_all_yielded() {
        let mut tree = ordered::Tree::new();
        for x in [2, 2, 1, 2] {
            tree.insert(x);
        }

        let elements: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(elements, [1, 2, 2, 2]);
    }
}
