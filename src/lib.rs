//! This crate exposes two interchangeable Binary Search Trees (BSTs):
//! a plain, unbalanced tree and a height-balanced AVL tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a [`Node`](node::Node). A `Node` stores
//! an element and owns up to two child `Node`s. The most important
//! invariants of the trees in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an
//!    element less than or equal to its own element.
//! 2. For every `Node`, all the `Node`s in its right subtree have an
//!    element greater than or equal to its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching either tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). For the
//! [`ordered`] tree the height depends entirely on insertion order - feeding
//! it sorted input degenerates it into a linked list. The [`balanced`] tree
//! additionally maintains the AVL invariant - for every `Node`, the heights
//! of its two subtrees differ by at most one - so its height stays `O(lg N)`
//! no matter the insertion order. Both trees support sorted iteration via an
//! explicit-stack, in-order [iterator](iter::InOrderIter).
//!
//! Both trees accept duplicate elements; an element equal to the one at the
//! current node descends left, so equal elements land in a deterministic
//! position and each `remove` takes out exactly one of them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod error;
pub mod iter;
pub mod node;
pub mod ordered;
