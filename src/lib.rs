//! This crate exposes an unbalanced Binary Search Tree (BST) and a self balancing AVL tree
//! sharing one engine, plus a small ordered set built on top of them.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of a
//! [`BinarySearchTree`] are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are allowed.
//!
//! An [`AvlTree`] routes insertions the same way, but a rotation can lift a duplicate above an
//! equal value, so its left subtrees may also hold values equal to their root. An inorder walk
//! still visits values in sorted order.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! A plain BST fed sorted values degenerates into a linked list of height `N - 1`. An
//! [`AvlTree`] caches the height of every `Node` and rotates after each insertion so that
//! no two sibling subtrees differ in height by more than one, which keeps the height at
//! `O(lg N)`. Only insertion rebalances: removals keep heights correct but never rotate.
//!
//! ```
//! use avl_bst::{AvlTree, BinarySearchTree};
//!
//! let plain: BinarySearchTree<_> = (0..100).collect();
//! let avl: AvlTree<_> = (0..100).collect();
//!
//! assert_eq!(plain.height(), 99);
//! assert_eq!(avl.height(), 6);
//! ```
//!
//! ## Ordering
//!
//! Trees are ordered by a [`Comparator`] fixed at construction. [`Natural`] uses the value's
//! [`Ord`] implementation and any `Fn(&T, &T) -> Ordering` closure works too.
//!
//! ## Logging
//!
//! Structural changes (insertions, removals, rotations) are reported through the [`log`]
//! facade at `trace` level. Install any logger, such as `env_logger` with
//! `RUST_LOG=avl_bst=trace`, to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod compare;
pub mod error;
pub mod set;
pub mod traverse;
pub mod tree;

mod node;


pub use avl::{Avl, Balance, Unbalanced};
pub use compare::{Comparator, Natural};
pub use error::{Result, TreeError};
pub use node::Node;
pub use set::OrderedSet;
pub use traverse::{Order, Traversal};
pub use tree::{AvlTree, BinarySearchTree, Tree};
