//! Insertion strategies, including the AVL rebalancing that keeps [`AvlTree`]s shallow.
//!
//! An AVL tree caches each node's height and, after every insertion, walks back up the
//! insertion path. Any node whose subtrees differ in height by two is rotated back into balance.
//! See [the Wikipedia page][wiki] for the terminology used here.
//!
//! Only insertion rebalances. Removal keeps heights up to date but never rotates.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use avl_bst::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for value in 0..1023 {
//!     tree.insert(value);
//! }
//!
//! // Sorted insertions would make a chain of height 1022 in a plain tree.
//! assert_eq!(tree.height(), 9);
//! ```
//!
//! [`AvlTree`]: crate::AvlTree

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::node::{self, Link, Node};

mod sealed {
    pub trait Sealed {}
}

/// How a tree shapes itself while inserting. Implemented by [`Unbalanced`] and [`Avl`].
pub trait Balance: sealed::Sealed {
    /// Inserts `value` into the subtree behind `link`, ordering it with `comparator`. Values
    /// comparing less than a node go left, everything else goes right.
    fn insert<T, C>(link: &mut Option<Box<Node<T>>>, value: T, comparator: &C)
    where
        C: Comparator<T>;
}

/// Inserts as a leaf at the end of the search path and never restructures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unbalanced;

/// Inserts like [`Unbalanced`], then rotates any node left two levels out of balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Avl;

impl sealed::Sealed for Unbalanced {}
impl sealed::Sealed for Avl {}

impl Balance for Unbalanced {
    fn insert<T, C>(link: &mut Link<T>, value: T, comparator: &C)
    where
        C: Comparator<T>,
    {
        match link {
            None => *link = Some(Node::new_boxed(value)),
            Some(node) => {
                match comparator.compare(&value, &node.value) {
                    Ordering::Less => Self::insert(&mut node.left, value, comparator),
                    Ordering::Equal | Ordering::Greater => {
                        Self::insert(&mut node.right, value, comparator)
                    }
                }
                node.fix_height();
            }
        }
    }
}

impl Balance for Avl {
    fn insert<T, C>(link: &mut Link<T>, value: T, comparator: &C)
    where
        C: Comparator<T>,
    {
        match link {
            None => {
                *link = Some(Node::new_boxed(value));
                return;
            }
            Some(node) => match comparator.compare(&value, &node.value) {
                Ordering::Less => Self::insert(&mut node.left, value, comparator),
                Ordering::Equal | Ordering::Greater => {
                    Self::insert(&mut node.right, value, comparator)
                }
            },
        }
        rebalance(link);
    }
}

/// Recomputes the height of the node behind `link` and rotates it if one subtree is exactly two
/// levels taller than the other.
///
/// Which rotation is needed depends on which side of the taller child the new value landed. The
/// taller child's balance factor tells: leaning the same way as the node calls for a single
/// rotation, leaning the other way for a double one.
fn rebalance<T>(link: &mut Link<T>) {
    let Some(node) = link.as_deref_mut() else {
        return;
    };
    node.fix_height();
    match node.balance_factor() {
        2 => {
            if node.left.as_deref().map_or(0, Node::balance_factor) >= 0 {
                single_left_rotation(link);
            } else {
                double_left_rotation(link);
            }
        }
        -2 => {
            if node.right.as_deref().map_or(0, Node::balance_factor) <= 0 {
                single_right_rotation(link);
            } else {
                double_right_rotation(link);
            }
        }
        _ => {}
    }

    if cfg!(debug_assertions) {
        if let Some(node) = link.as_deref() {
            let left_height = node::height(&node.left);
            let right_height = node::height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
        }
    }
}

/// Lifts the left child up to replace the node behind `link`. Used when the left subtree is too
/// tall because of its own left subtree.
///
/// # Diagram
///
/// ```text
///        node                 pivot
///       /    \               /     \
///    pivot    z   rotate ->  x     node
///    /   \                         /  \
///   x     y                       y    z
/// ```
fn single_left_rotation<T>(link: &mut Link<T>) {
    let Some(mut node) = link.take() else {
        return;
    };
    let Some(mut pivot) = node.left.take() else {
        *link = Some(node);
        return;
    };
    log::trace!("single left rotation at height {}", node.height);

    node.left = pivot.right.take();
    node.fix_height();

    pivot.right = Some(node);
    pivot.fix_height();
    *link = Some(pivot);
}

/// Lifts the right child up to replace the node behind `link`. The mirror image of
/// [`single_left_rotation`].
///
/// # Diagram
///
/// ```text
///     node                       pivot
///    /    \                     /     \
///   x    pivot    rotate ->   node     z
///        /   \                /  \
///       y     z              x    y
/// ```
fn single_right_rotation<T>(link: &mut Link<T>) {
    let Some(mut node) = link.take() else {
        return;
    };
    let Some(mut pivot) = node.right.take() else {
        *link = Some(node);
        return;
    };
    log::trace!("single right rotation at height {}", node.height);

    node.right = pivot.left.take();
    node.fix_height();

    pivot.left = Some(node);
    pivot.fix_height();
    *link = Some(pivot);
}

/// Used when the left subtree is too tall because of its own right subtree: that grandchild is
/// lifted twice, ending up where the node was.
fn double_left_rotation<T>(link: &mut Link<T>) {
    if let Some(node) = link.as_deref_mut() {
        single_right_rotation(&mut node.left);
    }
    single_left_rotation(link);
}

/// The mirror image of [`double_left_rotation`].
fn double_right_rotation<T>(link: &mut Link<T>) {
    if let Some(node) = link.as_deref_mut() {
        single_left_rotation(&mut node.right);
    }
    single_right_rotation(link);
}
