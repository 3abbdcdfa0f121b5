//! Orderings used by the trees to place and look up values.
//!
//! Every tree is handed a [`Comparator`] when it is built and keeps it for its whole lifetime.
//! [`Natural`] uses the element type's own [`Ord`] implementation and is what
//! [`BinarySearchTree::new`](crate::BinarySearchTree::new) picks. Any closure of the shape
//! `Fn(&T, &T) -> Ordering` is a comparator too.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use avl_bst::BinarySearchTree;
//!
//! // Largest values first.
//! let mut tree = BinarySearchTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// A total order over `T` that decides where values live in a tree.
///
/// Values comparing [`Ordering::Less`] than a node go into its left subtree, everything else
/// (including [`Ordering::Equal`]) goes right.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T`, as given by its [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
