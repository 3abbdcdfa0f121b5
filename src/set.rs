//! A sorted set of unique values kept in an [`AvlTree`].
//!
//! # Examples
//!
//! ```
//! use avl_bst::OrderedSet;
//!
//! let mut set: OrderedSet<_> = [5, 1, 4].into_iter().collect();
//!
//! // Already there.
//! assert!(!set.insert(4));
//! assert!(set.insert(3));
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
//! assert_eq!(&*set.to_array().unwrap(), &[1, 3, 4, 5]);
//! ```

use std::fmt;

use crate::compare::{Comparator, Natural};
use crate::error::Result;
use crate::traverse::Traversal;
use crate::tree::AvlTree;

/// A set that enumerates its values in the order given by its comparator.
///
/// Two values are the same element when the comparator says they are
/// [`Equal`](std::cmp::Ordering::Equal).
pub struct OrderedSet<T, C = Natural> {
    tree: AvlTree<T, C>,
}

impl<T, C> Default for OrderedSet<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Clone for OrderedSet<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedSet<T> {
    /// Generates a new, empty set ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Generates a new, empty set ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: AvlTree::with_comparator(comparator),
        }
    }

    /// The comparator ordering this set.
    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// How many values are in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set has no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The values in ascending order.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.tree.inorder()
    }

    /// Copies the values into a boxed slice, in ascending order.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`](crate::TreeError::Empty) if the set has no values.
    pub fn to_array(&self) -> Result<Box<[T]>>
    where
        T: Clone,
    {
        self.tree.ensure_not_empty("to_array")?;
        Ok(self.iter().cloned().collect())
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Comparator<T>,
{
    /// Adds `value` unless an equal value is already present. Returns whether it was added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.tree.contains(&value) {
            log::trace!("ignoring a value already in the set");
            return false;
        }
        self.tree.insert(value);
        true
    }

    /// Removes the value equal to `value`. Returns whether there was one.
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value)
    }

    /// Whether a value equal to `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for OrderedSet<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
