//! The binary search tree engine shared by the unbalanced and AVL trees.
//!
//! Values are placed with the tree's [`Comparator`]: smaller values go left, equal-or-greater
//! values go right. Duplicates are therefore allowed. In a [`BinarySearchTree`] a duplicate
//! always lands in the right subtree of an equal value. An [`AvlTree`] inserts the same way, but
//! its rotations can later lift a duplicate above an equal value, leaving that value in the
//! duplicate's left subtree. Either way an inorder walk stays sorted and lookups still find equal values.
//!
//! # Examples
//!
//! ```
//! use avl_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(10);
//! tree.insert(5);
//! tree.insert(20);
//! tree.insert(5);
//!
//! // Duplicates are kept.
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![5, 5, 10, 20]);
//!
//! // Removing takes out one copy at a time.
//! assert!(tree.remove(&5));
//! assert!(tree.remove(&5));
//! assert!(!tree.remove(&5));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::avl::{Avl, Balance, Unbalanced};
use crate::compare::{Comparator, Natural};
use crate::error::{Result, TreeError};
use crate::node::{self, Link, Node};
use crate::traverse::{Order, Traversal};

/// A binary search tree ordered by a comparator `C`, whose insertions are shaped by the
/// balancing strategy `B`.
///
/// Use it through [`BinarySearchTree`] (no rebalancing) or [`AvlTree`] (height balanced on
/// insertion). Every operation other than insertion is shared between the two.
pub struct Tree<T, C, B> {
    root: Link<T>,
    len: usize,
    comparator: C,
    balance: PhantomData<B>,
}

/// A plain binary search tree. Its shape depends entirely on insertion order.
pub type BinarySearchTree<T, C = Natural> = Tree<T, C, Unbalanced>;

/// A binary search tree that rebalances itself after every insertion (an AVL tree).
///
/// Removal does not rebalance, so a long run of removals can leave the tree leaning.
pub type AvlTree<T, C = Natural> = Tree<T, C, Avl>;

impl<T, C, B> Default for Tree<T, C, B>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C, B> Drop for Tree<T, C, B> {
    fn drop(&mut self) {
        node::release(&mut self.root);
    }
}

impl<T, C, B> Clone for Tree<T, C, B>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
            len: self.len,
            comparator: self.comparator.clone(),
            balance: PhantomData,
        }
    }
}

impl<T, C, B> fmt::Debug for Tree<T, C, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("preorder", &self.preorder().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, B> Tree<T, Natural, B> {
    /// Generates a new, empty tree ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C, B> Tree<T, C, B> {
    /// Generates a new, empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::AvlTree;
    ///
    /// let mut tree = AvlTree::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// tree.insert("ccc".to_string());
    /// tree.insert("a".to_string());
    ///
    /// assert_eq!(tree.find_min().map(String::as_str), Some("a"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            balance: PhantomData,
        }
    }

    /// Generates a new, empty tree ordered by `comparator`, failing with
    /// [`TreeError::MissingComparator`] when there isn't one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::{BinarySearchTree, TreeError};
    ///
    /// let reversed = |a: &i32, b: &i32| b.cmp(a);
    /// assert!(BinarySearchTree::<i32, _>::try_with_comparator(Some(reversed)).is_ok());
    ///
    /// let missing = BinarySearchTree::<i32, fn(&i32, &i32) -> std::cmp::Ordering>::try_with_comparator(None);
    /// assert_eq!(missing.err(), Some(TreeError::MissingComparator));
    /// ```
    pub fn try_with_comparator(comparator: Option<C>) -> Result<Self> {
        comparator
            .map(Self::with_comparator)
            .ok_or(TreeError::MissingComparator)
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// How many values are stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The height of the tree: 0 for a single node and -1 for an empty tree.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        log::trace!("clearing tree of {} values", self.len);
        node::release(&mut self.root);
        self.len = 0;
    }

    /// The smallest value in the tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [12, 8, 6, 11, 42].into_iter().collect();
    /// assert_eq!(tree.find_min(), Some(&6));
    /// assert_eq!(tree.find_max(), Some(&42));
    /// ```
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, or `None` if it is empty.
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Iterates over the values in preorder, the tree's default enumeration order.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::Preorder)
    }

    /// Iterates over the values in the given `order`.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root(), order, self.len)
    }

    /// Iterates over the values visiting each node before its subtrees.
    pub fn preorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Preorder)
    }

    /// Iterates over the values in sorted order.
    pub fn inorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Inorder)
    }

    /// Iterates over the values visiting each node after its subtrees.
    pub fn postorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::Postorder)
    }

    /// Iterates over the values level by level, starting at the root.
    pub fn breadth_first(&self) -> Traversal<'_, T> {
        self.traverse(Order::BreadthFirst)
    }

    /// Returns the values in breadth first order.
    ///
    /// Fails with [`TreeError::Empty`] if there is nothing to convert.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [12, 8, 6, 11, 42].into_iter().collect();
    /// assert_eq!(*tree.to_array().unwrap(), [12, 8, 42, 6, 11]);
    ///
    /// assert!(BinarySearchTree::<i32>::new().to_array().is_err());
    /// ```
    pub fn to_array(&self) -> Result<Box<[T]>>
    where
        T: Clone,
    {
        self.ensure_not_empty("to_array")?;
        Ok(self.breadth_first().cloned().collect())
    }

    /// Copies the values, in breadth first order, into `array` starting at `index`.
    ///
    /// Fails with [`TreeError::Empty`] on an empty tree and with [`TreeError::OutOfBounds`] if
    /// `array` is too short. `array` is left untouched on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [12, 8, 6, 11, 42].into_iter().collect();
    /// let mut array = [0; 8];
    /// tree.copy_to(&mut array, 3).unwrap();
    ///
    /// assert_eq!(array, [0, 0, 0, 12, 8, 42, 6, 11]);
    /// ```
    pub fn copy_to(&self, array: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        self.ensure_not_empty("copy_to")?;
        let out_of_bounds = TreeError::OutOfBounds {
            index,
            count: self.len,
            len: array.len(),
        };
        let slots = index
            .checked_add(self.len)
            .and_then(|end| array.get_mut(index..end))
            .ok_or(out_of_bounds)?;
        for (slot, value) in slots.iter_mut().zip(self.breadth_first()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    pub(crate) fn ensure_not_empty(&self, operation: &'static str) -> Result<()> {
        if self.root.is_none() {
            return Err(TreeError::Empty { operation });
        }
        Ok(())
    }
}

impl<T, C, B> Tree<T, C, B>
where
    C: Comparator<T>,
{
    /// Finds the first node on the search path whose value compares equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [10, 5, 14].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&5).map(|n| *n.value()), Some(5));
    /// assert!(tree.find(&34).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether a value comparing equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Finds the parent of the node holding `value`.
    ///
    /// Returns `Ok(None)` when `value` is not in the tree or when it compares equal to the
    /// root's value (the root has no parent, and a duplicate of the root is reported the same
    /// way). Fails with [`TreeError::Empty`] on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [10, 9, 23, 17, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.find_parent(&4).unwrap().map(|n| *n.value()), Some(9));
    /// assert_eq!(tree.find_parent(&17).unwrap().map(|n| *n.value()), Some(23));
    /// assert!(tree.find_parent(&10).unwrap().is_none());
    /// assert!(tree.find_parent(&32).unwrap().is_none());
    /// ```
    pub fn find_parent(&self, value: &T) -> Result<Option<&Node<T>>> {
        let root = self.root().ok_or(TreeError::Empty {
            operation: "find_parent",
        })?;
        if self.comparator.compare(value, &root.value) == Ordering::Equal {
            return Ok(None);
        }

        let mut parent = root;
        loop {
            let child = match self.comparator.compare(value, &parent.value) {
                Ordering::Less => parent.left(),
                Ordering::Equal | Ordering::Greater => parent.right(),
            };
            let Some(child) = child else {
                return Ok(None);
            };
            if self.comparator.compare(value, &child.value) == Ordering::Equal {
                return Ok(Some(parent));
            }
            parent = child;
        }
    }

    /// Removes one value comparing equal to `value`. Returns whether anything was removed.
    ///
    /// Removal never rebalances, not even on an [`AvlTree`].
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes one value comparing equal to `value` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [33, 21, 17, 24, 19, 14, 50, 49].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&21), Some(21));
    /// assert_eq!(tree.take(&21), None);
    ///
    /// // 21 had two children so its in-order predecessor took its place.
    /// assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.value()), Some(19));
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let removed = remove_from(&mut self.root, value, &self.comparator);
        match removed {
            Some(_) => {
                self.len -= 1;
                log::trace!("removed a value, {} left", self.len);
            }
            None => log::trace!("value to remove was not found"),
        }
        removed
    }
}

impl<T, C, B> Tree<T, C, B>
where
    C: Comparator<T>,
    B: Balance,
{
    /// Inserts `value` into the tree. Duplicates are always inserted, to the right of the
    /// values they compare equal to.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::{AvlTree, BinarySearchTree};
    ///
    /// let mut plain = BinarySearchTree::new();
    /// let mut avl = AvlTree::new();
    /// for value in [10, 20, 30] {
    ///     plain.insert(value);
    ///     avl.insert(value);
    /// }
    ///
    /// // The plain tree is a chain, the AVL tree rotated 20 up to the root.
    /// assert_eq!(plain.height(), 2);
    /// assert_eq!(avl.height(), 1);
    /// assert_eq!(avl.root().map(|n| *n.value()), Some(20));
    /// ```
    pub fn insert(&mut self, value: T) {
        B::insert(&mut self.root, value, &self.comparator);
        self.len += 1;
        log::trace!("inserted a value, tree now holds {}", self.len);
    }
}

/// Removes the first node matching `value` below `link`, recomputing heights on the way back
/// up. Returns the removed value.
fn remove_from<T, C>(link: &mut Link<T>, value: &T, comparator: &C) -> Option<T>
where
    C: Comparator<T>,
{
    let node = link.as_deref_mut()?;
    let removed = match comparator.compare(value, &node.value) {
        Ordering::Less => remove_from(&mut node.left, value, comparator),
        Ordering::Greater => remove_from(&mut node.right, value, comparator),
        Ordering::Equal => return unlink(link),
    };
    if removed.is_some() {
        node.fix_height();
    }
    removed
}

/// Unlinks the node behind `link` and returns its value.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        // A leaf (or the only node in the tree) just goes away.
        (None, None) => Some(node.value),
        (None, Some(right)) => {
            *link = Some(right);
            Some(node.value)
        }
        (Some(left), None) => {
            *link = Some(left);
            Some(node.value)
        }
        (Some(left), Some(right)) => {
            // Copy the in-order predecessor up into this node and unlink the predecessor. The
            // predecessor's left subtree takes its old place.
            node.left = Some(left);
            node.right = Some(right);
            let removed = detach_max(&mut node.left)
                .map(|predecessor| std::mem::replace(&mut node.value, predecessor));
            node.fix_height();
            *link = Some(node);
            removed
        }
    }
}

/// Detaches the largest node below `link` by walking right until there is no right child, and
/// returns its value. That node's left subtree is moved into the slot it leaves behind.
fn detach_max<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_deref_mut()?;
    if node.right.is_some() {
        let max = detach_max(&mut node.right);
        node.fix_height();
        return max;
    }
    let mut max = link.take()?;
    *link = max.left.take();
    Some(max.value)
}

impl<T, B> FromIterator<T> for Tree<T, Natural, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C, B> Extend<T> for Tree<T, C, B>
where
    C: Comparator<T>,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C, B> IntoIterator for &'a Tree<T, C, B> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
