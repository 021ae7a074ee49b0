//! An unbalanced Binary Search Tree. Each node exclusively owns its two subtrees and every value
//! is its own key, so the tree behaves like an ordered set.
//!
//! No rebalancing happens, so the shape depends entirely on insertion order. Inserting values in
//! sorted order produces a tree that is really a linked list with height `N`.
//!
//! # Examples
//!
//! ```
//! use ds::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&5).is_none());
//!
//! for value in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(value);
//! }
//!
//! // In-order traversal is always sorted.
//! assert_eq!(tree.inorder_traversal(), vec![2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.height(), 3);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.preorder_traversal(), vec![6, 3, 2, 4, 7, 8]);
//! assert!(tree.is_valid_bst());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use log::trace;

type Link<T> = Option<Box<TreeNode<T>>>;

/// A node in a [`BinarySearchTree`]. Every value in its left subtree is smaller than its own
/// value and every value in its right subtree is larger.
#[derive(Debug)]
pub struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// Depth-first visiting orders.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}

impl<T> TreeNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn size(node: Option<&Self>) -> usize {
        node.map_or(0, |n| Self::size(n.left()) + Self::size(n.right()) + 1)
    }

    /// A leaf has a height of 1 and an absent node a height of 0.
    fn height(node: Option<&Self>) -> usize {
        node.map_or(0, |n| Self::height(n.left()).max(Self::height(n.right())) + 1)
    }

    fn depth_first(node: Option<&Self>, order: Order, values: &mut Vec<T>)
    where
        T: Clone,
    {
        let Some(node) = node else {
            return;
        };
        if order == Order::Pre {
            values.push(node.value.clone());
        }
        Self::depth_first(node.left(), order, values);
        if order == Order::In {
            values.push(node.value.clone());
        }
        Self::depth_first(node.right(), order, values);
        if order == Order::Post {
            values.push(node.value.clone());
        }
    }

    /// Checks that every value in the subtree lies strictly between `min` and `max`. A missing
    /// bound is unbounded on that side.
    fn is_valid(node: Option<&Self>, min: Option<&T>, max: Option<&T>) -> bool
    where
        T: Ord,
    {
        let Some(node) = node else {
            return true;
        };
        if min.is_some_and(|min| node.value <= *min) || max.is_some_and(|max| node.value >= *max) {
            return false;
        }
        Self::is_valid(node.left(), min, Some(&node.value))
            && Self::is_valid(node.right(), Some(&node.value), max)
    }

    /// Detaches the leftmost node of the subtree owned by `link`, putting that node's right child
    /// in the slot it occupied. When `link` itself holds the leftmost node (e.g. the in-order
    /// successor is its parent's immediate right child) the right child goes into `link`.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

/// A Binary Search Tree of unique values. This can be used for inserting, searching, and
/// deleting values and for walking them in several orders.
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Tear down with an explicit stack so a degenerate tree isn't dropped recursively.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    // Copy with an explicit stack of (source node, empty slot) pairs, for the same reason as
    // `drop`.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut pending: Vec<(&TreeNode<T>, &mut Link<T>)> = Vec::new();
        if let Some(node) = self.root() {
            pending.push((node, &mut root));
        }
        while let Some((source, slot)) = pending.pop() {
            let copy = slot.insert(Box::new(TreeNode::new(source.value.clone())));
            let TreeNode { left, right, .. } = &mut **copy;
            if let Some(node) = source.left() {
                pending.push((node, left));
            }
            if let Some(node) = source.right() {
                pending.push((node, right));
            }
        }
        Self { root }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root())
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree untouched, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    trace!("ignoring insert of a value already in the tree");
                    return false;
                }
            }
        }
        *link = Some(Box::new(TreeNode::new(value)));
        true
    }

    /// Potentially finds the node holding `value`. If no node has the value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.search(&5).map(|n| *n.value()), Some(5));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&TreeNode<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Deletes `value` from the tree and returns it. If the tree does not contain the value,
    /// nothing happens.
    ///
    /// A node with at most one child is replaced by that child. A node with two children stays
    /// where it is and takes the value of its in-order successor, which is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert!(tree.search(&5).is_none());
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        // `link` is the slot owning the node being looked at: the root, or a child slot of the
        // previous node.
        let mut link = &mut self.root;
        loop {
            let ordering = value.cmp(&link.as_ref()?.value);
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
                Ordering::Equal => break,
            };
        }

        let target = link.as_mut()?;
        if target.left.is_some() && target.right.is_some() {
            let successor = TreeNode::take_leftmost(&mut target.right)?;
            trace!("deleting a node with two children, promoting its in-order successor");
            return Some(std::mem::replace(&mut target.value, successor.value));
        }

        let mut removed = link.take()?;
        trace!(
            "deleting a node with {} child",
            if removed.is_leaf() { "no" } else { "one" }
        );
        *link = removed.left.take().or_else(|| removed.right.take());
        Some(removed.value)
    }

    /// Values in ascending order (left subtree, node, right subtree).
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.depth_first(Order::In)
    }

    /// Values with every node before its subtrees (node, left subtree, right subtree).
    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.depth_first(Order::Pre)
    }

    /// Values with every node after its subtrees (left subtree, right subtree, node).
    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.depth_first(Order::Post)
    }

    /// Values level by level from the root down, left to right within a level.
    pub fn level_order_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        let mut pending: VecDeque<&TreeNode<T>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop_front() {
            values.push(node.value.clone());
            pending.extend(node.left());
            pending.extend(node.right());
        }
        values
    }

    /// The node holding the smallest value, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&TreeNode<T>> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current)
    }

    /// The node holding the largest value, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<&TreeNode<T>> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(current)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        TreeNode::size(self.root())
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty tree has height 0
    /// and a tree with just a root has height 1.
    pub fn height(&self) -> usize {
        TreeNode::height(self.root())
    }

    /// Checks the ordering invariant over the whole tree. Equal values anywhere make the tree
    /// invalid.
    pub fn is_valid_bst(&self) -> bool
    where
        T: Ord,
    {
        TreeNode::is_valid(self.root(), None, None)
    }

    fn depth_first(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        TreeNode::depth_first(self.root(), order, &mut values);
        values
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
