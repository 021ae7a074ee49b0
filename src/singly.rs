//! A singly-linked list where every node owns the node after it.
//!
//! Positional insertion walks the chain, so most operations are `O(n)`.
//!
//! # Examples
//!
//! ```
//! use ds::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.append(1);
//! list.append(3);
//! list.insert(1, 2).unwrap();
//!
//! assert_eq!(list.to_string(), "1 2 3");
//!
//! list.reverse();
//! assert_eq!(list.head().map(|n| *n.value()), Some(3));
//! assert_eq!(list.tail().map(|n| *n.value()), Some(1));
//!
//! // Deleting returns the removed value, or `None` if nothing matched.
//! assert_eq!(list.delete(&2), Some(2));
//! assert_eq!(list.delete(&2), None);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

/// A list node. Owns its value and the rest of the chain.
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A chain of [`Node`]s starting at `head`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    // Unlink one node at a time so a long chain isn't dropped recursively.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Clone for SinglyLinkedList<T>
where
    T: Clone,
{
    // Copy through `Extend` so a long chain isn't cloned recursively.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Adds `value` after the current last node. Walks the whole chain.
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value)));
    }

    /// Inserts `value` so that it ends up at `position`. Position `0` makes it the new head and
    /// `position == size()` appends it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position > size()`. The list is left untouched.
    pub fn insert(&mut self, position: usize, value: T) -> Result<()> {
        let mut link = &mut self.head;
        for walked in 0..position {
            link = match link {
                Some(node) => &mut node.next,
                None => {
                    debug!("singly list insert at {position} rejected, list has {walked} nodes");
                    return Err(Error::IndexOutOfRange {
                        index: position,
                        len: walked,
                    });
                }
            };
        }

        let mut node = Box::new(Node::new(value));
        node.next = link.take();
        *link = Some(node);
        trace!("singly list linked a node at position {position}");
        Ok(())
    }

    /// Removes the first node holding `value` and returns its value. Nothing happens if no node
    /// matches.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.value != *value) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        trace!("singly list unlinked a node");
        Some(removed.value)
    }

    /// Finds the first node holding `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.nodes().find(|node| node.value == *value)
    }

    /// Counts the nodes. `O(n)`.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Whether the list has no nodes. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Reverses the chain in place. The old tail becomes the head.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = std::mem::replace(&mut node.next, reversed);
            reversed = Some(node);
        }
        self.head = reversed;
        trace!("singly list reversed");
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// The last node, if any. Walks the whole chain.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.nodes().last()
    }

    /// Prints the values in list order, separated by spaces, to stdout.
    pub fn print_list(&self)
    where
        T: fmt::Display,
    {
        print!("{self}");
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for SinglyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Find the tail once instead of once per value.
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
        }
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`], created by
/// [`SinglyLinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
