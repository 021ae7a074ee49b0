//! A doubly-linked list with a cached tail.
//!
//! Nodes live in an arena owned by the list and refer to their neighbours by slot index, so the
//! backward links never own anything. Freed slots are reused by later insertions.
//!
//! # Examples
//!
//! ```
//! use ds::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.reverse();
//!
//! let head = list.head().unwrap();
//! let tail = list.tail().unwrap();
//! assert_eq!(head.value(), &2);
//! assert_eq!(tail.value(), &1);
//!
//! // Walk forward from the head and backward from the tail.
//! assert_eq!(head.next().map(|n| *n.value()), Some(1));
//! assert_eq!(tail.prev().map(|n| *n.value()), Some(2));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Slot index of a node in the list's arena.
type Index = usize;

#[derive(Clone, Debug)]
struct DoubleNode<T> {
    value: T,
    next: Option<Index>,
    /// Back-reference used only for traversal.
    prev: Option<Index>,
}

/// A list that can be walked from either end.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<Option<DoubleNode<T>>>,
    /// Vacated slots in `nodes`, reused before growing.
    free: Vec<Index>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Adds `value` after the tail. `O(1)`.
    pub fn append(&mut self, value: T) {
        let new = self.alloc(value);
        match self.tail {
            Some(tail) => {
                self.node_mut(tail).next = Some(new);
                self.node_mut(new).prev = Some(tail);
            }
            None => self.head = Some(new),
        }
        self.tail = Some(new);
    }

    /// Inserts `value` so that it ends up at `position`. Position `0` makes it the new head and
    /// `position == size()` makes it the new tail.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `position > size()`. The list is left untouched.
    pub fn insert(&mut self, position: usize, value: T) -> Result<()> {
        if position == 0 {
            self.push_front(value);
            return Ok(());
        }

        // Find the node that will sit right before the new one.
        let Some(mut before) = self.head else {
            return Err(self.rejected(position, 0));
        };
        for walked in 0..position - 1 {
            before = match self.node(before).next {
                Some(next) => next,
                None => return Err(self.rejected(position, walked + 1)),
            };
        }

        let after = self.node(before).next;
        let new = self.alloc(value);
        {
            let node = self.node_mut(new);
            node.prev = Some(before);
            node.next = after;
        }
        self.node_mut(before).next = Some(new);
        match after {
            Some(after) => self.node_mut(after).prev = Some(new),
            None => self.tail = Some(new),
        }
        trace!("doubly list linked slot {new} at position {position}");
        Ok(())
    }

    /// Removes the first node holding `value` and returns its value. Nothing happens if no node
    /// matches.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.position_of(value)?;
        let node = self.nodes[index].take()?;
        self.free.push(index);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        trace!("doubly list unlinked slot {index}");
        Some(node.value)
    }

    /// Finds the first node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>>
    where
        T: PartialEq,
    {
        self.position_of(value).map(|index| self.node_ref(index))
    }

    /// Counts the nodes by walking from the head. `O(n)`.
    pub fn size(&self) -> usize {
        self.indices().count()
    }

    /// Whether the list has no nodes. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Reverses the list in place by swapping every node's links, then swapping head and tail.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.node_mut(index);
            std::mem::swap(&mut node.next, &mut node.prev);
            // The old `next` is now in `prev`.
            current = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        trace!("doubly list reversed");
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.head.map(|index| self.node_ref(index))
    }

    /// The last node, if any. `O(1)`.
    pub fn tail(&self) -> Option<NodeRef<'_, T>> {
        self.tail.map(|index| self.node_ref(index))
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
            list: self,
            next: self.head,
        }
    }

    fn push_front(&mut self, value: T) {
        let new = self.alloc(value);
        match self.head {
            Some(head) => {
                self.node_mut(new).next = Some(head);
                self.node_mut(head).prev = Some(new);
            }
            None => self.tail = Some(new),
        }
        self.head = Some(new);
        trace!("doubly list linked slot {new} at position 0");
    }

    fn rejected(&self, position: usize, len: usize) -> Error {
        debug!("doubly list insert at {position} rejected, list has {len} nodes");
        Error::IndexOutOfRange {
            index: position,
            len,
        }
    }

    fn position_of(&self, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        self.indices().find(|&index| self.node(index).value == *value)
    }

    fn indices(&self) -> impl Iterator<Item = Index> + '_ {
        std::iter::successors(self.head, |&index| self.node(index).next)
    }

    fn alloc(&mut self, value: T) -> Index {
        let node = Some(DoubleNode {
            value,
            next: None,
            prev: None,
        });
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Every index reachable through `head`, `tail` or a link refers to an occupied slot, so a
    /// vacant slot here is a broken list.
    fn node(&self, index: Index) -> &DoubleNode<T> {
        match &self.nodes[index] {
            Some(node) => node,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }

    fn node_mut(&mut self, index: Index) -> &mut DoubleNode<T> {
        match &mut self.nodes[index] {
            Some(node) => node,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }

    fn node_ref(&self, index: Index) -> NodeRef<'_, T> {
        NodeRef { list: self, index }
    }
}

/// A borrowed view of one node in a [`DoublyLinkedList`]. It can step to either neighbour.
pub struct NodeRef<'a, T> {
    list: &'a DoublyLinkedList<T>,
    index: Index,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.list.node(self.index).value
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.list
            .node(self.index)
            .next
            .map(|index| self.list.node_ref(index))
    }

    /// The preceding node, if any.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.list
            .node(self.index)
            .prev
            .map(|index| self.list.node_ref(index))
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .finish()
    }
}

impl<T> fmt::Debug for DoublyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for DoublyLinkedList<T>
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

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator over a [`DoublyLinkedList`], created by
/// [`DoublyLinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    next: Option<Index>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.next;
        Some(&node.value)
    }
}
