//! A first-in-first-out queue.
//!
//! # Examples
//!
//! ```
//! use ds::{Error, Queue};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(Error::EmptyCollection));
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Values come out in the order they went in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds `value` to the back.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyCollection)
    }

    /// The front value, without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::EmptyCollection)
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
