//! A growable array with bounds-checked positional access.
//!
//! # Examples
//!
//! ```
//! use ds::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.append(5);
//! array.append(10);
//! array.insert(1, 7).unwrap();
//!
//! assert_eq!(array.as_slice(), &[5, 7, 10]);
//! assert_eq!(array.delete(0), Ok(5));
//! assert_eq!(array.get(0), Ok(&7));
//! ```

use crate::error::{Error, Result};

/// A contiguous, resizable sequence. Backed by a `Vec`, so the spare
/// capacity is never observable through this API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array that can hold `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no stored elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` to the end. Amortized `O(1)`.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Inserts `value` at `index`, shifting everything after it one place right.
    /// `index == len` is allowed and behaves like [`append`][Self::append].
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything after it
    /// one place left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.items.remove(index))
    }

    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
