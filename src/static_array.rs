//! A fixed-capacity array of optional slots.
//!
//! # Examples
//!
//! ```
//! use ds::StaticArray;
//!
//! let mut array = StaticArray::new(3);
//!
//! // Nothing has been written yet.
//! assert_eq!(array.get(0), Ok(None));
//!
//! array.set(0, 5).unwrap();
//! assert_eq!(array.get(0), Ok(Some(&5)));
//!
//! // The capacity never changes.
//! assert!(array.set(3, 1).is_err());
//! ```

use crate::error::{Error, Result};

/// Storage with a fixed number of slots. Each slot is either unset or holds a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> StaticArray<T> {
    /// Creates an array with `capacity` unset slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// The number of slots. Fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into the slot at `index`, overwriting anything already there.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= capacity`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.slot_mut(index)? = Some(value);
        Ok(())
    }

    /// Reads the slot at `index`. Returns `Ok(None)` for a slot that was never written.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.capacity(),
            })
    }

    /// Unsets the slot at `index` and returns whatever it held.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= capacity`.
    pub fn clear(&mut self, index: usize) -> Result<Option<T>> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Iterates over every slot in index order, including unset ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<T>> {
        let len = self.capacity();
        self.slots
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut array = StaticArray::new(5);

        array.set(0, 5).unwrap();
        assert_eq!(array.get(0), Ok(Some(&5)));

        array.set(1, 10).unwrap();
        assert_eq!(array.get(1), Ok(Some(&10)));

        array.set(4, 20).unwrap();
        assert_eq!(array.get(4), Ok(Some(&20)));

        // Overwrite.
        array.set(4, 21).unwrap();
        assert_eq!(array.get(4), Ok(Some(&21)));
    }

    #[test]
    fn unset_slots_read_as_none() {
        let array: StaticArray<i32> = StaticArray::new(2);
        assert_eq!(array.get(0), Ok(None));
        assert_eq!(array.get(1), Ok(None));
    }

    #[test]
    fn out_of_range() {
        let mut array = StaticArray::new(5);

        assert_eq!(
            array.set(5, 1),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            array.get(7),
            Err(Error::IndexOutOfRange { index: 7, len: 5 })
        );
        assert_eq!(
            array.clear(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn zero_capacity() {
        let mut array = StaticArray::new(0);
        assert_eq!(array.capacity(), 0);
        assert!(array.set(0, 'a').is_err());
        assert!(array.get(0).is_err());
    }

    #[test]
    fn clear_unsets() {
        let mut array = StaticArray::new(3);
        array.set(1, "one").unwrap();

        assert_eq!(array.clear(1), Ok(Some("one")));
        assert_eq!(array.get(1), Ok(None));
        assert_eq!(array.clear(1), Ok(None));
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn iter_visits_every_slot() {
        let mut array = StaticArray::new(3);
        array.set(2, 7).unwrap();

        let slots: Vec<_> = array.iter().collect();
        assert_eq!(slots, vec![None, None, Some(&7)]);
    }
}
