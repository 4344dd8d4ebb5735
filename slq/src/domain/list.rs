//! Growable, fallible record storage.

use std::slice;

use super::error::AllocationFailure;

/// Initial capacity of a list of stops.
pub const STOP_LIST_CAPACITY: usize = 10;

/// Initial capacity of a list of departures.
pub const DEPARTURE_LIST_CAPACITY: usize = 20;

/// An append-only list of records that owns its elements.
///
/// Capacity starts at a fixed value and doubles whenever an append would
/// exceed it. Growth is fallible: if memory cannot be reserved the append
/// is rejected and the list keeps its previous contents.
///
/// An optional ceiling bounds how far the list may grow, which is how a
/// constrained allocator is modelled.
///
/// # Examples
///
/// ```
/// use slq::domain::RecordList;
///
/// let mut list = RecordList::with_capacity(2).unwrap();
/// list.push("a").unwrap();
/// list.push("b").unwrap();
/// list.push("c").unwrap();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<T> {
    items: Vec<T>,
    capacity: usize,
    ceiling: Option<usize>,
}

impl<T> RecordList<T> {
    /// Create an empty list with room for `initial` records.
    pub fn with_capacity(initial: usize) -> Result<Self, AllocationFailure> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(initial)
            .map_err(|_| AllocationFailure::new("could not create record list"))?;

        Ok(Self {
            items,
            capacity: initial,
            ceiling: None,
        })
    }

    /// Refuse to grow beyond `ceiling` records.
    pub fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Append a fully built record.
    ///
    /// On failure the record is dropped and the list is left unchanged.
    pub fn push(&mut self, record: T) -> Result<(), AllocationFailure> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(record);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocationFailure> {
        let new_capacity = self
            .capacity
            .max(1)
            .checked_mul(2)
            .ok_or_else(|| AllocationFailure::new("record list capacity overflow"))?;

        if self.ceiling.is_some_and(|ceiling| new_capacity > ceiling) {
            return Err(AllocationFailure::new("record list is full"));
        }

        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| AllocationFailure::new("could not grow record list"))?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Keep only the records matching `keep`, preserving their order.
    ///
    /// Rejected records are dropped immediately.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records the list can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The records in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The first `count` records, or all of them if there are fewer.
    pub fn first(&self, count: usize) -> &[T] {
        &self.items[..count.min(self.items.len())]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
