//! The shared list contract.
//!
//! Both list variants expose the same thirteen operations; the only
//! difference between them is internal link maintenance and the resulting
//! complexity of `remove_from_tail`. Code that only needs the contract can
//! be generic over [`LinkedList`] and pick a concrete variant at
//! construction time.
//!
//! # Example
//!
//! ```
//! use slotlist::{DoublyLinkedList, LinkedList, SinglyLinkedList};
//!
//! fn drain_in_order<L: LinkedList<u64>>(list: &mut L) -> Vec<u64> {
//!     let mut out = Vec::with_capacity(list.len());
//!     while let Ok(value) = list.remove_from_head() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut singly: SinglyLinkedList<u64> = SinglyLinkedList::new();
//! let mut doubly: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! for v in [1, 2, 3] {
//!     singly.insert_at_tail(v);
//!     doubly.insert_at_tail(v);
//! }
//!
//! assert_eq!(drain_in_order(&mut singly), vec![1, 2, 3]);
//! assert_eq!(drain_in_order(&mut doubly), vec![1, 2, 3]);
//! ```

use crate::ListError;

/// Capability contract shared by [`SinglyLinkedList`](crate::SinglyLinkedList)
/// and [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// Positions are zero-based from the head. Fallible operations return
/// [`ListError`] and leave the list in its pre-call state on failure; no
/// operation panics on bad caller input.
///
/// Equality is only required where it is used: `find` and `exists` carry a
/// `T: PartialEq` bound, so lists of non-comparable element types still
/// support everything else.
pub trait LinkedList<T> {
    /// Borrowing iterator over the list's values, head to tail.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts `value` as the new head. O(1).
    fn insert_at_head(&mut self, value: T);

    /// Inserts `value` as the new tail. O(1).
    fn insert_at_tail(&mut self, value: T);

    /// Inserts `value` so it occupies position `index`; `index == len`
    /// appends. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfBounds`] if `index > len`.
    fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError>;

    /// Removes and returns the head value. O(1).
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    fn remove_from_head(&mut self) -> Result<T, ListError>;

    /// Removes and returns the tail value.
    ///
    /// O(1) for the doubly-linked variant; O(len) for the singly-linked
    /// variant, which must walk to the second-to-last node.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    fn remove_from_tail(&mut self) -> Result<T, ListError>;

    /// Removes and returns the value at position `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndex`] if `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;

    /// Returns a reference to the value at position `index`. O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIndex`] if `index >= len`.
    fn get_at(&self, index: usize) -> Result<&T, ListError>;

    /// Returns the position of the first value equal to `value`, or `None`
    /// if no value matches. O(len).
    fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns `true` iff some value in the list equals `value`. O(len).
    fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns a lazy forward iterator over the values, head to tail.
    ///
    /// The iterator borrows the list, so mutating the list while iterating
    /// does not compile; iterate again by calling `iter` afresh.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of elements. O(1).
    fn len(&self) -> usize;

    /// Returns `true` if the list has no elements. O(1).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements, dropping their values.
    ///
    /// Idempotent: clearing an empty list is a no-op.
    fn clear(&mut self);
}
