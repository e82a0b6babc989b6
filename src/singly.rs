//! Singly-linked list over a slot arena.
//!
//! Nodes carry a `next` index only. Head insertion/removal and tail
//! insertion are O(1) thanks to the cached `tail` index, but removing from
//! the tail must walk the whole chain to find the second-to-last node —
//! there is no back link to follow. That asymmetry is inherent to the
//! structure; use [`DoublyLinkedList`](crate::DoublyLinkedList) when O(1)
//! tail removal matters.
//!
//! # Example
//!
//! ```
//! use slotlist::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u64> = SinglyLinkedList::new();
//!
//! list.insert_at_tail(10);
//! list.insert_at_tail(20);
//! list.insert_at_head(5);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
//!
//! assert_eq!(list.remove_at(1), Ok(10));
//! assert_eq!(list.remove_from_head(), Ok(5));
//! ```

use crate::{Arena, Index, LinkedList, ListError};

#[derive(Debug)]
struct Node<T, Idx> {
    value: T,
    next: Idx,
}

/// A singly-linked list owning its nodes in a slot arena.
///
/// Positions are zero-based from the head. `Idx` is the arena index type
/// (default `u32`); narrower types shrink the per-node link overhead at the
/// cost of a lower element limit.
#[derive(Debug)]
pub struct SinglyLinkedList<T, Idx: Index = u32> {
    arena: Arena<Node<T, Idx>, Idx>,
    head: Idx,
    tail: Idx,
    len: usize,
}

impl<T, Idx: Index> SinglyLinkedList<T, Idx> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements. O(1).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the head value, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.head).map(|node| &node.value)
    }

    /// Returns a reference to the tail value, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.tail).map(|node| &node.value)
    }

    /// Inserts `value` as the new head. O(1).
    pub fn insert_at_head(&mut self, value: T) {
        let idx = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = idx;
        if self.tail.is_none() {
            self.tail = idx;
        }
        self.len += 1;
    }

    /// Inserts `value` as the new tail. O(1).
    pub fn insert_at_tail(&mut self, value: T) {
        let idx = self.arena.insert(Node {
            value,
            next: Idx::NONE,
        });
        if self.tail.is_some() {
            self.node_mut(self.tail).next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
        self.len += 1;
    }

    /// Inserts `value` so it occupies position `index`; `index == len`
    /// appends. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] if `index > len`; the list is
    /// unmodified.
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.insert_at_head(value);
            return Ok(());
        }
        if index == self.len {
            self.insert_at_tail(value);
            return Ok(());
        }

        let prev = self.index_at(index - 1);
        let next = self.node(prev).next;
        let idx = self.arena.insert(Node { value, next });
        self.node_mut(prev).next = idx;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the head value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn remove_from_head(&mut self) -> Result<T, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }

        let old = self.head;
        self.head = self.node(old).next;
        if self.head.is_none() {
            self.tail = Idx::NONE;
        }
        self.len -= 1;

        let node = self.arena.remove(old).expect("head points at vacant slot");
        Ok(node.value)
    }

    /// Removes and returns the tail value. O(len).
    ///
    /// Walks from the head to the second-to-last node; there is no back
    /// link to follow.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn remove_from_tail(&mut self) -> Result<T, ListError> {
        if self.head.is_none() {
            return Err(ListError::Empty);
        }

        let old = self.tail;
        if self.head == self.tail {
            self.head = Idx::NONE;
            self.tail = Idx::NONE;
        } else {
            let mut cur = self.head;
            while self.node(cur).next != old {
                cur = self.node(cur).next;
            }
            self.node_mut(cur).next = Idx::NONE;
            self.tail = cur;
        }
        self.len -= 1;

        let node = self.arena.remove(old).expect("tail points at vacant slot");
        Ok(node.value)
    }

    /// Removes and returns the value at position `index`. O(index), except
    /// removing the last position which is O(len) (see
    /// [`remove_from_tail`](Self::remove_from_tail)).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `index >= len`; the list is
    /// unmodified.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.remove_from_head();
        }
        if index == self.len - 1 {
            return self.remove_from_tail();
        }

        let prev = self.index_at(index - 1);
        let target = self.node(prev).next;
        let after = self.node(target).next;
        self.node_mut(prev).next = after;
        self.len -= 1;

        let node = self
            .arena
            .remove(target)
            .expect("unlinked node points at vacant slot");
        Ok(node.value)
    }

    /// Returns a reference to the value at position `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidIndex`] if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len {
            return Err(ListError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        Ok(&self.node(self.index_at(index)).value)
    }

    /// Returns the position of the first value equal to `value`, or `None`.
    /// O(len).
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` iff some value in the list equals `value`. O(len).
    pub fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns a lazy forward iterator over the values, head to tail.
    ///
    /// The iterator borrows the list; mutation during iteration does not
    /// compile.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            arena: &self.arena,
            cur: self.head,
        }
    }

    /// Removes all elements, dropping their values. Idempotent.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
    }

    /// Walks to the arena index of the node at `position`.
    ///
    /// Precondition: `position < self.len`.
    fn index_at(&self, position: usize) -> Idx {
        let mut cur = self.head;
        for _ in 0..position {
            cur = self.node(cur).next;
        }
        cur
    }

    fn node(&self, idx: Idx) -> &Node<T, Idx> {
        self.arena.get(idx).expect("link points at vacant slot")
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T, Idx> {
        self.arena.get_mut(idx).expect("link points at vacant slot")
    }
}

impl<T, Idx: Index> Default for SinglyLinkedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> LinkedList<T> for SinglyLinkedList<T, Idx> {
    type Iter<'a>
        = Iter<'a, T, Idx>
    where
        Self: 'a,
        T: 'a;

    fn insert_at_head(&mut self, value: T) {
        SinglyLinkedList::insert_at_head(self, value);
    }

    fn insert_at_tail(&mut self, value: T) {
        SinglyLinkedList::insert_at_tail(self, value);
    }

    fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        SinglyLinkedList::insert_at(self, value, index)
    }

    fn remove_from_head(&mut self) -> Result<T, ListError> {
        SinglyLinkedList::remove_from_head(self)
    }

    fn remove_from_tail(&mut self) -> Result<T, ListError> {
        SinglyLinkedList::remove_from_tail(self)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        SinglyLinkedList::remove_at(self, index)
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        SinglyLinkedList::get_at(self, index)
    }

    fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedList::find(self, value)
    }

    fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        SinglyLinkedList::exists(self, value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        SinglyLinkedList::iter(self)
    }

    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        SinglyLinkedList::is_empty(self)
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self);
    }
}

/// Forward iterator over a [`SinglyLinkedList`]'s values.
pub struct Iter<'a, T, Idx: Index = u32> {
    arena: &'a Arena<Node<T, Idx>, Idx>,
    cur: Idx,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // A NONE index misses the arena, ending iteration
        let node = self.arena.get(self.cur)?;
        self.cur = node.next;
        Some(&node.value)
    }
}
