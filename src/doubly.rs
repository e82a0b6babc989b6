//! Doubly-linked list over a slot arena.
//!
//! Nodes carry both `prev` and `next` indices. The back links buy O(1)
//! removal at the tail and let positional walks start from whichever end is
//! closer, at the cost of one extra index per node. The `prev` links and the
//! cached `tail` are navigation only — ownership runs exclusively through
//! the arena, so no reference cycle can form.
//!
//! # Example
//!
//! ```
//! use slotlist::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//!
//! list.insert_at_tail(10);
//! list.insert_at_tail(20);
//! list.insert_at_head(5);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
//! assert_eq!(list.remove_from_tail(), Ok(20)); // O(1), no walk
//! ```

use crate::{Arena, Index, LinkedList, ListError};

#[derive(Debug)]
struct Node<T, Idx> {
    value: T,
    prev: Idx,
    next: Idx,
}

/// A doubly-linked list owning its nodes in a slot arena.
///
/// Positions are zero-based from the head. Exposes the same contract as
/// [`SinglyLinkedList`](crate::SinglyLinkedList); the difference is internal
/// link maintenance and O(1) [`remove_from_tail`](Self::remove_from_tail).
#[derive(Debug)]
pub struct DoublyLinkedList<T, Idx: Index = u32> {
    arena: Arena<Node<T, Idx>, Idx>,
    head: Idx,
    tail: Idx,
    len: usize,
}

impl<T, Idx: Index> DoublyLinkedList<T, Idx> {
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
            prev: Idx::NONE,
            next: self.head,
        });
        if self.head.is_some() {
            self.node_mut(self.head).prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
    }

    /// Inserts `value` as the new tail. O(1).
    pub fn insert_at_tail(&mut self, value: T) {
        let idx = self.arena.insert(Node {
            value,
            prev: self.tail,
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
    /// appends. O(min(index, len - index)) — the walk starts from the
    /// nearer end.
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

        // Splice before the node currently at `index`
        let before = self.index_at(index);
        let prev = self.node(before).prev;
        let idx = self.arena.insert(Node {
            value,
            prev,
            next: before,
        });
        self.node_mut(before).prev = idx;
        // prev exists: index > 0 means `before` is not the head
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
        let idx = self.head;
        self.unlink(idx);
        let node = self.arena.remove(idx).expect("head points at vacant slot");
        Ok(node.value)
    }

    /// Removes and returns the tail value. O(1) via the tail's back link.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn remove_from_tail(&mut self) -> Result<T, ListError> {
        if self.tail.is_none() {
            return Err(ListError::Empty);
        }
        let idx = self.tail;
        self.unlink(idx);
        let node = self.arena.remove(idx).expect("tail points at vacant slot");
        Ok(node.value)
    }

    /// Removes and returns the value at position `index`.
    /// O(min(index, len - index)).
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

        let idx = self.index_at(index);
        self.unlink(idx);
        let node = self
            .arena
            .remove(idx)
            .expect("unlinked node points at vacant slot");
        Ok(node.value)
    }

    /// Returns a reference to the value at position `index`.
    /// O(min(index, len - index)).
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
    /// compile. Also usable back to front via [`DoubleEndedIterator`].
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
        }
    }

    /// Removes all elements, dropping their values. Idempotent.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
    }

    /// Detaches the node at `idx` from the chain, fixing neighbor links and
    /// head/tail. The node itself stays in the arena.
    fn unlink(&mut self, idx: Idx) {
        let node = self.node(idx);
        let prev = node.prev;
        let next = node.next;

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        self.len -= 1;
    }

    /// Walks to the arena index of the node at `position`, starting from
    /// whichever end is closer.
    ///
    /// Precondition: `position < self.len`.
    fn index_at(&self, position: usize) -> Idx {
        if position <= self.len / 2 {
            let mut cur = self.head;
            for _ in 0..position {
                cur = self.node(cur).next;
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(self.len - 1 - position) {
                cur = self.node(cur).prev;
            }
            cur
        }
    }

    fn node(&self, idx: Idx) -> &Node<T, Idx> {
        self.arena.get(idx).expect("link points at vacant slot")
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T, Idx> {
        self.arena.get_mut(idx).expect("link points at vacant slot")
    }
}

impl<T, Idx: Index> Default for DoublyLinkedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> LinkedList<T> for DoublyLinkedList<T, Idx> {
    type Iter<'a>
        = Iter<'a, T, Idx>
    where
        Self: 'a,
        T: 'a;

    fn insert_at_head(&mut self, value: T) {
        DoublyLinkedList::insert_at_head(self, value);
    }

    fn insert_at_tail(&mut self, value: T) {
        DoublyLinkedList::insert_at_tail(self, value);
    }

    fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        DoublyLinkedList::insert_at(self, value, index)
    }

    fn remove_from_head(&mut self) -> Result<T, ListError> {
        DoublyLinkedList::remove_from_head(self)
    }

    fn remove_from_tail(&mut self) -> Result<T, ListError> {
        DoublyLinkedList::remove_from_tail(self)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        DoublyLinkedList::remove_at(self, index)
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        DoublyLinkedList::get_at(self, index)
    }

    fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        DoublyLinkedList::find(self, value)
    }

    fn exists(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        DoublyLinkedList::exists(self, value)
    }

    fn iter(&self) -> Self::Iter<'_> {
        DoublyLinkedList::iter(self)
    }

    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    fn is_empty(&self) -> bool {
        DoublyLinkedList::is_empty(self)
    }

    fn clear(&mut self) {
        DoublyLinkedList::clear(self);
    }
}

/// Double-ended iterator over a [`DoublyLinkedList`]'s values.
pub struct Iter<'a, T, Idx: Index = u32> {
    arena: &'a Arena<Node<T, Idx>, Idx>,
    front: Idx,
    back: Idx,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.front)?;
        if self.front == self.back {
            // Met in the middle
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.front = node.next;
        }
        Some(&node.value)
    }
}

impl<'a, T, Idx: Index> DoubleEndedIterator for Iter<'a, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.back)?;
        if self.front == self.back {
            // Met in the middle
            self.front = Idx::NONE;
            self.back = Idx::NONE;
        } else {
            self.back = node.prev;
        }
        Some(&node.value)
    }
}
