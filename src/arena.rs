//! Slot arena: owns every node, hands out stable indices.
//!
//! The arena is the single owner of list nodes. Lists hold only indices into
//! it (`head`, `tail`, and the per-node links), which sidesteps the aliasing
//! and cyclic-ownership problems of pointer-linked nodes: `prev` links and
//! `tail` are plain integers, never owners.
//!
//! # Guarantees
//!
//! - **Stable indices**: an index stays valid until that element is removed,
//!   regardless of other insertions and removals.
//! - **Slot reuse**: removed slots go onto an internal free list and are
//!   reused by later inserts (most recently freed first).
//! - **O(1)** insert, remove, and get (insert is amortized when growing).
//!
//! # Example
//!
//! ```
//! use slotlist::Arena;
//!
//! let mut arena: Arena<&str> = Arena::new();
//!
//! let a = arena.insert("first");
//! let b = arena.insert("second");
//!
//! arena.remove(a);
//! assert_eq!(arena.get(b), Some(&"second")); // b unaffected
//!
//! let c = arena.insert("third");
//! assert_eq!(c, a); // a's slot reused
//! ```

use crate::Index;

#[derive(Debug)]
enum Slot<T, Idx> {
    Occupied(T),
    Vacant { next_free: Idx },
}

/// Growable slot storage with stable indices and slot reuse.
///
/// `Idx` is the index type (default `u32`); the arena refuses to grow past
/// `Idx::NONE`, which is reserved as the null-link sentinel.
#[derive(Debug)]
pub struct Arena<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` elements before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the arena can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Inserts a value, returning its stable index.
    ///
    /// Reuses the most recently freed slot if one exists, otherwise appends.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow past `Idx::NONE` (index space
    /// exhaustion).
    pub fn insert(&mut self, value: T) -> Idx {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = std::mem::replace(
                &mut self.slots[idx.as_usize()],
                Slot::Occupied(value),
            );
            match slot {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            }
            self.len += 1;
            idx
        } else {
            let pos = self.slots.len();
            assert!(
                pos < Idx::NONE.as_usize(),
                "arena exhausted its index space"
            );
            self.slots.push(Slot::Occupied(value));
            self.len += 1;
            Idx::from_usize(pos)
        }
    }

    /// Removes and returns the value at `idx`, if occupied.
    ///
    /// The vacated slot becomes available for reuse. Removing an already
    /// vacant or out-of-range index returns `None`.
    pub fn remove(&mut self, idx: Idx) -> Option<T> {
        let i = idx.as_usize();
        match self.slots.get(i) {
            Some(Slot::Occupied(_)) => {}
            _ => return None,
        }

        let slot = std::mem::replace(
            &mut self.slots[i],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = idx;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => unreachable!("slot checked occupied above"),
        }
    }

    /// Returns a reference to the value at `idx`, if occupied.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&T> {
        match self.slots.get(idx.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `idx`, if occupied.
    #[inline]
    pub fn get_mut(&mut self, idx: Idx) -> Option<&mut T> {
        match self.slots.get_mut(idx.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Removes all elements, dropping every occupied value.
    ///
    /// Keeps the allocation. All previously returned indices become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }
}

impl<T, Idx: Index> Default for Arena<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let arena: Arena<u64> = Arena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(idx), Some(&42));

        assert_eq!(arena.remove(idx), Some(42));
        assert_eq!(arena.get(idx), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(10);
        *arena.get_mut(idx).unwrap() = 20;

        assert_eq!(arena.get(idx), Some(&20));
    }

    #[test]
    fn indices_stable_across_removal() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        arena.remove(b);

        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn slot_reuse_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);

        arena.remove(a);
        arena.remove(b);

        // Most recently freed slot comes back first
        assert_eq!(arena.insert(3), b);
        assert_eq!(arena.insert(4), a);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        arena.remove(idx);

        assert_eq!(arena.remove(idx), None);
    }

    #[test]
    fn remove_out_of_range() {
        let mut arena: Arena<u64, u32> = Arena::new();
        assert_eq!(arena.remove(7), None);
        assert_eq!(arena.remove(u32::NONE), None);
    }

    #[test]
    fn clear_drops_values() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        let mut arena: Arena<DropCounter> = Arena::new();
        arena.insert(DropCounter);
        arena.insert(DropCounter);
        arena.insert(DropCounter);

        arena.clear();

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
        assert!(arena.is_empty());
    }

    #[test]
    fn clear_resets_free_list() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        arena.insert(2);
        arena.remove(a);

        arena.clear();

        // Fresh indices start from zero again
        assert_eq!(arena.insert(3), 0);
        assert_eq!(arena.insert(4), 1);
    }

    #[test]
    fn u16_index() {
        let mut arena: Arena<u64, u16> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.get(idx), Some(&42));
    }
}
