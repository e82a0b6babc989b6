//! Generic linked lists with arena-owned nodes.
//!
//! This crate provides two list variants behind one contract:
//!
//! - [`SinglyLinkedList`] — forward links only
//! - [`DoublyLinkedList`] — forward and back links
//!
//! Both implement the [`LinkedList`] trait, so consumers pick a concrete
//! variant at construction time and use it interchangeably.
//!
//! # Design
//!
//! Pointer-linked nodes fight Rust's ownership model: a doubly-linked chain
//! of `Box`ed nodes needs aliased back pointers, and `Rc<RefCell<...>>`
//! trades that for runtime borrow bookkeeping. This crate separates storage
//! from structure instead:
//!
//! ```text
//! Arena (slot storage)  - owns every node, hands out stable indices
//! List (head/tail/len)  - coordinates indices, owns the arena
//! ```
//!
//! Links (`next`, `prev`, `head`, `tail`) are plain indices with a sentinel
//! "none" value ([`Index::NONE`]); only the arena owns node memory, so back
//! references cannot form ownership cycles and removal never aliases.
//!
//! # Quick start
//!
//! ```
//! use slotlist::{LinkedList, SinglyLinkedList};
//!
//! let mut list: SinglyLinkedList<&str> = SinglyLinkedList::new();
//!
//! list.insert_at_tail("b");
//! list.insert_at_head("a");
//! list.insert_at("c", 2).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.find(&"b"), Some(1));
//! assert_eq!(list.remove_at(1), Ok("b"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
//! ```
//!
//! # Choosing a variant
//!
//! | Operation | `SinglyLinkedList` | `DoublyLinkedList` |
//! |-----------|--------------------|--------------------|
//! | insert at head/tail | O(1) | O(1) |
//! | remove from head | O(1) | O(1) |
//! | remove from tail | O(len) | O(1) |
//! | positional access | O(index) | O(min from either end) |
//! | per-node overhead | one index | two indices |
//!
//! The singly-linked tail removal walks the chain to the second-to-last
//! node; that cost is inherent to forward-only links.
//!
//! # Constraints
//!
//! Lists are single-threaded, in-memory containers. There is no internal
//! locking; wrap a list in external synchronization if it must be shared
//! across threads. Iterators borrow the list, so mutating during iteration
//! is rejected at compile time rather than left undefined.
//!
//! Fallible operations return [`ListError`] and leave the list untouched on
//! failure; `find`/`exists` report absence through `Option`/`bool`, never
//! an error.

#![warn(missing_docs)]

pub mod arena;
pub mod doubly;
pub mod error;
pub mod index;
pub mod list;
pub mod singly;

pub use arena::Arena;
pub use doubly::DoublyLinkedList;
pub use error::ListError;
pub use index::Index;
pub use list::LinkedList;
pub use singly::SinglyLinkedList;
