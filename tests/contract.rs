//! Contract tests driven through the `LinkedList` trait.
//!
//! Each property runs against both variants via a generic body; a behavior
//! difference between them is a bug in whichever variant diverges.

use slotlist::{DoublyLinkedList, LinkedList, ListError, SinglyLinkedList};

fn values<L: LinkedList<u64>>(list: &L) -> Vec<u64> {
    list.iter().copied().collect()
}

/// Expands a generic test body into one `#[test]` per variant.
macro_rules! contract_test {
    ($name:ident, $body:expr) => {
        mod $name {
            use super::*;

            fn run<L: LinkedList<u64> + Default>() {
                let body: fn(&mut L) = $body;
                body(&mut L::default());
            }

            #[test]
            fn singly() {
                run::<SinglyLinkedList<u64>>();
            }

            #[test]
            fn doubly() {
                run::<DoublyLinkedList<u64>>();
            }
        }
    };
}

contract_test!(tail_inserts_index_in_order, |list| {
    let n = 20u64;
    for v in 0..n {
        list.insert_at_tail(v);
    }

    assert_eq!(list.len(), n as usize);
    for i in 0..n as usize {
        assert_eq!(list.get_at(i), Ok(&(i as u64)));
    }
});

contract_test!(head_insert_then_head_remove_roundtrips, |list| {
    list.insert_at_head(42);
    assert_eq!(list.remove_from_head(), Ok(42));
    assert!(list.is_empty());
});

contract_test!(insert_at_then_remove_at_restores_order, |list| {
    for v in [1, 2, 3, 4] {
        list.insert_at_tail(v);
    }
    let before = values(list);

    for i in 0..=4 {
        list.insert_at(99, i).unwrap();
        assert_eq!(list.remove_at(i), Ok(99));
        assert_eq!(values(list), before);
        assert_eq!(list.len(), 4);
    }
});

contract_test!(errors_do_not_change_length, |list| {
    assert_eq!(list.remove_from_head(), Err(ListError::Empty));
    assert_eq!(list.remove_from_tail(), Err(ListError::Empty));
    assert_eq!(
        list.remove_at(0),
        Err(ListError::InvalidIndex { index: 0, len: 0 })
    );
    assert_eq!(
        list.get_at(0),
        Err(ListError::InvalidIndex { index: 0, len: 0 })
    );
    assert_eq!(list.len(), 0);

    list.insert_at_tail(1);
    assert_eq!(
        list.remove_at(5),
        Err(ListError::InvalidIndex { index: 5, len: 1 })
    );
    assert_eq!(
        list.get_at(1),
        Err(ListError::InvalidIndex { index: 1, len: 1 })
    );
    assert_eq!(
        list.insert_at(9, 2),
        Err(ListError::OutOfBounds { index: 2, len: 1 })
    );
    assert_eq!(list.len(), 1);
    assert_eq!(values(list), vec![1]);
});

contract_test!(find_prefers_lowest_index_among_duplicates, |list| {
    for v in [8, 3, 8, 8, 5] {
        list.insert_at_tail(v);
    }

    assert_eq!(list.find(&8), Some(0));
    assert_eq!(list.find(&3), Some(1));
    assert_eq!(list.find(&5), Some(4));

    for v in [8, 3, 5, 99] {
        assert_eq!(list.exists(&v), list.find(&v).is_some());
    }
});

contract_test!(clear_is_idempotent_and_resets, |list| {
    list.clear();
    assert!(list.is_empty());

    for v in [1, 2, 3] {
        list.insert_at_tail(v);
    }
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());

    list.clear();
    assert!(list.is_empty());
});

contract_test!(documented_scenario, |list| {
    list.insert_at_tail(10);
    list.insert_at_tail(20);
    list.insert_at_head(5);
    assert_eq!(values(list), vec![5, 10, 20]);
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove_at(1), Ok(10));
    assert_eq!(values(list), vec![5, 20]);

    assert_eq!(list.remove_from_tail(), Ok(20));
    assert_eq!(list.find(&5), Some(0));

    assert_eq!(list.remove_from_head(), Ok(5));
    assert!(list.is_empty());
    assert_eq!(list.remove_from_head(), Err(ListError::Empty));
});

#[test]
fn variants_agree_under_mixed_operations() {
    let mut singly: SinglyLinkedList<u64> = SinglyLinkedList::new();
    let mut doubly: DoublyLinkedList<u64> = DoublyLinkedList::new();

    // xorshift; deterministic op mix, both variants must track each other
    let mut seed = 0x2545_f491_4f6c_dd1du64;
    let mut next_rand = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    for step in 0..500u64 {
        let r = next_rand();
        let len = singly.len();
        assert_eq!(len, doubly.len());

        match r % 6 {
            0 => {
                singly.insert_at_head(step);
                doubly.insert_at_head(step);
            }
            1 => {
                singly.insert_at_tail(step);
                doubly.insert_at_tail(step);
            }
            2 => {
                let index = (r >> 8) as usize % (len + 1);
                singly.insert_at(step, index).unwrap();
                doubly.insert_at(step, index).unwrap();
            }
            3 => {
                assert_eq!(singly.remove_from_head(), doubly.remove_from_head());
            }
            4 => {
                assert_eq!(singly.remove_from_tail(), doubly.remove_from_tail());
            }
            _ => {
                let index = (r >> 8) as usize % (len + 1);
                assert_eq!(singly.remove_at(index), doubly.remove_at(index));
            }
        }

        assert_eq!(
            singly.iter().copied().collect::<Vec<_>>(),
            doubly.iter().copied().collect::<Vec<_>>()
        );
    }
}
