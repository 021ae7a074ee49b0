use ds::{DoublyLinkedList, SinglyLinkedList};

use crate::Op;

/// Applies the operations to a singly-linked list, a doubly-linked list and a `Vec`,
/// checking after each one that all three agree.
fn do_ops<T>(
    ops: &[Op<T>],
    singly: &mut SinglyLinkedList<T>,
    doubly: &mut DoublyLinkedList<T>,
    expected: &mut Vec<T>,
) -> bool
where
    T: PartialEq + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(v) => {
            singly.append(v.clone());
            doubly.append(v.clone());
            expected.push(v.clone());
            singly.tail().map(|n| n.value()) == Some(v)
                && doubly.tail().map(|n| n.value()) == Some(v)
        }
        Op::Remove(v) => {
            let position = expected.iter().position(|x| x == v);
            let removed = position.map(|p| expected.remove(p));
            singly.delete(v) == removed && doubly.delete(v) == removed
        }
        Op::Iter => singly.iter().eq(expected.iter()) && doubly.iter().eq(expected.iter()),
    })
}

quickcheck::quickcheck! {
    fn lists_match_vec(ops: Vec<Op<i8>>) -> bool {
        let mut singly = SinglyLinkedList::new();
        let mut doubly = DoublyLinkedList::new();
        let mut expected = Vec::new();

        do_ops(&ops, &mut singly, &mut doubly, &mut expected)
            && singly.size() == expected.len()
            && doubly.size() == expected.len()
            && singly.is_empty() == expected.is_empty()
            && doubly.is_empty() == expected.is_empty()
    }

    fn reverse_twice_is_identity(xs: Vec<i8>) -> bool {
        let mut singly: SinglyLinkedList<_> = xs.iter().copied().collect();
        let mut doubly: DoublyLinkedList<_> = xs.iter().copied().collect();
        singly.reverse();
        doubly.reverse();
        let reversed = singly.iter().eq(xs.iter().rev()) && doubly.iter().eq(xs.iter().rev());
        singly.reverse();
        doubly.reverse();

        reversed
            && singly.iter().eq(xs.iter())
            && doubly.iter().eq(xs.iter())
            && singly.head().map(|n| n.value()) == xs.first()
            && doubly.tail().map(|n| n.value()) == xs.last()
    }

    fn positional_insert_matches_vec(xs: Vec<i8>, inserts: Vec<(u8, i8)>) -> bool {
        let mut singly: SinglyLinkedList<_> = xs.iter().copied().collect();
        let mut doubly: DoublyLinkedList<_> = xs.iter().copied().collect();
        let mut expected = xs;

        inserts.into_iter().all(|(position, value)| {
            let position = usize::from(position);
            let in_range = position <= expected.len();
            if in_range {
                expected.insert(position, value);
            }
            singly.insert(position, value).is_ok() == in_range
                && doubly.insert(position, value).is_ok() == in_range
        }) && singly.iter().eq(expected.iter())
            && doubly.iter().eq(expected.iter())
    }

    fn find_returns_first_match(xs: Vec<i8>, x: i8) -> bool {
        let singly: SinglyLinkedList<_> = xs.iter().copied().collect();
        let doubly: DoublyLinkedList<_> = xs.iter().copied().collect();
        let present = xs.contains(&x);

        singly.find(&x).is_some() == present
            && doubly.find(&x).is_some() == present
            && singly.find(&x).map_or(true, |n| *n.value() == x)
    }
}
