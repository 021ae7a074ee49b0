use ds::{Error, Queue};

use std::collections::VecDeque;

use crate::Op;

quickcheck::quickcheck! {
    fn queue_is_fifo(ops: Vec<Op<i8>>) -> bool {
        let mut queue = Queue::new();
        let mut expected = VecDeque::new();

        ops.iter().all(|op| match op {
            Op::Insert(v) => {
                queue.enqueue(*v);
                expected.push_back(*v);
                queue.len() == expected.len()
            }
            Op::Remove(_) => queue.dequeue().ok() == expected.pop_front(),
            Op::Iter => queue.peek().ok() == expected.front() && queue.iter().eq(expected.iter()),
        }) && queue.is_empty() == expected.is_empty()
    }

    fn drained_queue_errors(xs: Vec<i8>) -> bool {
        let mut queue: Queue<_> = xs.iter().copied().collect();
        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();

        drained == xs
            && queue.peek() == Err(Error::EmptyCollection)
            && queue.dequeue() == Err(Error::EmptyCollection)
    }
}
