use ds::BinarySearchTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(v) => bst.insert(v.clone()) == set.insert(v.clone()),
            Op::Remove(v) => bst.delete(v) == set.take(v),
            Op::Iter => bst.inorder_traversal().iter().eq(set.iter()),
        };
        agrees && bst.is_valid_bst()
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && set.iter().all(|v| tree.contains(v))
            && tree.size() == set.len()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = BinarySearchTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.search(x).map(|n| n.value()) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = BinarySearchTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.is_valid_bst()
    }

    fn duplicate_inserts_keep_size(xs: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let size = tree.size();
        let height = tree.height();

        xs.iter().all(|x| !tree.insert(*x)) && tree.size() == size && tree.height() == height
    }

    fn extremes_match_traversal(xs: Vec<i16>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let inorder = tree.inorder_traversal();

        tree.minimum().map(|n| n.value()) == inorder.first()
            && tree.maximum().map(|n| n.value()) == inorder.last()
            && tree.height() <= tree.size()
    }
}
