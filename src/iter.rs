use std::sync::MutexGuard;

use crate::list::Core;
use crate::node::Node;

/// Forward level-0 traversal, comparator-ascending.
///
/// Holds the set's mutex guard for its whole lifetime and yields cloned
/// items, so no reference into the structure ever escapes the lock. Finite,
/// and restartable by asking the set for a fresh iterator.
pub struct SkipSetIter<'a, T> {
    _guard: MutexGuard<'a, Core<T>>,
    next: *mut Node<T>,
}

impl<'a, T> SkipSetIter<'a, T> {
    pub(crate) fn new(guard: MutexGuard<'a, Core<T>>, next: *mut Node<T>) -> Self {
        SkipSetIter {
            _guard: guard,
            next,
        }
    }
}

impl<'a, T: Clone> Iterator for SkipSetIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = Node::from_raw(self.next)?;
        self.next = node.forward_[0];
        node.item_.clone()
    }
}

/// Backward level-0 traversal, the exact reverse of [`SkipSetIter`].
///
/// Starts at the rightmost node and follows backward links; the header
/// sentinel carries no item and so terminates the walk.
pub struct SkipSetIterRev<'a, T> {
    _guard: MutexGuard<'a, Core<T>>,
    next: *mut Node<T>,
}

impl<'a, T> SkipSetIterRev<'a, T> {
    pub(crate) fn new(guard: MutexGuard<'a, Core<T>>, next: *mut Node<T>) -> Self {
        SkipSetIterRev {
            _guard: guard,
            next,
        }
    }
}

impl<'a, T: Clone> Iterator for SkipSetIterRev<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = Node::from_raw(self.next)?;
        self.next = node.backward_;
        node.item_.clone()
    }
}

#[cfg(test)]
mod test {
    use crate::list::SkipSet;

    #[test]
    fn test_iter() {
        let set = SkipSet::new(i32::cmp);
        for i in (0..=10).rev() {
            set.insert(i);
        }
        assert_eq!((0..=10).collect::<Vec<_>>(), set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_rev() {
        let set = SkipSet::new(i32::cmp);
        for i in 0..=10 {
            set.insert(i);
        }
        assert_eq!(
            (0..=10).rev().collect::<Vec<_>>(),
            set.iter_rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_iter_single_and_empty() {
        let set: SkipSet<i32> = SkipSet::new(i32::cmp);
        assert!(set.iter().next().is_none());
        assert!(set.iter_rev().next().is_none());
        set.insert(42);
        assert_eq!(vec![42], set.iter().collect::<Vec<_>>());
        assert_eq!(vec![42], set.iter_rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_exhausted_stays_exhausted() {
        let set = SkipSet::new(i32::cmp);
        set.insert(1);
        let mut iter = set.iter();
        assert_eq!(Some(1), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }
}
