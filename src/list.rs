use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::Drop;
use std::sync::Mutex;

use crate::height_generator::GenHeight;
use crate::height_generator::HeightGenerator;
use crate::iter::SkipSetIter;
use crate::iter::SkipSetIterRev;
use crate::node::Node;

/// Hard cap on tower height. Bounds expected search cost at O(log n) for any
/// realistic element count; towers never grow past this many levels.
pub const MAX_HEIGHT: usize = 32;

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send>;

/// Everything the lock guards: the header sentinel, the bookkeeping counters,
/// the comparator and the per-instance height generator.
pub(crate) struct Core<T> {
    pub(crate) head_: *mut Node<T>,
    pub(crate) length_: usize,
    pub(crate) level_: usize,
    comparator: Comparator<T>,
    height_generator: Box<dyn HeightGenerator + Send>,
}

/// A set of items ordered by a caller-supplied three-way comparator, backed
/// by a skip list.
///
/// All operations take `&self` and serialize on one internal mutex, so a
/// `SkipSet` can be shared across threads directly. At most one operation of
/// any kind runs at a time; there is no multi-operation transaction support.
///
/// The comparator must be a total order and deterministic across calls.
/// Anything else is a contract violation: ordering guarantees are then
/// unspecified, though the structure itself stays memory-safe.
pub struct SkipSet<T> {
    core: Mutex<Core<T>>,
}

unsafe impl<T: Send> Send for SkipSet<T> {}
unsafe impl<T: Send> Sync for SkipSet<T> {}

impl<T> SkipSet<T> {
    /// Create an empty set ordered by `comparator`.
    pub fn new<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + 'static,
    {
        Self::with_height_generator(comparator, Box::new(GenHeight::new()))
    }

    /// Create an empty set with an injected height generator. Handing in a
    /// seeded generator makes the tower layout reproducible, which tests rely
    /// on.
    pub fn with_height_generator<F>(
        comparator: F,
        height_generator: Box<dyn HeightGenerator + Send>,
    ) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + 'static,
    {
        SkipSet {
            core: Mutex::new(Core {
                head_: Node::allocate_head(MAX_HEIGHT),
                length_: 0,
                level_: 0,
                comparator: Box::new(comparator),
                height_generator,
            }),
        }
    }

    /// Insert an item. Returns `false` and leaves the set untouched if an
    /// equal item (per the comparator) is already present.
    pub fn insert(&self, item: T) -> bool {
        let mut core = self.core.lock().unwrap();

        // Sample the tower height before walking, then search and link in
        // one pass over the recorded predecessors.
        let height = core.height_generator.gen_height(MAX_HEIGHT);

        let mut preds = [core.head_; MAX_HEIGHT];
        if core.find_preds(&item, &mut preds) {
            return false;
        }

        let node_ptr = Node::allocate(item, height);
        if let Some(node) = Node::from_raw_mut(node_ptr) {
            for (i, pred_ptr) in preds.iter().take(height).enumerate() {
                if let Some(pred) = Node::from_raw_mut(*pred_ptr) {
                    node.forward_[i] = pred.forward_[i];
                    pred.forward_[i] = node_ptr;
                }
            }
            // Level 0 is doubly linked.
            node.backward_ = preds[0];
            if let Some(succ) = Node::from_raw_mut(node.forward_[0]) {
                succ.backward_ = node_ptr;
            }
        }

        if height - 1 > core.level_ {
            core.level_ = height - 1;
        }
        core.length_ += 1;
        true
    }

    /// Remove the item equal to `item`. Returns `false` if no such item is
    /// present.
    pub fn remove(&self, item: &T) -> bool {
        let mut core = self.core.lock().unwrap();

        let mut preds = [core.head_; MAX_HEIGHT];
        if !core.find_preds(item, &mut preds) {
            return false;
        }

        // The match sits right after its level-0 predecessor.
        let target_ptr = unsafe { (&(*preds[0]).forward_)[0] };
        let target_height = match Node::from_raw(target_ptr) {
            Some(target) => {
                debug_assert_eq!(Ordering::Equal, (core.comparator)(target.item(), item));
                target.height()
            }
            None => return false,
        };

        for (i, pred_ptr) in preds.iter().take(target_height).enumerate() {
            if let Some(pred) = Node::from_raw_mut(*pred_ptr) {
                if pred.forward_[i] == target_ptr {
                    if let Some(target) = Node::from_raw(target_ptr) {
                        pred.forward_[i] = target.forward_[i];
                    }
                }
            }
        }
        if let Some(target) = Node::from_raw(target_ptr) {
            if let Some(succ) = Node::from_raw_mut(target.forward_[0]) {
                succ.backward_ = preds[0];
            }
        }
        Node::free(target_ptr);

        // Removing a tall node can empty several top levels at once; walk the
        // header down to the true highest populated level.
        while core.level_ > 0 && unsafe { (&(*core.head_).forward_)[core.level_].is_null() } {
            core.level_ -= 1;
        }
        core.length_ -= 1;
        true
    }

    /// Membership test. Never mutates.
    pub fn contains(&self, item: &T) -> bool {
        let core = self.core.lock().unwrap();
        core.search(item)
    }

    /// Number of items in the set. O(1).
    pub fn len(&self) -> usize {
        self.core.lock().unwrap().length_
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy traversal in comparator-ascending order.
    ///
    /// The set stays locked for as long as the iterator is alive; calling any
    /// other operation on the same set from the same thread while iterating
    /// will deadlock. Items are yielded as clones, so nothing internal
    /// escapes the lock.
    pub fn iter(&self) -> SkipSetIter<'_, T> {
        let core = self.core.lock().unwrap();
        let first = unsafe { (&(*core.head_).forward_)[0] };
        SkipSetIter::new(core, first)
    }

    /// Lazy traversal in comparator-descending order, the exact reverse of
    /// [`iter`](SkipSet::iter). Same locking behavior.
    pub fn iter_rev(&self) -> SkipSetIterRev<'_, T> {
        let core = self.core.lock().unwrap();
        let last = core.back();
        SkipSetIterRev::new(core, last)
    }
}

impl<T> Core<T> {
    /// Top-down walk shared by insert and remove. Records in `preds`, for
    /// every level from the current top down to 0, the rightmost node whose
    /// item compares strictly less than `item` (the header if none). Returns
    /// whether an equal item was seen.
    fn find_preds(&self, item: &T, preds: &mut [*mut Node<T>; MAX_HEIGHT]) -> bool {
        let mut found = false;
        let mut x = self.head_;
        for i in (0..=self.level_).rev() {
            loop {
                let next_ptr = unsafe { (&(*x).forward_)[i] };
                match Node::from_raw(next_ptr) {
                    Some(next) => match (self.comparator)(next.item(), item) {
                        Ordering::Less => x = next_ptr,
                        Ordering::Equal => {
                            found = true;
                            break;
                        }
                        Ordering::Greater => break,
                    },
                    None => break,
                }
            }
            preds[i] = x;
        }
        found
    }

    /// Pure membership walk, no predecessor bookkeeping.
    fn search(&self, item: &T) -> bool {
        let mut x = self.head_;
        for i in (0..=self.level_).rev() {
            loop {
                let next_ptr = unsafe { (&(*x).forward_)[i] };
                match Node::from_raw(next_ptr) {
                    Some(next) => match (self.comparator)(next.item(), item) {
                        Ordering::Less => x = next_ptr,
                        Ordering::Equal => return true,
                        Ordering::Greater => break,
                    },
                    None => break,
                }
            }
        }
        false
    }

    /// Rightmost node, or the header when the set is empty.
    pub(crate) fn back(&self) -> *mut Node<T> {
        let mut x = self.head_;
        for i in (0..=self.level_).rev() {
            loop {
                let next_ptr = unsafe { (&(*x).forward_)[i] };
                if next_ptr.is_null() {
                    break;
                }
                x = next_ptr;
            }
        }
        x
    }
}

impl<T> Drop for Core<T> {
    fn drop(&mut self) {
        let mut current = self.head_;
        while !current.is_null() {
            let next = unsafe { (&(*current).forward_)[0] };
            Node::free(current);
            current = next;
        }
    }
}

impl<T> Debug for SkipSet<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let core = self.core.lock().unwrap();
        f.debug_struct("SkipSet")
            .field("length", &core.length_)
            .field("level", &core.level_)
            .finish()
    }
}
