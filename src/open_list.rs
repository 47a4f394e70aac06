//! The Open List: a binary min-heap with in-place key decrease.
//!
//! Every member is addressed by the [`Handle`] returned from [`OpenList::insert`]. Members are
//! stored in a [`Slab`], and the heap itself is an array of slab keys. Each slab entry
//! remembers its current heap slot, which turns a `decrease_key` into a single sift-up
//! instead of a linear search. That slot mapping is only ever touched by
//! [`OpenList::swap`](OpenList) and by `insert`, which places the new entry at the end.

use slab::Slab;
use std::cmp::Ordering;

/// Names a member of an [`OpenList`].
///
/// Handles are unique per insertion: after the member was removed (or the list cleared), the
/// handle never refers to anything again, even if its storage gets reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    entry: usize,
    generation: u64,
}

#[derive(Clone, Debug)]
struct Entry<T, K> {
    item: T,
    key: K,
    generation: u64,
    /// when `key` was last assigned, breaks ties
    stamp: u64,
    slot: usize,
}

/// A priority queue that pops the member with the smallest key first.
///
/// Among members with equal keys, the one whose key was assigned last (by
/// [`insert`](OpenList::insert) or [`decrease_key`](OpenList::decrease_key)) is popped
/// first. Two runs over identical operations therefore pop identical sequences.
///
/// ## Examples
/// ```
/// use tile_search::OpenList;
///
/// let mut list = OpenList::new();
/// let a = list.insert('a', 5);
/// list.insert('b', 3);
/// list.insert('c', 3);
///
/// list.decrease_key(a, 1);
///
/// assert_eq!(list.pop_min(), ('a', 1));
/// assert_eq!(list.pop_min(), ('c', 3));
/// assert_eq!(list.pop_min(), ('b', 3));
/// assert!(list.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct OpenList<T, K> {
    entries: Slab<Entry<T, K>>,
    heap: Vec<usize>,
    next_stamp: u64,
}

impl<T, K: PartialOrd + Copy> Default for OpenList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: PartialOrd + Copy> OpenList<T, K> {
    /// Creates an empty OpenList
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty OpenList with room for `capacity` members
    pub fn with_capacity(capacity: usize) -> Self {
        OpenList {
            entries: Slab::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
            next_stamp: 0,
        }
    }

    /// The number of members
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if there are no members
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` if `handle` names a current member
    pub fn contains(&self, handle: Handle) -> bool {
        self.entry(handle).is_some()
    }

    /// The current key of the member named by `handle`
    pub fn key(&self, handle: Handle) -> Option<K> {
        self.entry(handle).map(|entry| entry.key)
    }

    /// The member named by `handle`
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entry(handle).map(|entry| &entry.item)
    }

    /// The member that [`pop_min`](OpenList::pop_min) would return, without removing it
    pub fn peek_min(&self) -> Option<(&T, K)> {
        self.heap.first().map(|&id| {
            let entry = &self.entries[id];
            (&entry.item, entry.key)
        })
    }

    /// Iterates over all members in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&T, K)> + '_ {
        self.heap.iter().map(move |&id| {
            let entry = &self.entries[id];
            (&entry.item, entry.key)
        })
    }

    /// Adds `item` with priority `key`. O(log n)
    pub fn insert(&mut self, item: T, key: K) -> Handle {
        let stamp = self.stamp();
        let slot = self.heap.len();
        let entry = self.entries.insert(Entry {
            item,
            key,
            generation: stamp,
            stamp,
            slot,
        });
        self.heap.push(entry);
        self.sift_up(slot);

        Handle {
            entry,
            generation: stamp,
        }
    }

    /// Removes and returns the member with the smallest key. O(log n)
    ///
    /// ## Panics
    /// If the OpenList is empty.
    #[track_caller]
    pub fn pop_min(&mut self) -> (T, K) {
        let last = match self.heap.len() {
            0 => panic!("pop_min called on an empty OpenList"),
            len => len - 1,
        };
        self.take(0, last)
    }

    /// Removes the member named by `handle`, wherever it is in the heap. O(log n)
    ///
    /// ## Panics
    /// If `handle` is not a current member.
    #[track_caller]
    pub fn remove(&mut self, handle: Handle) -> (T, K) {
        let slot = match self.entry(handle) {
            Some(entry) => entry.slot,
            None => panic!("remove called with {:?}, which is not in the OpenList", handle),
        };
        let last = self.heap.len() - 1;
        self.take(slot, last)
    }

    /// Lowers the key of the member named by `handle` to `key`. O(log n)
    ///
    /// ## Panics
    /// If `handle` is not a current member, or if `key` is greater than its current key.
    #[track_caller]
    pub fn decrease_key(&mut self, handle: Handle, key: K) {
        let stamp = self.stamp();
        let entry = match self.entries.get_mut(handle.entry) {
            Some(entry) if entry.generation == handle.generation => entry,
            _ => panic!("decrease_key called with {:?}, which is not in the OpenList", handle),
        };
        if !matches!(
            key.partial_cmp(&entry.key),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            panic!("decrease_key must not raise the key of {:?}", handle);
        }
        entry.key = key;
        entry.stamp = stamp;
        let slot = entry.slot;
        self.sift_up(slot);
    }

    /// Removes all members. Handles issued before remain invalid forever.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.heap.clear();
    }

    fn stamp(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }

    fn entry(&self, handle: Handle) -> Option<&Entry<T, K>> {
        self.entries
            .get(handle.entry)
            .filter(|entry| entry.generation == handle.generation)
    }

    /// Moves slot `slot` to the end, detaches it and restores the heap property.
    fn take(&mut self, slot: usize, last: usize) -> (T, K) {
        self.swap(slot, last);
        let id = self.heap.pop().unwrap_or_else(|| unreachable!());
        let Entry { item, key, .. } = self.entries.remove(id);

        if slot < self.heap.len() {
            self.sift_down(slot);
            self.sift_up(slot);
        }
        (item, key)
    }

    /// `true` if the member in slot `a` must be popped before the one in slot `b`
    fn precedes(&self, a: usize, b: usize) -> bool {
        let a = &self.entries[self.heap[a]];
        let b = &self.entries[self.heap[b]];
        match a.key.partial_cmp(&b.key) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => a.stamp > b.stamp,
        }
    }

    /// Exchanges two heap slots. The only place slots move after insertion.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entries[self.heap[a]].slot = a;
        self.entries[self.heap[b]].slot = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.precedes(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanorand::{Rng, WyRand};

    impl<T, K: PartialOrd + Copy> OpenList<T, K> {
        fn assert_consistent(&self) {
            assert_eq!(self.entries.len(), self.heap.len());
            for (slot, &id) in self.heap.iter().enumerate() {
                assert_eq!(self.entries[id].slot, slot, "slot mapping out of date");
                if slot > 0 {
                    assert!(
                        !self.precedes(slot, (slot - 1) / 2),
                        "heap property violated at slot {}",
                        slot
                    );
                }
            }
        }
    }

    #[test]
    fn pops_in_key_order() {
        let mut list = OpenList::new();
        for (i, key) in [7, 3, 9, 1, 4, 8, 2].iter().enumerate() {
            list.insert(i, *key);
            list.assert_consistent();
        }
        let mut keys = vec![];
        while !list.is_empty() {
            keys.push(list.pop_min().1);
            list.assert_consistent();
        }
        assert_eq!(keys, vec![1, 2, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn equal_keys_pop_newest_first() {
        let mut list = OpenList::new();
        for name in ["a", "b", "c", "d", "e"] {
            list.insert(name, 1.5);
        }
        let names: Vec<_> = (0..5).map(|_| list.pop_min().0).collect();
        assert_eq!(names, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn decreased_member_wins_ties() {
        let mut list = OpenList::new();
        let first = list.insert("first", 5);
        list.insert("second", 2);
        list.insert("third", 2);
        list.decrease_key(first, 2);
        list.assert_consistent();
        assert_eq!(list.pop_min().0, "first");
        assert_eq!(list.pop_min().0, "third");
        assert_eq!(list.pop_min().0, "second");
    }

    #[test]
    fn decrease_to_equal_key_is_allowed() {
        let mut list = OpenList::new();
        let a = list.insert((), 3);
        list.decrease_key(a, 3);
        assert_eq!(list.key(a), Some(3));
    }

    #[test]
    fn stale_handles() {
        let mut list = OpenList::new();
        let a = list.insert('a', 1);
        assert!(list.contains(a));
        assert_eq!(list.get(a), Some(&'a'));
        list.pop_min();
        assert!(!list.contains(a));

        // reuses the storage of `a`
        let b = list.insert('b', 1);
        assert!(list.contains(b));
        assert!(!list.contains(a));
        assert_eq!(list.key(a), None);

        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(b));
    }

    #[test]
    fn remove_from_the_middle() {
        let mut list = OpenList::new();
        let handles: Vec<_> = [5, 1, 8, 3, 9, 2, 7].iter().map(|&k| list.insert(k, k)).collect();
        assert_eq!(list.remove(handles[3]), (3, 3));
        list.assert_consistent();
        assert_eq!(list.remove(handles[1]), (1, 1));
        list.assert_consistent();
        assert!(!list.contains(handles[1]));

        let mut keys = vec![];
        while !list.is_empty() {
            keys.push(list.pop_min().1);
        }
        assert_eq!(keys, vec![2, 5, 7, 8, 9]);
    }

    #[test]
    fn peek_matches_pop() {
        let mut list = OpenList::new();
        assert_eq!(list.peek_min(), None);
        list.insert('x', 4);
        list.insert('y', 2);
        assert_eq!(list.peek_min(), Some((&'y', 2)));
        assert_eq!(list.pop_min(), ('y', 2));
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    #[should_panic(expected = "empty OpenList")]
    fn pop_empty() {
        let mut list: OpenList<(), u32> = OpenList::new();
        list.pop_min();
    }

    #[test]
    #[should_panic(expected = "not in the OpenList")]
    fn decrease_removed_member() {
        let mut list = OpenList::new();
        let a = list.insert((), 3);
        list.pop_min();
        list.decrease_key(a, 1);
    }

    #[test]
    #[should_panic(expected = "not in the OpenList")]
    fn remove_twice() {
        let mut list = OpenList::new();
        let a = list.insert((), 3);
        list.insert((), 4);
        list.remove(a);
        list.remove(a);
    }

    #[test]
    #[should_panic(expected = "must not raise")]
    fn decrease_to_larger_key() {
        let mut list = OpenList::new();
        let a = list.insert((), 3);
        list.decrease_key(a, 4);
    }

    /// A member of the reference model: the last assignment stamp breaks ties
    struct Member {
        id: u32,
        key: u32,
        stamp: u64,
        handle: Handle,
    }

    #[test]
    fn randomized_against_reference() {
        let mut rng = WyRand::new_seed(0x5eed);

        for _ in 0..20 {
            let mut list = OpenList::new();
            let mut reference: Vec<Member> = vec![];
            let mut next_id = 0;
            let mut next_stamp = 0;

            for _ in 0..400 {
                match rng.generate_range(0_u32..4) {
                    0 | 1 => {
                        // small key range to provoke ties
                        let key = rng.generate_range(0_u32..50);
                        let handle = list.insert(next_id, key);
                        reference.push(Member {
                            id: next_id,
                            key,
                            stamp: next_stamp,
                            handle,
                        });
                        next_id += 1;
                        next_stamp += 1;
                    }
                    2 if !reference.is_empty() => {
                        let index = rng.generate_range(0..reference.len());
                        let member = &mut reference[index];
                        let key = member.key - rng.generate_range(0..=member.key);
                        list.decrease_key(member.handle, key);
                        member.key = key;
                        member.stamp = next_stamp;
                        next_stamp += 1;
                    }
                    _ if !reference.is_empty() => {
                        let index = (0..reference.len())
                            .min_by_key(|&i| {
                                (reference[i].key, std::cmp::Reverse(reference[i].stamp))
                            })
                            .unwrap();
                        let member = reference.swap_remove(index);
                        assert_eq!(list.pop_min(), (member.id, member.key));
                        assert!(!list.contains(member.handle));
                    }
                    _ => {}
                }

                list.assert_consistent();
                assert_eq!(list.len(), reference.len());
                for member in reference.iter() {
                    assert_eq!(list.get(member.handle), Some(&member.id));
                    assert_eq!(list.key(member.handle), Some(member.key));
                }
            }

            // drain completely
            reference.sort_by_key(|m| (m.key, std::cmp::Reverse(m.stamp)));
            for member in reference {
                assert_eq!(list.pop_min(), (member.id, member.key));
                list.assert_consistent();
            }
            assert!(list.is_empty());
        }
    }
}
