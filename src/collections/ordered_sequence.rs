use crate::errors::SequenceError;

use log::trace;


/// Capacity of a freshly created sequence
const INITIAL_CAPACITY: usize = 5;


/// Identifier + priority pair held by the sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T, P = i32> {
    id: T,
    priority: P,
}

impl<T, P: Copy> Entry<T, P> {

    pub fn new(id: T, priority: P) -> Self {
        Self { id, priority }
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    pub fn priority(&self) -> P {
        self.priority
    }

    pub fn into_parts(self) -> (T, P) {
        (self.id, self.priority)
    }
}


/// Priority ordered sequence stored in a growable circular buffer
///
/// Entries are kept sorted by priority (smallest at the front), entries with
/// equal priority keep their insertion order. Insertion shifts larger entries
/// toward the rear so it is O(n), extracting the smallest is O(1).
///
/// Identifiers only need equality, lookups return the first match scanning
/// from the front.
#[derive(Debug, Clone)]
pub struct OrderedSequence<T, P = i32> {
    slots: Vec<Option<Entry<T, P>>>,
    front: usize, // physical index of the first entry
    rear: usize, // physical index of the last entry, front - 1 when empty
    count: usize,
}

impl<T, P> OrderedSequence<T, P>
where
    T: PartialEq,
    P: Ord + Copy,
{

    /// Create an empty sequence with the default capacity of 5
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty sequence, capacity is at least 1
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots,
            front: 1 % capacity,
            rear: 0,
            count: 0,
        }
    }

    /// Insert a new entry in priority order
    /// The entry is placed after every entry with a priority <= its own
    pub fn insert(&mut self, id: T, priority: P) {

        if self.count == self.slots.len() {
            self.expand_capacity();
        }

        // walk from the rear, moving bigger entries one slot back
        let mut i = self.count;
        while i > 0 {
            let prev = self.physical(i - 1);
            let bigger = self.slots[prev]
                .as_ref()
                .is_some_and(|entry| entry.priority > priority);
            if !bigger {
                break;
            }
            let here = self.physical(i);
            self.slots[here] = self.slots[prev].take();
            i -= 1;
        }

        let at = self.physical(i);
        self.slots[at] = Some(Entry::new(id, priority));

        self.count += 1;
        self.rear = self.physical(self.count - 1);
    }

    /// Priority of the first entry matching `id`
    pub fn get_value(&self, id: &T) -> Result<P, SequenceError> {
        self.iter()
            .find(|entry| entry.id == *id)
            .map(|entry| entry.priority)
            .ok_or(SequenceError::NotFound)
    }

    /// Remove the first entry matching `id`, closing the gap behind it
    /// The sequence is untouched when no entry matches
    pub fn remove(&mut self, id: &T) -> Result<Entry<T, P>, SequenceError> {

        let index = self.position(id).ok_or(SequenceError::NotFound)?;
        let slot = self.physical(index);
        let removed = self.slots[slot].take().ok_or(SequenceError::NotFound)?;

        for i in index..self.count - 1 {
            let (to, from) = (self.physical(i), self.physical(i + 1));
            self.slots[to] = self.slots[from].take();
        }

        let capacity = self.slots.len();
        self.count -= 1;
        self.rear = (self.rear + capacity - 1) % capacity;

        Ok(removed)
    }

    /// Move the first entry matching `id` to its place for `new_priority`
    pub fn change_value(&mut self, id: &T, new_priority: P) -> Result<(), SequenceError> {
        let (id, _) = self.remove(id)?.into_parts();
        self.insert(id, new_priority);
        Ok(())
    }

    /// Remove and return the identifier with the smallest priority
    pub fn get_smallest(&mut self) -> Result<T, SequenceError> {

        if self.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }

        let entry = self.slots[self.front]
            .take()
            .ok_or(SequenceError::EmptyContainer)?;
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;

        Ok(entry.id)
    }

    /// Entry with the smallest priority, without removing it
    pub fn peek_smallest(&self) -> Option<&Entry<T, P>> {
        self.iter().next()
    }

    pub fn contains(&self, id: &T) -> bool {
        self.position(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn rear(&self) -> usize {
        self.rear
    }

    /// Entries from front (smallest) to rear (largest)
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T, P>> + '_ {
        (0..self.count).filter_map(move |i| self.slots[self.physical(i)].as_ref())
    }

    /// Logical index (0 = front) of the first entry matching `id`
    fn position(&self, id: &T) -> Option<usize> {
        (0..self.count).find(|&i| {
            self.slots[self.physical(i)]
                .as_ref()
                .is_some_and(|entry| entry.id == *id)
        })
    }

    fn physical(&self, logical: usize) -> usize {
        (self.front + logical) % self.slots.len()
    }

    /// Double the buffer
    /// Entry k stays at (front + k) modulo the new capacity so the old front is kept
    fn expand_capacity(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;

        let mut larger = Vec::with_capacity(new_capacity);
        larger.resize_with(new_capacity, || None);

        for k in 0..self.count {
            let from = (self.front + k) % old_capacity;
            larger[(self.front + k) % new_capacity] = self.slots[from].take();
        }

        self.slots = larger;
        self.rear = (self.front + new_capacity + self.count - 1) % new_capacity;

        trace!("ordered sequence grew from {old_capacity} to {new_capacity} slots");
    }
}

impl<T, P> Default for OrderedSequence<T, P>
where
    T: PartialEq,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn priorities<T: PartialEq>(seq: &OrderedSequence<T>) -> Vec<i32> {
        seq.iter().map(|entry| entry.priority()).collect()
    }

    fn drain<T: PartialEq>(seq: &mut OrderedSequence<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(id) = seq.get_smallest() {
            out.push(id);
        }
        out
    }

    #[test]
    fn test_new_sequence_is_empty() {
        let mut seq: OrderedSequence<&str> = OrderedSequence::new();

        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 5);
        assert_eq!(seq.front(), 1);
        assert_eq!(seq.rear(), 0);
        assert_eq!(seq.get_smallest(), Err(SequenceError::EmptyContainer));
    }

    #[test]
    fn test_insert_keeps_priorities_sorted() {
        let mut seq = OrderedSequence::new();
        for (id, priority) in [("a", 7), ("b", 2), ("c", 9), ("d", 2), ("e", 0), ("f", 5)] {
            seq.insert(id, priority);
        }

        assert_eq!(priorities(&seq), vec![0, 2, 2, 5, 7, 9]);
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn test_get_smallest_order_and_tie_break() {
        let mut seq = OrderedSequence::new();
        for (id, priority) in [("a", 5), ("b", 1), ("c", 3), ("d", 1), ("e", 4)] {
            seq.insert(id, priority);
        }

        // b and d share priority 1, b went in first
        assert_eq!(drain(&mut seq), vec!["b", "d", "c", "e", "a"]);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_get_value_after_insert() {
        let mut seq = OrderedSequence::new();
        seq.insert("x", 3);
        seq.insert("y", -4);

        assert_eq!(seq.get_value(&"x"), Ok(3));
        assert_eq!(seq.get_value(&"y"), Ok(-4));
        assert_eq!(seq.get_value(&"z"), Err(SequenceError::NotFound));
    }

    #[test]
    fn test_get_value_returns_first_match() {
        let mut seq = OrderedSequence::new();
        seq.insert("dup", 8);
        seq.insert("dup", 1);

        assert_eq!(seq.get_value(&"dup"), Ok(1));
    }

    #[test]
    fn test_remove_shifts_following_entries() {
        let mut seq = OrderedSequence::new();
        for (id, priority) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            seq.insert(id, priority);
        }

        let removed = seq.remove(&"b").unwrap();
        assert_eq!(removed.into_parts(), ("b", 2));
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.rear(), 3);
        assert!(!seq.contains(&"b"));
        assert_eq!(drain(&mut seq), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_missing_leaves_sequence_unchanged() {
        let mut seq = OrderedSequence::new();
        for (id, priority) in [("a", 4), ("b", 2), ("c", 6)] {
            seq.insert(id, priority);
        }
        let (front, rear) = (seq.front(), seq.rear());

        assert!(matches!(seq.remove(&"zz"), Err(SequenceError::NotFound)));
        assert_eq!(seq.len(), 3);
        assert_eq!((seq.front(), seq.rear()), (front, rear));
        assert_eq!(priorities(&seq), vec![2, 4, 6]);
    }

    #[test]
    fn test_change_value_reorders() {
        let mut seq = OrderedSequence::new();
        for (id, priority) in [("a", 1), ("b", 2), ("c", 3)] {
            seq.insert(id, priority);
        }

        seq.change_value(&"a", 10).unwrap();
        assert_eq!(seq.get_value(&"a"), Ok(10));
        assert_eq!(seq.len(), 3);

        seq.change_value(&"c", 0).unwrap();
        assert_eq!(drain(&mut seq), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_change_value_missing_is_atomic() {
        let mut seq = OrderedSequence::new();
        seq.insert("a", 1);
        seq.insert("b", 2);

        assert_eq!(seq.change_value(&"q", 0), Err(SequenceError::NotFound));
        assert_eq!(seq.len(), 2);
        assert_eq!(drain(&mut seq), vec!["a", "b"]);
    }

    #[test]
    fn test_capacity_doubles_and_keeps_entries() {
        let mut seq = OrderedSequence::new();
        for id in 0..12 {
            seq.insert(id, (id * 7) % 5);
        }

        assert_eq!(seq.capacity(), 20);
        assert_eq!(seq.len(), 12);
        for id in 0..12 {
            assert_eq!(seq.get_value(&id), Ok((id * 7) % 5), "lost entry {id}");
        }
        assert_eq!(priorities(&seq), vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn test_growth_after_wraparound() {
        let mut seq = OrderedSequence::new();
        for id in 0..5 {
            seq.insert(id, id);
        }
        // slots 1..=4 then 0
        assert_eq!(seq.rear(), 0);

        for expected in 0..3 {
            assert_eq!(seq.get_smallest(), Ok(expected));
        }
        assert_eq!(seq.front(), 4);

        for id in 10..13 {
            seq.insert(id, id);
        }
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.capacity(), 5);

        // full buffer with the front in the middle
        seq.insert(13, 13);
        assert_eq!(seq.capacity(), 10);
        assert_eq!(seq.front(), 4);
        assert_eq!(seq.rear(), 9);
        assert_eq!(drain(&mut seq), vec![3, 4, 10, 11, 12, 13]);
    }

    #[test]
    fn test_remove_and_ties_with_front_at_slot_zero() {
        fn rear_follows_front<T: PartialEq>(seq: &OrderedSequence<T>) {
            let capacity = seq.capacity();
            assert_eq!(seq.rear(), (seq.front() + capacity + seq.len() - 1) % capacity);
        }

        let mut seq = OrderedSequence::new();
        for id in 0..5 {
            seq.insert(id, id);
        }
        for expected in 0..4 {
            assert_eq!(seq.get_smallest(), Ok(expected));
        }
        assert_eq!(seq.front(), 0);

        for id in 5..9 {
            seq.insert(id, id);
        }
        assert_eq!(seq.len(), seq.capacity());
        rear_follows_front(&seq);

        seq.remove(&6).unwrap();
        rear_follows_front(&seq);

        seq.insert(9, 1);
        rear_follows_front(&seq);
        seq.insert(10, 1);
        rear_follows_front(&seq);
        assert_eq!(seq.capacity(), 10);

        let mut drained = Vec::new();
        while let Ok(id) = seq.get_smallest() {
            drained.push(id);
            rear_follows_front(&seq);
        }
        assert_eq!(drained, vec![9, 10, 4, 5, 7, 8]);
    }

    #[test]
    fn test_insert_into_middle_across_wraparound() {
        let mut seq = OrderedSequence::new();
        for id in 0..4 {
            seq.insert(id, id * 10);
        }
        assert_eq!(seq.get_smallest(), Ok(0));
        assert_eq!(seq.get_smallest(), Ok(1));
        seq.insert(50, 50);
        seq.insert(60, 60);
        // entries now wrap past the end of the buffer
        seq.insert(15, 15);

        assert_eq!(priorities(&seq), vec![15, 20, 30, 50, 60]);
        assert_eq!(seq.peek_smallest().map(|entry| *entry.id()), Some(15));
    }

    #[test]
    fn test_with_capacity_of_zero() {
        let mut seq = OrderedSequence::with_capacity(0);
        assert_eq!(seq.capacity(), 1);

        seq.insert('a', 2);
        seq.insert('b', 1);
        seq.insert('c', 3);

        assert_eq!(seq.capacity(), 4);
        assert_eq!(drain(&mut seq), vec!['b', 'a', 'c']);
    }

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::new("cell", 4);

        assert_eq!(entry.id(), &"cell");
        assert_eq!(entry.priority(), 4);
        assert_eq!(entry.into_parts(), ("cell", 4));
    }

    #[test]
    fn test_random_operations_match_model() {
        // model: stable sorted vec of (id, priority)
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = OrderedSequence::new();
        let mut model: Vec<(u32, i32)> = Vec::new();
        let mut next_id = 0u32;

        for _ in 0..2000 {
            match rng.random_range(0..10) {
                0..=4 => {
                    let priority = rng.random_range(-20..20);
                    seq.insert(next_id, priority);
                    let at = model.partition_point(|&(_, p)| p <= priority);
                    model.insert(at, (next_id, priority));
                    next_id += 1;
                }
                5..=6 => {
                    let id = rng.random_range(0..next_id.max(1) + 5);
                    match model.iter().position(|&(m, _)| m == id) {
                        Some(at) => {
                            model.remove(at);
                            assert!(seq.remove(&id).is_ok());
                        }
                        None => assert!(matches!(seq.remove(&id), Err(SequenceError::NotFound))),
                    }
                }
                7 => {
                    let id = rng.random_range(0..next_id.max(1));
                    let priority = rng.random_range(-20..20);
                    match model.iter().position(|&(m, _)| m == id) {
                        Some(at) => {
                            model.remove(at);
                            let to = model.partition_point(|&(_, p)| p <= priority);
                            model.insert(to, (id, priority));
                            assert_eq!(seq.change_value(&id, priority), Ok(()));
                        }
                        None => assert_eq!(seq.change_value(&id, priority), Err(SequenceError::NotFound)),
                    }
                }
                _ => {
                    if model.is_empty() {
                        assert_eq!(seq.get_smallest(), Err(SequenceError::EmptyContainer));
                    } else {
                        assert_eq!(seq.get_smallest(), Ok(model.remove(0).0));
                    }
                }
            }

            assert_eq!(seq.len(), model.len());
            assert!(seq.len() <= seq.capacity());
            let current: Vec<(u32, i32)> = seq.iter().map(|entry| (*entry.id(), entry.priority())).collect();
            assert_eq!(current, model);
        }
    }
}
