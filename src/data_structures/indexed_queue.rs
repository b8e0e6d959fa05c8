use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::priority_queue::{heap_ordered, parent, smaller_child, HeapEntry};

/// Binary min-heap that tracks the slot of every value, allowing a queued
/// value's priority to be lowered in place instead of queueing it twice.
///
/// Each value appears at most once.
#[derive(Debug, Clone)]
pub struct IndexedMinPriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
{
    entries: Vec<HeapEntry<V, P>>,
    /// value -> current slot in `entries`
    slots: HashMap<V, usize>,
}

impl<V, P> IndexedMinPriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: PartialOrd + Copy + Debug,
{
    pub fn new() -> Self {
        IndexedMinPriorityQueue {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, value: &V) -> bool {
        self.slots.contains_key(value)
    }

    /// Current priority of a queued value
    pub fn priority_of(&self, value: &V) -> Option<P> {
        self.slots.get(value).map(|&slot| self.entries[slot].priority)
    }

    pub fn entries(&self) -> &[HeapEntry<V, P>] {
        &self.entries
    }

    pub fn is_heap_ordered(&self) -> bool {
        heap_ordered(&self.entries)
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(slot, entry)| self.slots.get(&entry.value) == Some(&slot))
    }

    /// Inserts `value` if absent, or lowers its priority if `priority` is
    /// strictly below the queued one. Returns false when nothing changed.
    pub fn push_or_decrease(&mut self, value: V, priority: P) -> bool {
        match self.slots.get(&value) {
            Some(&slot) => {
                if priority < self.entries[slot].priority {
                    self.entries[slot].priority = priority;
                    self.bubble_up(slot);
                    true
                } else {
                    false
                }
            }
            None => {
                let slot = self.entries.len();
                self.slots.insert(value.clone(), slot);
                self.entries.push(HeapEntry::new(value, priority));
                self.bubble_up(slot);
                true
            }
        }
    }

    /// Removes and returns the entry with the lowest priority
    pub fn pop(&mut self) -> Option<HeapEntry<V, P>> {
        if self.entries.is_empty() {
            return None;
        }

        let root = self.entries.swap_remove(0);
        self.slots.remove(&root.value);
        if !self.entries.is_empty() {
            self.slots.insert(self.entries[0].value.clone(), 0);
            self.bubble_down(0);
        }
        Some(root)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        if let Some(slot) = self.slots.get_mut(&self.entries[a].value) {
            *slot = a;
        }
        if let Some(slot) = self.slots.get_mut(&self.entries[b].value) {
            *slot = b;
        }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.entries[index].priority < self.entries[up].priority {
                self.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        while let Some(child) = smaller_child(&self.entries, index) {
            self.swap(index, child);
            index = child;
        }
    }
}

impl<V, P> Default for IndexedMinPriorityQueue<V, P>
where
    V: Eq + Hash + Clone,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
