use std::fmt::Debug;

/// A value stored in the heap together with its priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> HeapEntry<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        HeapEntry { value, priority }
    }
}

/// Index of the parent slot. Only meaningful for `index > 0`.
#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Checks `priority(parent(i)) <= priority(i)` for every non-root slot
pub(crate) fn heap_ordered<V, P: PartialOrd>(entries: &[HeapEntry<V, P>]) -> bool {
    (1..entries.len()).all(|i| entries[parent(i)].priority <= entries[i].priority)
}

/// Picks the slot the entry at `index` should swap with while bubbling down,
/// or `None` when no child has a strictly smaller priority.
///
/// With two children the smaller one is chosen, the left one on ties.
pub(crate) fn smaller_child<V, P: PartialOrd>(
    entries: &[HeapEntry<V, P>],
    index: usize,
) -> Option<usize> {
    let len = entries.len();
    let left = left_child(index);
    if left >= len {
        return None;
    }

    let right = right_child(index);
    let candidate = if right < len && entries[right].priority < entries[left].priority {
        right
    } else {
        left
    };

    if entries[candidate].priority < entries[index].priority {
        Some(candidate)
    } else {
        None
    }
}

/// Array-backed binary min-heap keyed by priority
///
/// The tree is implicit: the parent of slot `i > 0` is `(i - 1) / 2` and its
/// children are `2i + 1` and `2i + 2`. Equal priorities are not kept in
/// insertion order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<V, P> {
    /// Backing storage, heap-ordered by priority
    entries: Vec<HeapEntry<V, P>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            entries: Vec::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Read-only view of the backing storage in heap order
    pub fn entries(&self) -> &[HeapEntry<V, P>] {
        &self.entries
    }

    /// Returns true if every entry's priority is at least its parent's
    pub fn is_heap_ordered(&self) -> bool {
        heap_ordered(&self.entries)
    }

    /// Inserts a value, then bubbles it up towards the root
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.entries.push(HeapEntry::new(value, priority));
        self.bubble_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the lowest priority,
    /// or `None` when the queue is empty
    pub fn dequeue(&mut self) -> Option<HeapEntry<V, P>> {
        match self.entries.len() {
            0 => None,
            1 => self.entries.pop(),
            _ => {
                // Move the last entry into the root slot, then restore order
                let root = self.entries.swap_remove(0);
                self.bubble_down(0);
                Some(root)
            }
        }
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<&HeapEntry<V, P>> {
        self.entries.first()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drains the queue, returning its entries by non-decreasing priority
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<V, P>> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.dequeue() {
            sorted.push(entry);
        }
        sorted
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.entries[index].priority < self.entries[up].priority {
                self.entries.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        while let Some(child) = smaller_child(&self.entries, index) {
            self.entries.swap(index, child);
            index = child;
        }
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Extend<(V, P)> for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V, P> FromIterator<(V, P)> for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let mut queue = MinPriorityQueue::new();
        queue.extend(iter);
        queue
    }
}
