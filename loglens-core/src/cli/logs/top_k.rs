use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Running top-K: keeps the `capacity` greatest items pushed so far.
///
/// Backed by a min-heap, so the smallest retained item is evicted first and
/// memory stays O(capacity). When an item compares equal to the current
/// minimum of a full heap, the retained item wins; encode any tie-break in
/// `T`'s ordering.
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    capacity: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return;
        }

        if let Some(mut min) = self.heap.peek_mut() {
            if item > min.0 {
                // PeekMut restores the heap property on drop.
                *min = Reverse(item);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Greatest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}
