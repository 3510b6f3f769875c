//! Bounded deque for on-screen item buffering
//!
//! Provides a fixed-capacity deque that automatically evicts oldest items
//! when capacity is reached (FIFO eviction).

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
///
/// When the deque reaches its capacity, the oldest item is removed and
/// returned when a new item is pushed.
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a new bounded deque with the specified capacity
    ///
    /// # Arguments
    /// * `cap` - Maximum number of items to store. If 0, push operations are no-ops.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(64)),
        }
    }

    /// Push a new value, returning the evicted oldest item if at capacity
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.cap == 0 {
            return None;
        }
        let evicted = if self.buf.len() >= self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Keep only the items matching the predicate
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.buf.retain(f);
    }

    /// Change the capacity, evicting oldest items that no longer fit
    pub fn set_capacity(&mut self, cap: usize) {
        self.cap = cap;
        while self.buf.len() > cap {
            self.buf.pop_front();
        }
    }

    /// Get an iterator over the items (oldest to newest)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Get the number of items currently stored
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the deque is empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Get the most recent item
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(deque: &BoundedDeque<i32>) -> Vec<i32> {
        deque.iter().copied().collect()
    }

    #[test]
    fn test_bounded_deque_basic() {
        let mut deque = BoundedDeque::new(3);
        deque.push(1);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.len(), 3);
        assert_eq!(items(&deque), vec![1, 2, 3]);
    }

    #[test]
    fn test_bounded_deque_eviction() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.push(1), None);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.push(4), Some(1));
        assert_eq!(deque.len(), 3);
        assert_eq!(items(&deque), vec![2, 3, 4]);
    }

    #[test]
    fn test_bounded_deque_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        assert_eq!(deque.push(1), None);
        assert!(deque.is_empty());
    }

    #[test]
    fn test_bounded_deque_retain() {
        let mut deque = BoundedDeque::new(4);
        for i in 1..=4 {
            deque.push(i);
        }
        deque.retain(|v| v % 2 == 0);
        assert_eq!(items(&deque), vec![2, 4]);
        assert_eq!(deque.last(), Some(&4));
    }

    #[test]
    fn test_bounded_deque_shrink_capacity() {
        let mut deque = BoundedDeque::new(5);
        for i in 1..=5 {
            deque.push(i);
        }
        deque.set_capacity(2);
        assert_eq!(deque.capacity(), 2);
        assert_eq!(items(&deque), vec![4, 5]);
    }
}
