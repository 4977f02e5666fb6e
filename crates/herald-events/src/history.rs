use std::collections::VecDeque;

/// Fixed-capacity history, the oldest entry is evicted first.
#[derive(Debug, Clone)]
pub struct EventHistory<T> {
    inner: VecDeque<T>,
    capacity: usize,
}
impl<T> EventHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    // Inserts
    /// Returns the evicted entry, if any. A zero capacity keeps nothing.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.inner.len() == self.capacity {
            self.inner.pop_front()
        } else {
            None
        };
        self.inner.push_back(value);
        evicted
    }
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let pos = self.inner.iter().position(|v| pred(v))?;
        self.inner.remove(pos)
    }

    // Getters
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }
    pub fn last(&self) -> Option<&T> {
        self.inner.back()
    }
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.inner.iter().find(|v| pred(v))
    }

    // Iterators
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = EventHistory::new(2);
        assert_eq!(history.push(1), None);
        assert_eq!(history.push(2), None);
        assert_eq!(history.push(3), Some(1));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(history.last(), Some(&3));
        assert_eq!(history.get(0), Some(&2));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = EventHistory::new(0);
        assert_eq!(history.push("a"), Some("a"));
        assert!(history.is_empty());
    }

    #[test]
    fn remove_where_takes_first_match() {
        let mut history = EventHistory::new(4);
        for v in [1, 2, 3, 2] {
            history.push(v);
        }
        assert_eq!(history.remove_where(|v| *v == 2), Some(2));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
        assert_eq!(history.find(|v| *v > 2), Some(&3));
        assert_eq!(history.len(), 3);
    }
}
