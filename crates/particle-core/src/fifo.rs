use std::collections::VecDeque;

/// Fixed-capacity FIFO. Pushing past capacity drops from the front, so the
/// container always holds the newest `capacity` items in insertion order.
///
/// Used both for particle trails and for the particle set itself.
#[derive(Clone, Debug)]
pub struct BoundedFifo<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedFifo<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `item`, returning how many items were evicted from the front.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push_back(item);
        let mut evicted = 0;
        while self.items.len() > self.capacity {
            self.items.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.items.iter_mut()
    }

    /// Contiguous view of the contents, oldest first.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        self.items.make_contiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_past_capacity() {
        let mut fifo = BoundedFifo::with_capacity(3);
        assert_eq!(fifo.push(1), 0);
        assert_eq!(fifo.push(2), 0);
        assert_eq!(fifo.push(3), 0);
        assert_eq!(fifo.push(4), 1);
        assert_eq!(fifo.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(fifo.front(), Some(&2));
        assert_eq!(fifo.back(), Some(&4));
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut fifo = BoundedFifo::with_capacity(0);
        assert_eq!(fifo.push('x'), 1);
        assert!(fifo.is_empty());
    }
}
