use std::collections::VecDeque;

/// FIFO queue over a ring buffer, so both ends are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the element that has waited longest.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    /// The first element of the vector is at the front.
    fn from(items: Vec<T>) -> Self {
        Self { items: items.into() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_is_fifo() {
        let mut queue = Queue::new();
        queue.enqueue('A');
        queue.enqueue('B');
        queue.enqueue('C');

        assert_eq!(queue.dequeue(), Some('A'));
        assert_eq!(queue.dequeue(), Some('B'));
        assert_eq!(queue.dequeue(), Some('C'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn interleaved_operations_keep_order() {
        let mut queue: Queue<u32> = (1..=2).collect();
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.front(), Some(&2));
        let rest: Vec<u32> = queue.iter().copied().collect();
        assert_eq!(rest, vec![2, 3]);
    }

    #[test]
    fn dequeue_on_empty_leaves_queue_empty() {
        let mut queue: Queue<String> = Queue::default();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.len(), 0);
    }
}
