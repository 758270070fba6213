// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::{CircularQueue, QueueStorage};

impl<T> CircularQueue<T> {
    /// Borrowing iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> CircularQueueIterator<'_, T> {
        CircularQueueIterator {
            storage: self.storage(),
            iterator_index: 0,
        }
    }
}

/// This implementation allows the queue to be used in a for loop directly.
impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = CircularQueueIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Same as [`CircularQueue::add`]: the whole iterator is one batch.
impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) { self.add(iter); }
}

/// Builds a default (fixed capacity, overwrite oldest) queue, so only the last
/// [`crate::DEFAULT_GUARANTEED_SIZE`] items survive. Use [`CircularQueue::try_new`] and
/// [`Extend`] for any other policy.
impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.add(iter);
        queue
    }
}

#[derive(Debug)]
pub struct CircularQueueIterator<'a, T> {
    storage: &'a QueueStorage<T>,
    iterator_index: usize,
}

impl<'a, T> Iterator for CircularQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.storage.get(self.iterator_index)?;
        self.iterator_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.len().saturating_sub(self.iterator_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for CircularQueueIterator<'_, T> {}

impl<T> FusedIterator for CircularQueueIterator<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QueueOption, assert_eq2};

    #[test]
    fn test_iter_empty() {
        let queue: CircularQueue<i32> = CircularQueue::new();
        let mut iter = queue.iter();
        assert_eq2!(iter.len(), 0);
        assert_eq2!(iter.next(), None);
    }

    #[test]
    fn test_iter_wrapped() {
        let mut queue = CircularQueue::try_new(QueueOption::FixedSize(3)).unwrap();
        queue.add(["Hello", "World", "Rust", "R3BL"]);

        let mut iter = queue.iter();
        assert_eq2!(iter.len(), 3);
        assert_eq2!(iter.next(), Some(&"World"));
        assert_eq2!(iter.next(), Some(&"Rust"));
        assert_eq2!(iter.len(), 1);
        assert_eq2!(iter.next(), Some(&"R3BL"));
        assert_eq2!(iter.next(), None);
        assert_eq2!(iter.next(), None);
    }

    #[test]
    fn test_into_iterator_implementation() {
        let mut queue = CircularQueue::new();
        queue.add(["Hello", "World", "Rust"]);

        let mut collected = Vec::new();
        for item in &queue {
            collected.push(*item);
        }
        assert_eq2!(collected, vec!["Hello", "World", "Rust"]);

        for (index, item) in (&queue).into_iter().enumerate() {
            match index {
                0 => assert_eq2!(*item, "Hello"),
                1 => assert_eq2!(*item, "World"),
                2 => assert_eq2!(*item, "Rust"),
                _ => panic!("Unexpected index: {index}"),
            }
        }

        let iter_results: Vec<_> = queue.iter().copied().collect();
        assert_eq2!(iter_results, queue.values());
    }

    #[test]
    fn test_extend_is_one_batch() {
        let mut queue = CircularQueue::try_new(QueueOption::GrowthFactor {
            growth: 2.0,
            shrink: 0.0,
        })
        .unwrap();
        queue.extend(0..8);
        queue.extend(8..10);
        assert_eq2!(queue.capacity(), 20);
        assert_eq2!(queue.len(), 10);
    }

    #[test]
    fn test_from_iterator_uses_default_policy() {
        let queue: CircularQueue<i32> = (0..10).collect();
        assert_eq2!(queue.capacity(), 8);
        assert_eq2!(queue.values(), (2..10).collect::<Vec<_>>());
    }
}
